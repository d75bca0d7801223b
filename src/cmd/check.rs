use crate::compiler::settings::Settings;
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Type check the file specified by <input>")]
pub struct Opts {
    pub input: String,
}

pub fn execute(opts: &Opts, settings: Settings) -> anyhow::Result<()> {
    let source = FileSource::open(&opts.input)?;
    let mut compiler = Compiler::with_settings(settings);

    match compiler.check(source) {
        Ok(checked) => {
            println!(
                "{}: ok, {} declarations",
                opts.input,
                checked.annotations.declarations().len()
            );
            Ok(())
        }
        Err(e) => {
            compiler.report(&e);
            anyhow::bail!("type checking {} failed", opts.input)
        }
    }
}
