use crate::compiler::settings::Settings;
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Parse the file specified by <input> and print it fully parenthesized")]
pub struct Opts {
    pub input: String,
}

pub fn execute(opts: &Opts, settings: Settings) -> anyhow::Result<()> {
    let source = FileSource::open(&opts.input)?;
    let mut compiler = Compiler::with_settings(settings);

    match compiler.parse(source) {
        Ok(program) => {
            print!("{}", program);
            Ok(())
        }
        Err(e) => {
            compiler.report(&e);
            anyhow::bail!("parsing {} failed", opts.input)
        }
    }
}
