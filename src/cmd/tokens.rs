use crate::compiler::settings::Settings;
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Print the tokens of the file specified by <input>")]
pub struct Opts {
    pub input: String,
}

pub fn execute(opts: &Opts, settings: Settings) -> anyhow::Result<()> {
    let source = FileSource::open(&opts.input)?;
    let mut compiler = Compiler::with_settings(settings);

    match compiler.tokenize(source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}\t{}\t{:?}", token.location, token.kind, token.text);
            }
            Ok(())
        }
        Err(e) => {
            compiler.report(&e);
            anyhow::bail!("tokenizing {} failed", opts.input)
        }
    }
}
