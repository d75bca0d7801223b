//! Command line interface of `pixelc`.

pub mod check;
pub mod parse;
pub mod tokens;

use crate::compiler::settings::{Setting, Settings};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    version = "0.1",
    about = "Front end of the pixel image language: lexer, parser and type checker"
)]
pub struct Cli {
    /// Log every token at info level
    #[clap(long)]
    pub dump_tokens: bool,

    /// Log the parsed program at info level
    #[clap(long)]
    pub dump_ast: bool,

    /// Log every declaration with its type at info level
    #[clap(long)]
    pub dump_types: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of a file
    Tokens(tokens::Opts),
    /// Parse a file and print the program
    Parse(parse::Opts),
    /// Parse and type check a file
    Check(check::Opts),
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        settings.set(Setting::DumpTokens, self.dump_tokens);
        settings.set(Setting::DumpAst, self.dump_ast);
        settings.set(Setting::DumpTypes, self.dump_types);

        settings
    }
}

pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let settings = cli.settings();

    match &cli.command {
        Command::Tokens(opts) => tokens::execute(opts, settings),
        Command::Parse(opts) => parse::execute(opts, settings),
        Command::Check(opts) => check::execute(opts, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let cli = Cli::try_parse_from(&["pixelc", "--dump-ast", "check", "prog.pix"]).unwrap();
        let settings = cli.settings();

        assert!(settings.is_enabled(Setting::DumpAst));
        assert!(!settings.is_enabled(Setting::DumpTokens));
        assert_matches!(cli.command, Command::Check(ref opts) if opts.input == "prog.pix");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(&["pixelc"]).is_err());
    }
}
