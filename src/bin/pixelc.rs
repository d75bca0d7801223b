use clap::Parser;
use pixelc::cmd::{self, Cli};

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = cmd::execute(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
