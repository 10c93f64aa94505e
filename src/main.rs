use clap::Parser;
use lintrc::cli::{self, Cli};
use lintrc::logging;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    process::exit(cli::run(cli.command));
}
