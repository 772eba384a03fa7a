mod cli;
mod error;
mod extract;
mod ui;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    let config = cli.extract_config();

    let result = if cli.list {
        extract::list(&config)
    } else {
        extract::execute(&config).map(|_| ())
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
