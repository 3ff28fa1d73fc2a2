mod cli;
mod commands;
mod input;
mod output;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use input::Input;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = cli.table_options();
    let result = commands::convert::run(Input::from_arg(cli.input), options);

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
