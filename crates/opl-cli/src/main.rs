//! Meet-progress analyzer CLI.

use clap::{ColorChoice, Parser};
use std::io::IsTerminal;

use opl_cli::cli::Cli;
use opl_cli::logging::init_logging;
use opl_cli::pipeline::run;
use opl_cli::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    };
    init_logging(cli.verbosity.tracing_level_filter(), with_ansi);

    match run(&cli) {
        Ok(output) => print_report(&output, cli.format),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}
