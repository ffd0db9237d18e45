use clap::Parser;
use startingxi::adapter::inbound::cli::command::{Cli, ColorChoice};
use startingxi::adapter::inbound::cli::output::{self, OutputConfig};
use startingxi::adapter::inbound::cli::dispatch::{dispatch, logging_config};

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    logging_config(&cli.command)
        .logging
        .with_verbosity(cli.verbose)
        .init();

    if let Err(e) = dispatch(&cli.command) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
