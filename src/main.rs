mod cli;
mod error;
mod input;

use std::process;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;
use tabular::TableRenderer;

fn run(cli: &Cli) -> Result<()> {
    let table = input::read(cli.input.as_deref(), cli.delimiter, !cli.no_header)?;

    let mut builder = TableRenderer::builder();
    if let Some(separator) = &cli.separator {
        builder = builder.column_separator(separator.clone());
    }
    if let Some(null_value) = &cli.null_value {
        builder = builder.null_placeholder(null_value.clone());
    }
    let renderer = builder.build();

    let output = renderer.render(&table.body, table.headline.as_deref())?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
