use std::io::IsTerminal;

use clap::Parser;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pgframe::cli::{self, Cli, Commands};

fn main() {
    let format = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_file(false);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            file,
            schema,
            schema_file,
            limit,
            json,
        } => cli::show(file, schema, schema_file, limit, json),
        Commands::Verify { file } => cli::verify(file),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}
