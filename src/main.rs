use clap::Parser;
use std::io::Write;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::models::BuildOptions;

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.format(|formatter, record| {
        writeln!(formatter, "[{}]: {}", record.level(), record.args())
    });

    if let Ok(var) = std::env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Warn);
    }

    builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let opts = BuildOptions {
        radios_dir: cli.radios.clone(),
        index_html: cli.index.clone(),
        dry_run: cli.dry_run,
    };
    commands::handle_build(cli.json, &opts)
}
