// src/main.rs

use anyhow::Result;
use clap::Parser;
use pathscan::cli::Cli;
use pathscan::config::ConfigBuilder;
use pathscan::run;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the crate default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "pathscan=debug".parse()?
                } else {
                    "pathscan=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting pathscan v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    // --- Error Handling ---
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
