// Fixture Anonymizer - Scrub personal data from recorded test fixtures
// Copyright (c) 2025 Fixture Anonymizer Contributors
// Licensed under the MIT License

use clap::Parser;
use fixture_anonymizer::cli::commands::anonymize::CONFIG_ERROR_EXIT_CODE;
use fixture_anonymizer::cli::Cli;
use fixture_anonymizer::logging::init_logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(CONFIG_ERROR_EXIT_CODE);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Fixture Anonymizer");

    let exit_code = match cli.anonymize.execute(&config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Anonymization failed");
            eprintln!("Error: {e:#}");
            1
        }
    };

    // process::exit skips destructors, so flush the file log first
    drop(guard);
    process::exit(exit_code);
}
