//! fetch-json
//!
//! GET one endpoint and print its JSON body with 2-space indentation.
//! Transport and decode failures print a single `Error: ` line on stdout
//! and exit with status 1.

use clap::Parser;
use launchkit::cli::{fetch_config, handle_fetch, FetchCli};
use launchkit::format::{format_diagnostic, format_error_line};
use launchkit::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = FetchCli::parse();

    let config = match fetch_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_diagnostic(&e));
            std::process::exit(1);
        }
    };

    init_tracing(config.verbose);
    tracing::debug!(?config, "Configuration resolved");

    match handle_fetch(cli.endpoint, &config).await {
        Ok(rendered) => println!("{}", rendered),
        Err(e) if e.is_fetch_failure() => {
            println!("{}", format_error_line(&e));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", format_diagnostic(&e));
            std::process::exit(1);
        }
    }
}
