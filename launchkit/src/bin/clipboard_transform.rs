//! clipboard-transform
//!
//! Read the clipboard, transform it, write it back and print a summary.

use clap::Parser;
use launchkit::cli::{clipboard_config, handle_clipboard, ClipboardCli};
use launchkit::clipboard::SystemClipboard;
use launchkit::format::format_diagnostic;
use launchkit::logging::init_tracing;

fn main() {
    let cli = ClipboardCli::parse();

    let config = match clipboard_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_diagnostic(&e));
            std::process::exit(1);
        }
    };

    init_tracing(config.verbose);
    tracing::debug!(?config, "Configuration resolved");

    let summary = SystemClipboard::new()
        .and_then(|mut clipboard| handle_clipboard(&mut clipboard, config.transform));

    match summary {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("{}", format_diagnostic(&e));
            std::process::exit(1);
        }
    }
}
