//! launchkit Library
//!
//! Standalone launcher actions, each shipped as its own binary:
//!
//! - `fetch-json` - GET a URL and pretty-print the JSON body
//! - `clipboard-transform` - rewrite the clipboard text with a pure transform
//!
//! # Public API
//!
//! [`client::FetchClient`] performs the timeout-bounded fetch and
//! [`clipboard::transform_clipboard`] runs the read → transform → write cycle
//! over any [`clipboard::ClipboardProvider`].
//!
//! ```no_run
//! use launchkit::clipboard::{transform_clipboard, SystemClipboard};
//!
//! # fn example() -> Result<(), launchkit_core::LaunchError> {
//! let mut clipboard = SystemClipboard::new()?;
//! let result = transform_clipboard(&mut clipboard, |s: &str| s.to_lowercase())?;
//! println!("{} chars", result.chars().count());
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the fetch action.
pub mod client;

/// Clipboard providers and the transform cycle.
pub mod clipboard;

/// Configuration types.
pub mod config;

#[doc(hidden)]
pub mod format;

#[doc(hidden)]
pub mod logging;

#[cfg(test)]
pub mod test_utils;
