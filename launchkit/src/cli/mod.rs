//! CLI definitions and handlers
//!
//! - [`commands`] - argument parsers for both binaries
//! - [`handlers`] - action execution

mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;
