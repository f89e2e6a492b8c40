//! launchkit Core Library
//!
//! Shared types and pure logic for the launchkit actions.
//! Nothing in this crate touches the network or the clipboard.

pub mod endpoint;
pub mod error;
pub mod json;
pub mod transform;

// Re-export commonly used types
pub use endpoint::{Endpoint, DEFAULT_ENDPOINT};
pub use error::*;
pub use json::{parse_payload, render_pretty, RenderOptions};
pub use transform::TransformKind;
