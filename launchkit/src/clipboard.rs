//! Clipboard access and the read → transform → write cycle.

use launchkit_core::LaunchError;
use tracing::debug;

/// Synchronous get/set pair over a text clipboard.
pub trait ClipboardProvider {
    /// Current text content; empty when the clipboard holds no text.
    fn read_text(&mut self) -> Result<String, LaunchError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), LaunchError>;
}

/// The operating system clipboard, via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, LaunchError> {
        let inner = arboard::Clipboard::new().map_err(clipboard_error)?;
        Ok(Self { inner })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, LaunchError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard or non-text content
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("Clipboard holds no text, using empty string");
                Ok(String::new())
            }
            Err(e) => Err(clipboard_error(e)),
        }
    }

    // On X11 the selection is served by this process; once it exits the text
    // survives only if a clipboard manager took it over during arboard's drop.
    fn write_text(&mut self, text: &str) -> Result<(), LaunchError> {
        self.inner.set_text(text).map_err(clipboard_error)
    }
}

fn clipboard_error(err: arboard::Error) -> LaunchError {
    LaunchError::Clipboard(err.to_string())
}

/// Read the clipboard once, apply `transform`, write the result once.
///
/// Returns the transformed text. Nothing is written if the read fails.
pub fn transform_clipboard<C, F>(clipboard: &mut C, transform: F) -> Result<String, LaunchError>
where
    C: ClipboardProvider + ?Sized,
    F: Fn(&str) -> String,
{
    let content = clipboard.read_text()?;
    debug!(chars = content.chars().count(), "Read clipboard");

    let result = transform(&content);

    clipboard.write_text(&result)?;
    debug!(chars = result.chars().count(), "Wrote clipboard");

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryClipboard;
    use launchkit_core::TransformKind;

    #[test]
    fn test_uppercase_reference_scenario() {
        let mut clipboard = MemoryClipboard::with_text("hello world");

        let result = transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap();

        assert_eq!(result, "HELLO WORLD");
        assert_eq!(clipboard.content, "HELLO WORLD");
        assert_eq!(
            TransformKind::Uppercase.summary(&result),
            "Converted to uppercase (11 chars)"
        );
    }

    #[test]
    fn test_exactly_one_read_and_one_write() {
        let mut clipboard = MemoryClipboard::with_text("abc");

        transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap();

        assert_eq!(clipboard.reads, 1);
        assert_eq!(clipboard.writes, 1);
    }

    #[test]
    fn test_empty_clipboard() {
        let mut clipboard = MemoryClipboard::default();

        let result = transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap();

        assert_eq!(result, "");
        assert_eq!(clipboard.writes, 1);
        assert_eq!(
            TransformKind::Uppercase.summary(&result),
            "Converted to uppercase (0 chars)"
        );
    }

    #[test]
    fn test_running_twice_is_idempotent() {
        let mut clipboard = MemoryClipboard::with_text("Mixed Case Text");

        transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap();
        let first = clipboard.content.clone();
        transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap();

        assert_eq!(clipboard.content, first);
    }

    #[test]
    fn test_injected_closure() {
        let mut clipboard = MemoryClipboard::with_text("abc");

        let result =
            transform_clipboard(&mut clipboard, |s: &str| s.chars().rev().collect()).unwrap();

        assert_eq!(result, "cba");
        assert_eq!(clipboard.content, "cba");
    }

    #[test]
    fn test_read_failure_skips_write() {
        let mut clipboard = MemoryClipboard {
            fail_read: true,
            ..MemoryClipboard::with_text("keep me")
        };

        let err = transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap_err();

        assert!(matches!(err, LaunchError::Clipboard(_)));
        assert_eq!(clipboard.writes, 0);
        assert_eq!(clipboard.content, "keep me");
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut clipboard = MemoryClipboard {
            fail_write: true,
            ..MemoryClipboard::with_text("abc")
        };

        let err = transform_clipboard(&mut clipboard, TransformKind::Uppercase.as_fn()).unwrap_err();

        assert_eq!(err.to_string(), "Clipboard error: clipboard occupied");
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut clipboard = MemoryClipboard::with_text("dyn");
        let provider: &mut dyn ClipboardProvider = &mut clipboard;

        let result = transform_clipboard(provider, TransformKind::Uppercase.as_fn()).unwrap();

        assert_eq!(result, "DYN");
    }
}
