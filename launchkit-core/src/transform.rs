//! Pure text transforms applied to clipboard content

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LaunchError;

/// Built-in clipboard transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Full Unicode uppercase mapping
    #[default]
    Uppercase,
    /// Full Unicode lowercase mapping
    Lowercase,
    /// First cased character of every word upper, the rest lower
    Titlecase,
    /// Strip leading and trailing whitespace
    Trim,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Uppercase,
        TransformKind::Lowercase,
        TransformKind::Titlecase,
        TransformKind::Trim,
    ];

    /// The transform as a plain function pointer.
    pub fn as_fn(self) -> fn(&str) -> String {
        match self {
            TransformKind::Uppercase => uppercase,
            TransformKind::Lowercase => lowercase,
            TransformKind::Titlecase => titlecase,
            TransformKind::Trim => trim,
        }
    }

    pub fn apply(self, input: &str) -> String {
        (self.as_fn())(input)
    }

    /// Human-readable description used in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            TransformKind::Uppercase => "Converted to uppercase",
            TransformKind::Lowercase => "Converted to lowercase",
            TransformKind::Titlecase => "Converted to title case",
            TransformKind::Trim => "Trimmed whitespace",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Uppercase => "uppercase",
            TransformKind::Lowercase => "lowercase",
            TransformKind::Titlecase => "titlecase",
            TransformKind::Trim => "trim",
        }
    }

    /// One-line summary, e.g. `Converted to uppercase (11 chars)`.
    pub fn summary(self, output: &str) -> String {
        summarize(self.label(), output)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                LaunchError::Config(format!(
                    "Invalid transform '{}'. Must be one of: uppercase, lowercase, titlecase, trim",
                    s
                ))
            })
    }
}

/// Summary line for `output`, counting Unicode scalar values.
pub fn summarize(label: &str, output: &str) -> String {
    format!("{} ({} chars)", label, output.chars().count())
}

pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

pub fn trim(input: &str) -> String {
    input.trim().to_string()
}

/// Word boundaries are any non-alphabetic character, so `they're` becomes
/// `They'Re`.
pub fn titlecase(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_cased = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(ch);
            prev_cased = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_reference_scenario() {
        let output = TransformKind::Uppercase.apply("hello world");
        assert_eq!(output, "HELLO WORLD");
        assert_eq!(
            TransformKind::Uppercase.summary(&output),
            "Converted to uppercase (11 chars)"
        );
    }

    #[test]
    fn test_uppercase_ascii_letters_keep_length() {
        for input in ["a", "abcXYZ", "MixedCase", "zzzzzzzzzzzzzzzzzzzz"] {
            let output = uppercase(input);
            assert_eq!(output, input.to_ascii_uppercase());
            assert_eq!(output.chars().count(), input.len());
        }
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        for input in ["hello world", "déjà vu", "Straße", ""] {
            let once = uppercase(input);
            assert_eq!(uppercase(&once), once);
        }
    }

    #[test]
    fn test_uppercase_full_unicode_mapping_changes_count() {
        let output = uppercase("straße");
        assert_eq!(output, "STRASSE");
        assert_eq!(
            TransformKind::Uppercase.summary(&output),
            "Converted to uppercase (7 chars)"
        );
    }

    #[test]
    fn test_summary_counts_chars_not_bytes() {
        assert_eq!(summarize("Converted to uppercase", "ÉÉ"), "Converted to uppercase (2 chars)");
        assert_eq!(summarize("Converted to uppercase", ""), "Converted to uppercase (0 chars)");
    }

    #[test]
    fn test_other_transforms() {
        assert_eq!(lowercase("HeLLo"), "hello");
        assert_eq!(trim("  padded \n"), "padded");
        assert_eq!(titlecase("hello wORLD, they're 3rd"), "Hello World, They'Re 3Rd");
    }

    #[test]
    fn test_labels() {
        assert_eq!(TransformKind::Lowercase.summary("ab"), "Converted to lowercase (2 chars)");
        assert_eq!(TransformKind::Titlecase.summary("Ab"), "Converted to title case (2 chars)");
        assert_eq!(TransformKind::Trim.summary("ab"), "Trimmed whitespace (2 chars)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("uppercase".parse::<TransformKind>().unwrap(), TransformKind::Uppercase);
        assert_eq!(" TRIM ".parse::<TransformKind>().unwrap(), TransformKind::Trim);
        assert!("reverse".parse::<TransformKind>().is_err());
    }

    #[test]
    fn test_default_is_uppercase() {
        assert_eq!(TransformKind::default(), TransformKind::Uppercase);
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            transform: TransformKind,
        }

        let parsed: Wrapper = toml::from_str("transform = \"titlecase\"").unwrap();
        assert_eq!(parsed.transform, TransformKind::Titlecase);
    }
}
