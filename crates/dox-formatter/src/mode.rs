//! Output mode selection.

use std::fmt;
use std::str::FromStr;

/// The output format a documentation run renders into.
///
/// The set of modes is closed: every mode has exactly one formatter, and
/// dispatch over modes is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputMode {
    /// Undecorated text.
    #[cfg_attr(feature = "serde", serde(alias = "plaintext"))]
    Plain,
    /// HTML fragments and pages.
    #[default]
    Html,
    /// LaTeX fragments.
    Latex,
}

impl OutputMode {
    /// File extension used for pages written in this mode.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Html => "html",
            Self::Latex => "tex",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Html => "html",
            Self::Latex => "latex",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "plaintext" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            "latex" => Ok(Self::Latex),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Error returned when a string names no known output mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output mode `{0}`, expected plain, html, or latex")]
pub struct ParseModeError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("plain".parse(), Ok(OutputMode::Plain));
        assert_eq!("html".parse(), Ok(OutputMode::Html));
        assert_eq!("latex".parse(), Ok(OutputMode::Latex));
    }

    #[test]
    fn test_parse_plaintext_alias() {
        assert_eq!("plaintext".parse(), Ok(OutputMode::Plain));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HTML".parse(), Ok(OutputMode::Html));
        assert_eq!("LaTeX".parse(), Ok(OutputMode::Latex));
    }

    #[test]
    fn test_parse_unknown_mode_fails() {
        let err = "markdown".parse::<OutputMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown output mode `markdown`, expected plain, html, or latex"
        );
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [OutputMode::Plain, OutputMode::Html, OutputMode::Latex] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_extension_per_mode() {
        assert_eq!(OutputMode::Plain.extension(), "txt");
        assert_eq!(OutputMode::Html.extension(), "html");
        assert_eq!(OutputMode::Latex.extension(), "tex");
    }

    #[test]
    fn test_default_is_html() {
        assert_eq!(OutputMode::default(), OutputMode::Html);
    }
}
