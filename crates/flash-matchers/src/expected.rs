//! Expectation types for the flash matcher.
//!
//! This module defines the tagged form of what a test may expect to find
//! among the flash messages: nothing in particular, an exact message, or
//! a regular expression.

use std::fmt;

use regex::Regex;

/// What the matcher expects to find among the flash messages.
#[derive(Clone, Default)]
pub enum ExpectedFlash {
    /// Any non-empty flash is acceptable.
    #[default]
    Any,

    /// Some message must equal this string exactly.
    Literal(String),

    /// Some message must match this pattern.
    Pattern(FlashPattern),
}

impl ExpectedFlash {
    /// Create a literal expectation.
    #[must_use]
    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    /// Create a pattern expectation.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::Pattern(FlashPattern::new(pattern.to_string(), regex)))
    }

    /// Check whether a single flash message satisfies this expectation.
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(s) => message == s,
            Self::Pattern(p) => p.is_match(message),
        }
    }

    /// Check if this is the unset expectation.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Representation of the expected value for descriptions, or `None`
    /// when nothing specific is expected.
    ///
    /// Literals render quoted, patterns render as `/source/`.
    #[must_use]
    pub fn repr(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::Literal(s) => Some(format!("{s:?}")),
            Self::Pattern(p) => Some(format!("/{}/", p.pattern())),
        }
    }
}

impl fmt::Debug for ExpectedFlash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Literal(s) => write!(f, "Literal({s:?})"),
            Self::Pattern(p) => write!(f, "Pattern({:?})", p.pattern()),
        }
    }
}

impl From<&str> for ExpectedFlash {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for ExpectedFlash {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<Regex> for ExpectedFlash {
    fn from(regex: Regex) -> Self {
        let pattern = regex.as_str().to_string();
        Self::Pattern(FlashPattern::new(pattern, regex))
    }
}

/// A compiled regular expression with its source pattern.
#[derive(Clone)]
pub struct FlashPattern {
    pattern: String,
    regex: Regex,
}

impl FlashPattern {
    /// Create a new compiled pattern.
    #[must_use]
    pub const fn new(pattern: String, regex: Regex) -> Self {
        Self { pattern, regex }
    }

    /// Get the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check whether the pattern matches anywhere in the text.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Debug for FlashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlashPattern({:?})", self.pattern)
    }
}
