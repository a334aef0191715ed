//! Error types for flash-matchers.
//!
//! A failed assertion is never an error: [`SetFlashMatcher::matches`]
//! reports it as `Ok(false)` together with the failure message strings.
//! The variants here cover contract violations only, where the object
//! under test does not satisfy the controller contract at all.
//!
//! [`SetFlashMatcher::matches`]: crate::matcher::SetFlashMatcher::matches

use thiserror::Error;

/// The error type for matcher evaluation.
#[derive(Debug, Error)]
pub enum FlashError {
    /// The controller does not expose a flash store.
    #[error("controller does not support flash messages: {reason}")]
    FlashUnsupported {
        /// Why the flash store is unavailable.
        reason: String,
    },

    /// The controller does not expose session storage.
    #[error("controller does not expose session storage: {reason}")]
    SessionUnsupported {
        /// Why the session is unavailable.
        reason: String,
    },

    /// The prior-cycle flash snapshot in the session is not a
    /// string-to-string object.
    #[error("malformed flash snapshot in session: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Invalid regex passed to a pattern expectation.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for matcher operations.
pub type Result<T> = std::result::Result<T, FlashError>;

impl FlashError {
    /// Create a flash-unsupported error.
    pub fn flash_unsupported(reason: impl Into<String>) -> Self {
        Self::FlashUnsupported {
            reason: reason.into(),
        }
    }

    /// Create a session-unsupported error.
    pub fn session_unsupported(reason: impl Into<String>) -> Self {
        Self::SessionUnsupported {
            reason: reason.into(),
        }
    }

    /// Check if this error reports a missing controller accessor.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::FlashUnsupported { .. } | Self::SessionUnsupported { .. }
        )
    }
}
