//! Convenient re-exports for common flash-matchers usage.
//!
//! This module provides a single import to access the most commonly used
//! types from flash-matchers.
//!
//! # Example
//!
//! ```
//! use flash_matchers::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let controller = MockController::builder()
//!     .flash("notice", "Welcome")
//!     .build();
//!
//! assert!(set_the_flash().matches(&controller)?);
//! # Ok(())
//! # }
//! ```

// Error handling
pub use crate::error::{FlashError, Result};

// Expectation types
pub use crate::expected::{ExpectedFlash, FlashPattern};

// The matcher
pub use crate::matcher::{SetFlashMatcher, set_the_flash};

// Controller state
pub use crate::store::{FLASH_SESSION_KEY, FlashState, FlashStore, SessionStore};

// Mock controller
#[cfg(any(test, feature = "mock"))]
pub use crate::mock::{MockController, MockControllerBuilder};
