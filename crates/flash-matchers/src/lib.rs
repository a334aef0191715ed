//! flash-matchers: behavioral assertion matchers for flash messages
//!
//! This crate provides a shoulda-style matcher that verifies a web request
//! handler set (or did not set) a flash-style transient message in session
//! state. It is an adapter for `should`/`should_not`-style test frameworks:
//! it reads a controller's flash store after a request, compares it against
//! an expected literal, pattern, or absence, and reports a boolean result
//! plus human-readable failure descriptions.
//!
//! # Features
//!
//! - **Literal, pattern, and presence expectations** via a consuming builder
//! - **`flash.now` support** for messages queued for the current render only
//! - **Contract-violation errors** distinct from plain non-matches
//! - **Mock controller** for testing without a real web framework
//!   (feature: `mock`, on by default)
//!
//! # Example
//!
//! ```
//! use flash_matchers::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let controller = MockController::builder()
//!     .flash("notice", "Thank you for placing this order.")
//!     .build();
//!
//! assert!(set_the_flash().matches(&controller)?);
//! assert!(
//!     set_the_flash()
//!         .to("Thank you for placing this order.")
//!         .matches(&controller)?
//! );
//! assert!(set_the_flash().to_pattern("(?i)order")?.matches(&controller)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod expected;
pub mod matcher;
pub mod prelude;
pub mod store;

/// Mock controller for testing.
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{FlashError, Result};
pub use expected::{ExpectedFlash, FlashPattern};
pub use matcher::{SetFlashMatcher, set_the_flash};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockController, MockControllerBuilder};
pub use store::{FLASH_SESSION_KEY, FlashState, FlashStore, SessionStore};
