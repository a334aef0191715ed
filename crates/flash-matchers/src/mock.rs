//! Mock controller for testing matchers without a real web framework.
//!
//! The double holds a live flash store and raw session storage. The builder
//! can also record a prior-cycle snapshot, which it serializes into the
//! session under the well-known key the same way a framework would, and can
//! produce contract-violating controllers for error-path tests.

use serde_json::Value;

use crate::error::{FlashError, Result};
use crate::store::{FLASH_SESSION_KEY, FlashState, FlashStore, SessionStore};

/// A controller double implementing [`FlashState`].
#[derive(Debug, Clone, Default)]
pub struct MockController {
    flash: Option<FlashStore>,
    session: Option<SessionStore>,
}

impl MockController {
    /// Create a builder for a mock controller.
    #[must_use]
    pub fn builder() -> MockControllerBuilder {
        MockControllerBuilder::default()
    }
}

impl FlashState for MockController {
    fn flash(&self) -> Result<FlashStore> {
        self.flash.clone().ok_or_else(|| {
            FlashError::flash_unsupported("mock controller built without a flash store")
        })
    }

    fn session(&self) -> Result<&SessionStore> {
        self.session.as_ref().ok_or_else(|| {
            FlashError::session_unsupported("mock controller built without a session")
        })
    }
}

/// Builder for [`MockController`].
#[derive(Debug, Default)]
pub struct MockControllerBuilder {
    flash: FlashStore,
    snapshot: FlashStore,
    session: SessionStore,
    without_flash: bool,
    without_session: bool,
}

impl MockControllerBuilder {
    /// Queue a live flash message.
    #[must_use]
    pub fn flash(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.flash.insert(key, message);
        self
    }

    /// Record a message in the prior-cycle snapshot persisted in the session.
    #[must_use]
    pub fn flash_snapshot(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.snapshot.insert(key, message);
        self
    }

    /// Insert a raw session value.
    #[must_use]
    pub fn session_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session.insert(key, value);
        self
    }

    /// Build a controller with no flash support at all.
    #[must_use]
    pub const fn without_flash(mut self) -> Self {
        self.without_flash = true;
        self
    }

    /// Build a controller with no session support at all.
    #[must_use]
    pub const fn without_session(mut self) -> Self {
        self.without_session = true;
        self
    }

    /// Build the controller.
    #[must_use]
    pub fn build(self) -> MockController {
        let mut session = self.session;
        if !self.snapshot.is_empty() {
            let object: serde_json::Map<String, Value> = self
                .snapshot
                .iter()
                .map(|(key, message)| (key.to_string(), Value::String(message.to_string())))
                .collect();
            session.insert(FLASH_SESSION_KEY, Value::Object(object));
        }

        MockController {
            flash: (!self.without_flash).then_some(self.flash),
            session: (!self.without_session).then_some(session),
        }
    }
}
