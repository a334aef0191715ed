//! The `set_the_flash` matcher.
//!
//! This module provides the matcher object itself: a consuming builder for
//! the expectation, a single evaluation entry point, and the description
//! strings the enclosing test framework displays on assertion failure.

use tracing::{debug, trace};

use crate::error::Result;
use crate::expected::ExpectedFlash;
use crate::store::{FlashState, FlashStore};

/// Start a flash assertion.
///
/// # Example
///
/// ```
/// use flash_matchers::{set_the_flash, MockController};
///
/// # fn main() -> flash_matchers::Result<()> {
/// let controller = MockController::builder()
///     .flash("notice", "Thank you for placing this order.")
///     .build();
///
/// let mut matcher = set_the_flash().to("Thank you for placing this order.");
/// assert!(matcher.matches(&controller)?);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn set_the_flash() -> SetFlashMatcher {
    SetFlashMatcher::new()
}

/// Matcher asserting that a controller queued a flash message.
///
/// A matcher is built fresh per expectation, configured with the consuming
/// builder calls [`to`](Self::to), [`to_pattern`](Self::to_pattern) and
/// [`now`](Self::now), evaluated once with [`matches`](Self::matches), then
/// queried for its description strings.
#[derive(Debug, Default)]
pub struct SetFlashMatcher {
    expected: ExpectedFlash,
    now: bool,
    observed: Option<FlashStore>,
}

impl SetFlashMatcher {
    /// Create a matcher with no specific expected value.
    ///
    /// Without a value, any non-empty flash matches; with negation, the
    /// flash is asserted to be empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect some flash message to equal the given literal, or to match
    /// the given pre-compiled regex.
    #[must_use]
    pub fn to(mut self, value: impl Into<ExpectedFlash>) -> Self {
        self.expected = value.into();
        self
    }

    /// Expect some flash message to match the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn to_pattern(mut self, pattern: &str) -> Result<Self> {
        self.expected = ExpectedFlash::pattern(pattern)?;
        Ok(self)
    }

    /// Restrict the assertion to messages set for the current render only.
    #[must_use]
    pub const fn now(mut self) -> Self {
        self.now = true;
        self
    }

    /// Evaluate the matcher against a controller.
    ///
    /// `Ok(false)` is a plain non-match; an `Err` means the object does not
    /// satisfy the controller contract at all. The observed flash is
    /// resolved on the first call and cached, so repeated calls are
    /// idempotent and the controller is never mutated.
    pub fn matches<C>(&mut self, controller: &C) -> Result<bool>
    where
        C: FlashState + ?Sized,
    {
        let observed = match self.observed.take() {
            Some(observed) => observed,
            None => self.resolve(controller)?,
        };

        let matched = !observed.is_empty()
            && observed
                .messages()
                .any(|message| self.expected.matches(message));

        debug!(matched, observed = %observed, now = self.now, "evaluated flash expectation");
        self.observed = Some(observed);
        Ok(matched)
    }

    /// Short description of the expectation, e.g. `set the flash to "Welcome"`.
    #[must_use]
    pub fn description(&self) -> String {
        let mut description = String::from("set the flash");
        if let Some(repr) = self.expected.repr() {
            description.push_str(" to ");
            description.push_str(&repr);
        }
        description
    }

    /// Message for a failed positive assertion.
    #[must_use]
    pub fn failure_message(&self) -> String {
        format!("Expected {}", self.expectation())
    }

    /// Message for a failed negative assertion.
    #[must_use]
    pub fn negative_failure_message(&self) -> String {
        format!("Did not expect {}", self.expectation())
    }

    fn resolve<C>(&self, controller: &C) -> Result<FlashStore>
    where
        C: FlashState + ?Sized,
    {
        let live = controller.flash()?;
        let prior = controller.session()?.flash_snapshot()?;
        trace!(%live, %prior, now = self.now, "resolving observed flash");

        if self.now {
            Ok(FlashStore::now_difference(&prior, &live))
        } else {
            Ok(live)
        }
    }

    fn expectation(&self) -> String {
        let now = if self.now { ".now" } else { "" };
        let mut expectation = format!("the flash{now} to be set");
        if let Some(repr) = self.expected.repr() {
            expectation.push_str(" to ");
            expectation.push_str(&repr);
        }
        expectation.push_str(", but ");
        expectation.push_str(&self.flash_description());
        expectation
    }

    fn flash_description(&self) -> String {
        match &self.observed {
            Some(observed) if !observed.is_empty() => format!("was {observed}"),
            _ => String::from("no flash was set"),
        }
    }
}
