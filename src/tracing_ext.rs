//! Tracing integration for konad-rail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! konad-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use crate::validation::Validation;

/// Extension trait that reports failed validations as tracing events.
///
/// # Example
///
/// ```rust,ignore
/// use konad_rail::tracing_ext::ValidationTraceExt;
/// use konad_rail::Validation;
///
/// let form = Validation::<&str, u8>::fail("age is negative")
///     .trace_failures("signup_form");
/// ```
pub trait ValidationTraceExt: Sized {
    /// Emits a `warn` event carrying the ordered failures if this is a `Fail`,
    /// then returns `self` unchanged.
    fn trace_failures(self, operation: &'static str) -> Self;

    /// Emits a `debug` event when this is a `Success`, then returns `self`.
    fn trace_success(self, operation: &'static str) -> Self;
}

impl<E: Debug, A> ValidationTraceExt for Validation<E, A> {
    fn trace_failures(self, operation: &'static str) -> Self {
        if let Validation::Fail(chain) = &self {
            tracing::warn!(
                operation,
                failure_count = chain.len(),
                failures = ?chain.failures(),
                "validation failed"
            );
        }
        self
    }

    fn trace_success(self, operation: &'static str) -> Self {
        if self.is_success() {
            tracing::debug!(operation, "validation succeeded");
        }
        self
    }
}
