//! Extension traits that lift the sibling containers into [`Validation`].
//!
//! # Examples
//!
//! ```
//! use konad_rail::traits::{OptionExt, ResultExt};
//! use konad_rail::Validation;
//!
//! let parsed = "42".parse::<i32>().if_errors(|e| e.to_string());
//! assert_eq!(parsed, Validation::success(42));
//!
//! let missing: Option<i32> = None;
//! assert!(missing.if_none_fail(|| "missing value").is_fail());
//! ```

use crate::convert::{if_errors, option_to_validation, result_to_validation};
use crate::types::ErrorChain;
use crate::validation::Validation;

/// Converts any `Result` into a [`Validation`], remapping the error.
pub trait ResultExt<T, X> {
    /// Applies `transform` to the error, only on the `Err` path.
    fn if_errors<E, F>(self, transform: F) -> Validation<E, T>
    where
        F: FnOnce(X) -> E;
}

impl<T, X> ResultExt<T, X> for Result<T, X> {
    #[inline]
    fn if_errors<E, F>(self, transform: F) -> Validation<E, T>
    where
        F: FnOnce(X) -> E,
    {
        if_errors(self, transform)
    }
}

/// Converts a chained-error `Result` into a [`Validation`] with the same
/// failure sequence.
///
/// # Examples
///
/// ```
/// use konad_rail::traits::ChainResultExt;
/// use konad_rail::ErrorChain;
///
/// let result: Result<i32, _> = Err(ErrorChain::new("a").then("b"));
/// let failures = result.to_validation().into_failures().unwrap();
/// assert_eq!(failures.as_slice(), &["a", "b"]);
/// ```
pub trait ChainResultExt<T, E> {
    fn to_validation(self) -> Validation<E, T>;
}

impl<T, E> ChainResultExt<T, E> for Result<T, ErrorChain<E>> {
    #[inline]
    fn to_validation(self) -> Validation<E, T> {
        result_to_validation(self)
    }
}

/// Converts an `Option` into a [`Validation`].
pub trait OptionExt<T> {
    /// `Some` becomes `Success`; `None` invokes `on_none` and wraps its result as `Fail`.
    fn if_none_fail<E, F>(self, on_none: F) -> Validation<E, T>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn if_none_fail<E, F>(self, on_none: F) -> Validation<E, T>
    where
        F: FnOnce() -> E,
    {
        option_to_validation(self, on_none)
    }
}
