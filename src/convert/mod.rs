//! Conversions between [`Validation`] and its sibling containers.
//!
//! * the simple result, `Result<T, ErrorChain<E>>`, which fails fast but may
//!   still link a failure to earlier ones;
//! * any plain `Result<T, X>`, through a caller-supplied error transform;
//! * `Option<T>`, through a failure thunk.
//!
//! # Examples
//!
//! ```
//! use konad_rail::convert::*;
//! use konad_rail::{ErrorChain, Validation};
//!
//! let result: Result<i32, _> = Err(ErrorChain::new("a").then("b"));
//! let validation = result_to_validation(result);
//! assert_eq!(validation.iter_failures().count(), 2);
//!
//! let back = validation_to_result(validation);
//! assert_eq!(back, Err(ErrorChain::new("a").then("b")));
//! ```

use crate::types::{ErrorChain, FailChain};
use crate::validation::core::Validation;

/// Converts a chained-error `Result` into a `Validation`.
///
/// The failure chain is rebuilt one node per source error, in the same order.
///
/// # Examples
///
/// ```
/// use konad_rail::convert::result_to_validation;
/// use konad_rail::{ErrorChain, Validation};
///
/// let ok: Result<i32, ErrorChain<&str>> = Ok(3);
/// assert_eq!(result_to_validation(ok), Validation::success(3));
///
/// let err: Result<i32, _> = Err(ErrorChain::new("fail"));
/// assert_eq!(result_to_validation(err), Validation::fail("fail"));
/// ```
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, ErrorChain<E>>) -> Validation<E, T> {
    match result {
        Ok(value) => Validation::Success(value),
        Err(errors) => Validation::Fail(chain_to_fail(errors)),
    }
}

/// Converts a `Validation` back into a chained-error `Result`, preserving the
/// ordered failure sequence.
///
/// # Examples
///
/// ```
/// use konad_rail::convert::validation_to_result;
/// use konad_rail::{ErrorChain, Validation};
///
/// assert_eq!(validation_to_result(Validation::<&str, i32>::success(7)), Ok(7));
/// assert_eq!(
///     validation_to_result(Validation::<&str, i32>::fail("boom")),
///     Err(ErrorChain::new("boom"))
/// );
/// ```
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<E, T>) -> Result<T, ErrorChain<E>> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Fail(chain) => Err(fail_to_chain(chain)),
    }
}

/// Converts any `Result` into a `Validation`, calling `transform` only on `Err`.
///
/// # Examples
///
/// ```
/// use konad_rail::convert::if_errors;
/// use konad_rail::Validation;
///
/// let v: Validation<String, i32> = if_errors(Err::<i32, u16>(404), |code| format!("HTTP {code}"));
/// assert_eq!(v, Validation::fail("HTTP 404".to_string()));
/// ```
#[inline]
pub fn if_errors<T, X, E, F>(result: Result<T, X>, transform: F) -> Validation<E, T>
where
    F: FnOnce(X) -> E,
{
    match result {
        Ok(value) => Validation::Success(value),
        Err(error) => Validation::fail(transform(error)),
    }
}

/// Converts an `Option` into a `Validation`; `on_none` runs only when empty.
///
/// # Examples
///
/// ```
/// use konad_rail::convert::option_to_validation;
/// use konad_rail::Validation;
///
/// assert_eq!(option_to_validation(Some(1), || "missing"), Validation::success(1));
/// assert_eq!(option_to_validation(None::<i32>, || "missing"), Validation::fail("missing"));
/// ```
#[inline]
pub fn option_to_validation<T, E, F>(option: Option<T>, on_none: F) -> Validation<E, T>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Validation::Success(value),
        None => Validation::fail(on_none()),
    }
}

fn chain_to_fail<E>(errors: ErrorChain<E>) -> FailChain<E> {
    let (oldest, newer) = errors.into_oldest_and_newer();
    newer.into_iter().fold(FailChain::new(oldest), FailChain::push)
}

fn fail_to_chain<E>(chain: FailChain<E>) -> ErrorChain<E> {
    let (oldest, newer) = chain.into_oldest_and_newer();
    newer.into_iter().fold(ErrorChain::new(oldest), ErrorChain::then)
}
