//! The [`Validation`] type and its combinators.
//!
//! A `Validation<E, A>` is either `Success(A)` or `Fail(FailChain<E>)`.
//! Monadic steps (`map`, `flat_map`) short-circuit on the first failure;
//! applicative steps (`ap`, `zip`, [`flatten`]) keep evaluating and merge the
//! failures of independent branches.
//!
//! # Examples
//!
//! ```
//! use konad_rail::validation::{flatten, Validation};
//!
//! let all = flatten(vec![
//!     Validation::<&str, i32>::fail("a"),
//!     Validation::success(1),
//!     Validation::fail("b"),
//! ]);
//! assert_eq!(all.into_failures().unwrap().as_slice(), &["a", "b"]);
//!
//! let ok = flatten(vec![Validation::<&str, i32>::success(1), Validation::success(2)]);
//! assert_eq!(ok, Validation::success(vec![1, 2]));
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
pub use self::traits::ValidationOf;

use crate::traits::{flatten_k, traverse_k};
use crate::types::alloc_type::Vec;

/// Combines every validation in order with [`Validation::ap`], starting from
/// `Validation::pure(Vec::new())`.
///
/// All failures across the input are accumulated. Because each step goes
/// through `ap`, once an earlier failure has been collected, an element that
/// itself carries more than two failures only contributes its two newest ones.
pub fn flatten<E, A, I>(items: I) -> Validation<E, Vec<A>>
where
    I: IntoIterator<Item = Validation<E, A>>,
{
    flatten_k::<ValidationOf<E>, A, I>(items)
}

/// Validates every input with `f`, accumulating failures like [`flatten`].
///
/// # Examples
///
/// ```
/// use konad_rail::validation::{traverse, Validation};
///
/// fn positive(x: i32) -> Validation<String, i32> {
///     if x > 0 {
///         Validation::success(x)
///     } else {
///         Validation::fail(format!("{x} is not positive"))
///     }
/// }
///
/// assert_eq!(traverse([1, 2], positive), Validation::success(vec![1, 2]));
/// assert_eq!(traverse([1, -2, -3], positive).iter_failures().count(), 2);
/// ```
pub fn traverse<E, T, A, I, F>(items: I, f: F) -> Validation<E, Vec<A>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Validation<E, A>,
{
    traverse_k::<ValidationOf<E>, T, A, I, F>(items, f)
}
