//! Composable, failure-accumulating computations.
//!
//! The centre of the crate is [`Validation`], which holds either a successful
//! value or a chain of accumulated failures. Its combinators support two
//! policies: monadic chaining stops at the first failure, applicative
//! combination keeps evaluating and merges failures. The [`traits`] module
//! exposes the same operations as capabilities (`Functor`,
//! `ApplicativeFunctor`, `Monad`) shared with `Result` and `Option`.
//!
//! # Examples
//!
//! ## Short-circuiting
//!
//! ```
//! use konad_rail::Validation;
//!
//! let mut calls = 0;
//! let v = Validation::<&str, i32>::fail("no input").flat_map(|x| {
//!     calls += 1;
//!     Validation::success(x + 1)
//! });
//!
//! assert!(v.is_fail());
//! assert_eq!(calls, 0);
//! ```
//!
//! ## Accumulation
//!
//! ```
//! use konad_rail::Validation;
//!
//! let combined: Validation<&str, Vec<i32>> = vec![
//!     Validation::fail("first"),
//!     Validation::success(1),
//!     Validation::fail("second"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let message = combined.if_fail_with(|failures| {
//!     assert_eq!(failures.as_slice(), &["first", "second"]);
//!     Vec::new()
//! });
//! assert!(message.is_empty());
//! ```
//!
//! ## Conversions
//!
//! ```
//! use konad_rail::prelude::*;
//!
//! let port = "8080".parse::<u16>().if_errors(|e| e.to_string());
//! assert_eq!(port.get(), 8080);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Validation, Result and Option
pub mod convert;
/// Macros for combining several validations
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits and generic helpers
pub mod traits;
/// Failure chain structures
pub mod types;
/// Validation type and its combinators
pub mod validation;

/// Tracing events for failed validations (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{ErrorChain, ErrorVec, FailChain};
pub use validation::*;
