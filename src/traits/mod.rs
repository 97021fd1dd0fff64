//! Capability traits shared by [`Validation`](crate::Validation) and its
//! sibling containers.
//!
//! - [`Functor`], [`ApplicativeFunctor`], [`Monad`]: operations over a
//!   type-constructor witness ([`Kind`])
//! - [`flatten_k`], [`traverse_k`]: generic helpers built on those traits
//! - [`WithError`]: remapping the error side of a container
//! - [`ResultExt`], [`ChainResultExt`], [`OptionExt`]: lifting `Result` and
//!   `Option` into `Validation`
//!
//! # Examples
//!
//! ```
//! use konad_rail::traits::{Monad, ResultOf};
//!
//! let halved = <ResultOf<&str> as Monad>::flat_map_k(Ok(10), |x| {
//!     if x % 2 == 0 { Ok(x / 2) } else { Err("odd") }
//! });
//! assert_eq!(halved, Ok(5));
//! ```

pub mod kind;
pub mod result_ext;
pub mod sequence;
pub mod with_error;

pub use kind::{ApplicativeFunctor, Functor, Kind, Monad, OptionOf, ResultOf};
pub use result_ext::{ChainResultExt, OptionExt, ResultExt};
pub use sequence::{flatten_k, traverse_k};
pub use with_error::WithError;
