//! Failure containers shared by [`Validation`](crate::Validation) and its
//! sibling result shape.
//!
//! # Examples
//!
//! ```
//! use konad_rail::types::{ErrorChain, FailChain};
//!
//! let fail = FailChain::new("missing name").push("invalid age");
//! assert_eq!(fail.to_string(), "missing name -> invalid age");
//!
//! let errors = ErrorChain::new("timeout");
//! assert!(errors.prev().is_none());
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_chain;
pub mod fail_chain;
pub(crate) mod link;

pub use error_chain::*;
pub use fail_chain::*;

/// SmallVec-backed collection used when a failure chain is materialized.
///
/// Uses inline storage for a single element, the common case of a chain that
/// only ever saw one failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
