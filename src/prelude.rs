//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use konad_rail::prelude::*;
//!
//! let name = Some("ada").if_none_fail(|| "name is required");
//! let age = "x".parse::<u8>().if_errors(|_| "age must be a number");
//!
//! let user = validate!(name = name, age = age => (name, age));
//! assert_eq!(user.into_failures().unwrap().as_slice(), &["age must be a number"]);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`validate!`]
//! - **Types**: [`Validation`], [`FailChain`], [`ErrorChain`]
//! - **Functions**: [`flatten`], [`traverse`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`ChainResultExt`], [`WithError`]

// Macros
pub use crate::validate;

// Core types
pub use crate::types::{ErrorChain, FailChain};
pub use crate::validation::{flatten, traverse, Validation};

// Traits
pub use crate::traits::{ChainResultExt, OptionExt, ResultExt, WithError};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ValidationTraceExt;
