//! Macros for building values out of several independent validations.
//!
//! - [`macro@crate::validate`] - Binds each validation to a name and evaluates
//!   an expression over the success values, accumulating every failure.
//!
//! # Examples
//!
//! ```
//! use konad_rail::{validate, Validation};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u8,
//! }
//!
//! let user = validate!(
//!     name = Validation::<&str, String>::success("ada".to_string()),
//!     age = Validation::<&str, u8>::success(36),
//!     => User { name, age }
//! );
//! assert_eq!(user.into_value(), Some(User { name: "ada".to_string(), age: 36 }));
//! ```

/// Combines named validations with [`Validation::zip`](crate::Validation::zip)
/// and maps the result through an expression.
///
/// Every failure of every input is kept, in argument order. Each binding is
/// only in scope inside the final expression.
///
/// # Syntax
///
/// `validate!(a = expr_a, b = expr_b, ... => body)`; the comma before `=>` is optional.
///
/// # Examples
///
/// ```
/// use konad_rail::{validate, Validation};
///
/// let sum = validate!(
///     a = Validation::<&str, i32>::fail("a is missing"),
///     b = Validation::<&str, i32>::success(2),
///     c = Validation::<&str, i32>::fail("c is negative"),
///     => a + b + c
/// );
///
/// let failures = sum.into_failures().unwrap();
/// assert_eq!(failures.as_slice(), &["a is missing", "c is negative"]);
/// ```
#[macro_export]
macro_rules! validate {
    ($name:ident = $value:expr => $body:expr $(,)?) => {
        $crate::Validation::map($value, |$name| $body)
    };
    ($name:ident = $value:expr, $($rest:tt)*) => {
        $crate::__validate_zip!(($value) ($name) $($rest)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __validate_zip {
    (($acc:expr) ($pat:pat) => $body:expr $(,)?) => {
        $crate::Validation::map($acc, |$pat| $body)
    };
    (($acc:expr) ($pat:pat) $name:ident = $value:expr, $($rest:tt)*) => {
        $crate::__validate_zip!(
            ($crate::Validation::zip($acc, $value)) (($pat, $name)) $($rest)*
        )
    };
    (($acc:expr) ($pat:pat) $name:ident = $value:expr => $body:expr $(,)?) => {
        $crate::Validation::map($crate::Validation::zip($acc, $value), |($pat, $name)| $body)
    };
}
