//! Capability layer: functor, applicative and monad operations over a
//! type-constructor witness.
//!
//! Rust has no native higher-kinded types, so each container shape is named by
//! a zero-sized witness implementing [`Kind`]. `Kind::Of<A>` is the container
//! holding an `A`. A container gains a capability by implementing the trait for
//! its witness; there is no shared base implementation and no default methods.
//!
//! # Examples
//!
//! ```
//! use konad_rail::traits::{ApplicativeFunctor, Functor, OptionOf, ResultOf};
//!
//! fn double<K: Functor>(value: K::Of<i32>) -> K::Of<i32> {
//!     K::map_k(value, |x| x * 2)
//! }
//!
//! assert_eq!(double::<OptionOf>(Some(21)), Some(42));
//! assert_eq!(double::<ResultOf<&str>>(Err("boom")), Err("boom"));
//! assert_eq!(<OptionOf as ApplicativeFunctor>::pure_k(1), Some(1));
//! ```
use core::marker::PhantomData;

/// Type-constructor witness.
pub trait Kind {
    type Of<A>;
}

pub trait Functor: Kind {
    fn map_k<A, C, F>(fa: Self::Of<A>, f: F) -> Self::Of<C>
    where
        F: FnOnce(A) -> C;
}

pub trait ApplicativeFunctor: Functor {
    fn pure_k<A>(value: A) -> Self::Of<A>;

    /// Applies a contained function to a contained value under the
    /// container's own combination policy.
    fn ap_k<A, C, F>(fa: Self::Of<A>, lifted: Self::Of<F>) -> Self::Of<C>
    where
        F: FnOnce(A) -> C;
}

pub trait Monad: ApplicativeFunctor {
    fn flat_map_k<A, C, F>(fa: Self::Of<A>, f: F) -> Self::Of<C>
    where
        F: FnOnce(A) -> Self::Of<C>;
}

/// Witness for `Result<_, E>`.
///
/// Fails fast: `ap_k` returns the lifted side's error first, then the value
/// side's.
pub struct ResultOf<E>(PhantomData<fn() -> E>);

impl<E> Kind for ResultOf<E> {
    type Of<A> = Result<A, E>;
}

impl<E> Functor for ResultOf<E> {
    #[inline]
    fn map_k<A, C, F>(fa: Result<A, E>, f: F) -> Result<C, E>
    where
        F: FnOnce(A) -> C,
    {
        fa.map(f)
    }
}

impl<E> ApplicativeFunctor for ResultOf<E> {
    #[inline]
    fn pure_k<A>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn ap_k<A, C, F>(fa: Result<A, E>, lifted: Result<F, E>) -> Result<C, E>
    where
        F: FnOnce(A) -> C,
    {
        match (fa, lifted) {
            (_, Err(error)) => Err(error),
            (Err(error), Ok(_)) => Err(error),
            (Ok(value), Ok(f)) => Ok(f(value)),
        }
    }
}

impl<E> Monad for ResultOf<E> {
    #[inline]
    fn flat_map_k<A, C, F>(fa: Result<A, E>, f: F) -> Result<C, E>
    where
        F: FnOnce(A) -> Result<C, E>,
    {
        fa.and_then(f)
    }
}

/// Witness for `Option<_>`.
pub struct OptionOf;

impl Kind for OptionOf {
    type Of<A> = Option<A>;
}

impl Functor for OptionOf {
    #[inline]
    fn map_k<A, C, F>(fa: Option<A>, f: F) -> Option<C>
    where
        F: FnOnce(A) -> C,
    {
        fa.map(f)
    }
}

impl ApplicativeFunctor for OptionOf {
    #[inline]
    fn pure_k<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn ap_k<A, C, F>(fa: Option<A>, lifted: Option<F>) -> Option<C>
    where
        F: FnOnce(A) -> C,
    {
        fa.zip(lifted).map(|(value, f)| f(value))
    }
}

impl Monad for OptionOf {
    #[inline]
    fn flat_map_k<A, C, F>(fa: Option<A>, f: F) -> Option<C>
    where
        F: FnOnce(A) -> Option<C>,
    {
        fa.and_then(f)
    }
}
