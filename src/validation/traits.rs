use crate::traits::{ApplicativeFunctor, Functor, Kind, Monad, WithError};
use crate::validation::core::Validation;
use core::marker::PhantomData;

/// Witness for `Validation<E, _>`.
///
/// Every capability delegates to the inherent combinator of the same name, so
/// `ap_k` accumulates failures exactly like [`Validation::ap`].
///
/// # Examples
///
/// ```
/// use konad_rail::traits::{flatten_k, Functor};
/// use konad_rail::validation::{Validation, ValidationOf};
///
/// let doubled = ValidationOf::<&str>::map_k(Validation::success(21), |x| x * 2);
/// assert_eq!(doubled, Validation::success(42));
///
/// let items = vec![Validation::fail("a"), Validation::success(1), Validation::fail("b")];
/// let flat = flatten_k::<ValidationOf<&str>, i32, _>(items);
/// assert_eq!(flat.into_failures().unwrap().as_slice(), &["a", "b"]);
/// ```
pub struct ValidationOf<E>(PhantomData<fn() -> E>);

impl<E> Kind for ValidationOf<E> {
    type Of<A> = Validation<E, A>;
}

impl<E> Functor for ValidationOf<E> {
    #[inline]
    fn map_k<A, C, F>(fa: Validation<E, A>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A) -> C,
    {
        fa.map(f)
    }
}

impl<E> ApplicativeFunctor for ValidationOf<E> {
    #[inline]
    fn pure_k<A>(value: A) -> Validation<E, A> {
        Validation::pure(value)
    }

    #[inline]
    fn ap_k<A, C, F>(fa: Validation<E, A>, lifted: Validation<E, F>) -> Validation<E, C>
    where
        F: FnOnce(A) -> C,
    {
        fa.ap(lifted)
    }
}

impl<E> Monad for ValidationOf<E> {
    #[inline]
    fn flat_map_k<A, C, F>(fa: Validation<E, A>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A) -> Validation<E, C>,
    {
        fa.flat_map(f)
    }
}

/// Remaps every accumulated failure; `to_result` keeps the newest one.
///
/// # Examples
///
/// ```
/// use konad_rail::traits::WithError;
/// use konad_rail::Validation;
///
/// let v = Validation::<&str, i32>::fail("e1").zip(Validation::<&str, i32>::fail("e2"));
/// let mapped = v.fmap_error(|e| format!("E:{e}"));
/// assert_eq!(mapped.iter_failures().count(), 2);
/// assert_eq!(mapped.to_result(), Err("E:e2".to_string()));
/// ```
impl<T, E> WithError<E> for Validation<E, T> {
    type Success = T;
    type ErrorOutput<G> = Validation<G, T>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_fail(f)
    }

    fn to_result(self) -> Result<T, E> {
        self.into_result().map_err(|chain| chain.into_parts().0)
    }
}
