//! Generic helpers written once against [`ApplicativeFunctor`] and reused by
//! every container that implements it.
use crate::traits::kind::ApplicativeFunctor;
use crate::types::alloc_type::Vec;

/// Turns a sequence of containers into a container of a sequence.
///
/// Starts from `pure_k(Vec::new())` and `ap_k`s every element in order, so the
/// container's own combination policy decides what happens to failures.
///
/// # Examples
///
/// ```
/// use konad_rail::traits::{flatten_k, OptionOf, ResultOf};
///
/// assert_eq!(flatten_k::<OptionOf, _, _>(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(flatten_k::<OptionOf, _, _>(vec![Some(1), None]), None);
///
/// let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("a"), Err("b")];
/// assert_eq!(flatten_k::<ResultOf<&str>, _, _>(results), Err("a"));
/// ```
pub fn flatten_k<K, A, I>(items: I) -> K::Of<Vec<A>>
where
    K: ApplicativeFunctor,
    I: IntoIterator<Item = K::Of<A>>,
{
    items.into_iter().fold(K::pure_k(Vec::<A>::new()), |acc, item| {
        let append = K::map_k::<Vec<A>, _, _>(acc, |mut values: Vec<A>| {
            move |value: A| {
                values.push(value);
                values
            }
        });
        K::ap_k::<A, Vec<A>, _>(item, append)
    })
}

/// Maps every input through `f` and flattens the results.
///
/// # Examples
///
/// ```
/// use konad_rail::traits::{traverse_k, OptionOf};
///
/// let halves = traverse_k::<OptionOf, _, _, _, _>([2, 4, 6], |x| (x % 2 == 0).then(|| x / 2));
/// assert_eq!(halves, Some(vec![1, 2, 3]));
/// ```
pub fn traverse_k<K, T, A, I, F>(items: I, f: F) -> K::Of<Vec<A>>
where
    K: ApplicativeFunctor,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> K::Of<A>,
{
    flatten_k::<K, A, _>(items.into_iter().map(f))
}
