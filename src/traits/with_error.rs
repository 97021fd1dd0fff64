/// Abstraction over containers whose error side can be remapped.
///
/// This is the error-side counterpart of [`Functor`](crate::traits::Functor):
/// `fmap_error` changes the failure type while leaving the success value alone.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Examples
///
/// ```
/// use konad_rail::traits::WithError;
///
/// let result: Result<i32, &str> = Err("original error");
/// let mapped = result.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Err("Error: original error".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps every error value using `f`, producing a container with error type `G`.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G;

    /// Converts the container into a fail-fast `Result` carrying a single error.
    ///
    /// For `Result` this is a no-op. Accumulating containers keep only their
    /// newest error.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}
