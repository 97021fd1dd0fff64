use crate::types::{ErrorVec, FailChain};
use core::fmt::Debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computation result that either succeeded or accumulated one or more failures.
///
/// `Validation<E, A>` supports two propagation policies side by side:
///
/// * monadic ([`map`](Self::map), [`flat_map`](Self::flat_map)) stops at the
///   first failure and never runs later steps;
/// * applicative ([`ap`](Self::ap), [`zip`](Self::zip),
///   [`flatten`](crate::validation::flatten)) evaluates independent branches
///   and merges their failures.
///
/// Failures are kept in a [`FailChain`], oldest first.
///
/// # Type Parameters
///
/// * `E` - The failure type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use konad_rail::Validation;
///
/// let ok = Validation::<&str, i32>::success(42);
/// assert!(ok.is_success());
///
/// let failed = Validation::<&str, i32>::fail("boom");
/// assert!(failed.is_fail());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Validation<E, A> {
    Success(A),
    Fail(FailChain<E>),
}

impl<E, A> Validation<E, A> {
    /// Wraps a successful value.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, i32>::success(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Wraps a single failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, ()>::fail("missing field");
    /// assert!(v.is_fail());
    /// ```
    #[inline]
    pub fn fail(failure: E) -> Self {
        Self::Fail(FailChain::new(failure))
    }

    /// Applicative unit. Same as [`success`](Self::success).
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::Success(value)
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }

    /// Transforms the success value, leaving failures untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, i32>::success(21).map(|x| x * 2);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<C, F>(self, f: F) -> Validation<E, C>
    where
        F: FnOnce(A) -> C,
    {
        self.flat_map(|value| Validation::success(f(value)))
    }

    /// Sequences a dependent computation.
    ///
    /// On `Fail` this short-circuits: the chain is returned as is and `f` is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Validation::success(input)
    ///     } else {
    ///         Validation::fail("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::success(4).flat_map(parse_even).into_value(), Some(4));
    /// assert!(Validation::success(3).flat_map(parse_even).is_fail());
    /// ```
    #[inline]
    pub fn flat_map<C, F>(self, f: F) -> Validation<E, C>
    where
        F: FnOnce(A) -> Validation<E, C>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Fail(chain) => Validation::Fail(chain),
        }
    }

    /// Applies a contained function to the contained value, accumulating failures.
    ///
    /// When both sides failed, the result keeps `self`'s newest failure on top,
    /// re-attaches `self`'s immediate parent failure (if any) directly onto
    /// `lifted`'s chain, and discards anything older on the `self` side.
    /// Use [`zip`](Self::zip) when every failure of both sides must survive.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let value = Validation::<&str, i32>::fail("second");
    /// let lifted = Validation::<&str, fn(i32) -> i32>::fail("first");
    ///
    /// let failures = value.ap(lifted).into_failures().unwrap();
    /// assert_eq!(failures.as_slice(), &["first", "second"]);
    /// ```
    pub fn ap<C, F>(self, lifted: Validation<E, F>) -> Validation<E, C>
    where
        F: FnOnce(A) -> C,
    {
        match (self, lifted) {
            (this, Validation::Success(f)) => this.map(f),
            (Self::Success(_), Validation::Fail(other)) => Validation::Fail(other),
            (Self::Fail(this), Validation::Fail(other)) => {
                let (failure, previous) = this.into_parts();
                let base = match previous {
                    Some(parent) => other.push(parent.failure),
                    None => other,
                };
                Validation::Fail(base.push(failure))
            }
        }
    }

    /// Pairs two validations, keeping every failure from both sides.
    ///
    /// The failures of `self` come first, followed by those of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let both = Validation::<&str, i32>::success(1).zip(Validation::success("one"));
    /// assert_eq!(both.into_value(), Some((1, "one")));
    ///
    /// let failed = Validation::<&str, i32>::fail("a").zip(Validation::<&str, i32>::fail("b"));
    /// assert_eq!(failed.into_failures().unwrap().as_slice(), &["a", "b"]);
    /// ```
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Self::Fail(chain), Validation::Success(_)) => Validation::Fail(chain),
            (Self::Success(_), Validation::Fail(chain)) => Validation::Fail(chain),
            (Self::Fail(first), Validation::Fail(second)) => Validation::Fail(first.concat(second)),
        }
    }

    /// Transforms every failure in the chain, preserving its shape and order.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, i32>::fail("a").zip(Validation::<&str, i32>::fail("b"));
    /// let mapped = v.map_fail(str::len);
    /// assert_eq!(mapped.into_failures().unwrap().as_slice(), &[1, 1]);
    /// ```
    pub fn map_fail<D, F>(self, f: F) -> Validation<D, A>
    where
        F: FnMut(E) -> D,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Fail(chain) => Validation::Fail(chain.map(f)),
        }
    }

    /// Collapses the whole chain into a single failure computed from the
    /// ordered (oldest to newest) failure sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, i32>::fail("a").zip(Validation::<&str, i32>::fail("b"));
    /// let collapsed = v.map_all_failures(|failures| failures.join(", "));
    /// assert_eq!(collapsed, Validation::fail("a, b".to_string()));
    /// ```
    pub fn map_all_failures<D, F>(self, f: F) -> Validation<D, A>
    where
        F: FnOnce(ErrorVec<E>) -> D,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Fail(chain) => Validation::fail(f(chain.into_failures())),
        }
    }

    /// Returns the success value or `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// assert_eq!(Validation::<&str, i32>::success(5).if_fail(0), 5);
    /// assert_eq!(Validation::<&str, i32>::fail("boom").if_fail(0), 0);
    /// ```
    #[inline]
    pub fn if_fail(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => default,
        }
    }

    /// Returns the success value, or computes one from the ordered failures.
    ///
    /// `handler` only runs on `Fail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// let v = Validation::<&str, usize>::fail("boom");
    /// assert_eq!(v.if_fail_with(|failures| failures.len()), 1);
    /// ```
    #[inline]
    pub fn if_fail_with<F>(self, handler: F) -> A
    where
        F: FnOnce(ErrorVec<E>) -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(chain) => handler(chain.into_failures()),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Fail`, with a message carrying the newest failure. This is a
    /// last-resort escape; prefer [`if_fail`](Self::if_fail) or
    /// [`into_result`](Self::into_result).
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::Validation;
    ///
    /// assert_eq!(Validation::<&str, i32>::success(5).get(), 5);
    /// ```
    ///
    /// ```should_panic
    /// use konad_rail::Validation;
    ///
    /// Validation::<&str, i32>::fail("boom").get();
    /// ```
    #[track_caller]
    pub fn get(self) -> A
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(chain) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    failure = ?chain.failure(),
                    failure_count = chain.len(),
                    "extracting value from a failed validation"
                );
                panic!(
                    "called `Validation::get()` on a `Fail` value: {:?}",
                    chain.failure()
                )
            }
        }
    }

    /// Converts into a `Result`, keeping the full failure chain on the error side.
    #[inline]
    pub fn into_result(self) -> Result<A, FailChain<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(chain) => Err(chain),
        }
    }

    /// Extracts the value, if successful.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Extracts the failures oldest to newest, if failed.
    #[must_use]
    pub fn into_failures(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Success(_) => None,
            Self::Fail(chain) => Some(chain.into_failures()),
        }
    }

    /// Borrows the failure chain, if failed.
    #[must_use]
    #[inline]
    pub fn fail_chain(&self) -> Option<&FailChain<E>> {
        match self {
            Self::Success(_) => None,
            Self::Fail(chain) => Some(chain),
        }
    }
}

impl<E, A> From<FailChain<E>> for Validation<E, A> {
    #[inline]
    fn from(chain: FailChain<E>) -> Self {
        Self::Fail(chain)
    }
}
