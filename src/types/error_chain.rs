use crate::types::alloc_type::Box;
use crate::types::link::{Link, Node};
use crate::types::ErrorVec;
use core::fmt::{Debug, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use crate::types::alloc_type::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chained error used as the error side of a plain `Result`.
///
/// `Result<T, ErrorChain<E>>` is the "simple result" counterpart of
/// [`Validation`](crate::Validation): it fails fast, but a failure may still
/// link back to an earlier one. See [`crate::convert`] for the conversions
/// between the two shapes.
///
/// Like [`FailChain`](crate::FailChain), every whole-chain operation walks the
/// chain iteratively, and with the `serde` feature the chain is encoded as its
/// errors, oldest first.
///
/// # Examples
///
/// ```
/// use konad_rail::ErrorChain;
///
/// let errors = ErrorChain::new("connect").then("retry");
/// assert_eq!(errors.error(), &"retry");
/// assert_eq!(errors.to_string(), "connect -> retry");
/// ```
pub struct ErrorChain<E> {
    pub(crate) error: E,
    pub(crate) prev: Link<ErrorChain<E>>,
}

impl<E> ErrorChain<E> {
    #[must_use]
    #[inline]
    pub fn new(error: E) -> Self {
        Self {
            error,
            prev: Link::empty(),
        }
    }

    /// Records `error` as having happened after every error already in the chain.
    #[must_use]
    #[inline]
    pub fn then(self, error: E) -> Self {
        Self {
            error,
            prev: Link::to(self),
        }
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[must_use]
    #[inline]
    pub fn prev(&self) -> Option<&ErrorChain<E>> {
        self.prev.get()
    }

    /// Errors oldest to newest.
    #[must_use]
    pub fn errors(&self) -> ErrorVec<&E> {
        let mut errors = ErrorVec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            errors.push(&current.error);
            node = current.prev();
        }
        errors.reverse();
        errors
    }

    /// Consumes the chain and returns its errors oldest to newest.
    #[must_use]
    pub fn into_errors(self) -> ErrorVec<E> {
        let (oldest, newer) = self.into_oldest_and_newer();
        let mut errors = ErrorVec::with_capacity(newer.len() + 1);
        errors.push(oldest);
        errors.extend(newer);
        errors
    }

    /// Splits the chain into its oldest error and the remaining errors in
    /// chronological order.
    pub(crate) fn into_oldest_and_newer(self) -> (E, ErrorVec<E>) {
        let mut newer = ErrorVec::new();
        let mut node = self;
        while let Some(prev) = node.prev.take() {
            newer.push(node.error);
            node = prev;
        }
        newer.reverse();
        (node.error, newer)
    }

    fn oldest(&self) -> &E {
        let mut node = self;
        while let Some(prev) = node.prev() {
            node = prev;
        }
        &node.error
    }
}

impl<E> Node for ErrorChain<E> {
    #[inline]
    fn detach(&mut self) -> Option<Box<Self>> {
        self.prev.0.take()
    }
}

impl<E: Clone> Clone for ErrorChain<E> {
    fn clone(&self) -> Self {
        self.errors()
            .into_iter()
            .skip(1)
            .fold(ErrorChain::new(self.oldest().clone()), |chain, error| {
                chain.then(error.clone())
            })
    }
}

impl<E: PartialEq> PartialEq for ErrorChain<E> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = Some(self);
        let mut right = Some(other);
        loop {
            match (left, right) {
                (Some(l), Some(r)) if l.error == r.error => {
                    left = l.prev();
                    right = r.prev();
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<E: Eq> Eq for ErrorChain<E> {}

impl<E: Hash> Hash for ErrorChain<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let errors = self.errors();
        state.write_usize(errors.len());
        for error in errors {
            error.hash(state);
        }
    }
}

impl<E: Debug> Debug for ErrorChain<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorChain")
            .field("errors", &self.errors())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for ErrorChain<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.errors())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Deserialize<'de>> Deserialize<'de> for ErrorChain<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut errors = Vec::<E>::deserialize(deserializer)?.into_iter();
        let oldest = errors
            .next()
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one error"))?;
        Ok(errors.fold(ErrorChain::new(oldest), ErrorChain::then))
    }
}

impl<E: Display> Display for ErrorChain<E> {
    /// Renders errors oldest to newest, joined with ` -> `.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, error) in self.errors().into_iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl<E: Debug + Display> core::error::Error for ErrorChain<E> {}

impl<E> From<E> for ErrorChain<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
