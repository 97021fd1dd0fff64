use crate::types::alloc_type::Box;
use crate::types::link::{Link, Node};
use crate::types::ErrorVec;
use core::fmt::{Debug, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use crate::types::alloc_type::Vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Linked chain of accumulated failures carried by [`Validation::Fail`](crate::Validation::Fail).
///
/// Each node holds the most recently added failure and exclusively owns the
/// node that came before it. Read from `previous` outward the chain is in
/// chronological order, so the node's own `failure` is always the newest one.
///
/// Chains are never mutated in place; every operation consumes the chain and
/// returns a new one. Dropping, cloning, comparing, hashing and serializing a
/// chain all walk it iteratively, so arbitrarily long chains are safe to hold.
/// With the `serde` feature a chain is encoded as its failures, oldest first.
///
/// # Examples
///
/// ```
/// use konad_rail::FailChain;
///
/// let chain = FailChain::new("first").push("second").push("third");
/// assert_eq!(chain.failure(), &"third");
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain.failures().as_slice(), &[&"first", &"second", &"third"]);
/// ```
pub struct FailChain<E> {
    pub(crate) failure: E,
    pub(crate) previous: Link<FailChain<E>>,
}

impl<E> FailChain<E> {
    /// Creates a single-node chain.
    #[must_use]
    #[inline]
    pub fn new(failure: E) -> Self {
        Self {
            failure,
            previous: Link::empty(),
        }
    }

    /// Creates a node holding `failure` on top of an existing chain.
    #[must_use]
    #[inline]
    pub fn with_previous(failure: E, previous: FailChain<E>) -> Self {
        Self {
            failure,
            previous: Link::to(previous),
        }
    }

    /// Adds `failure` as the newest entry of the chain.
    #[must_use]
    #[inline]
    pub fn push(self, failure: E) -> Self {
        Self::with_previous(failure, self)
    }

    /// Builds a chain from failures given oldest first.
    ///
    /// Returns `None` when the iterator is empty, since a chain always carries
    /// at least one failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use konad_rail::FailChain;
    ///
    /// let chain = FailChain::from_failures(["a", "b"]).unwrap();
    /// assert_eq!(chain.failure(), &"b");
    ///
    /// assert!(FailChain::<&str>::from_failures([]).is_none());
    /// ```
    pub fn from_failures<I>(failures: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut failures = failures.into_iter();
        let oldest = failures.next()?;
        Some(failures.fold(Self::new(oldest), Self::push))
    }

    /// The newest failure of the chain.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> &E {
        &self.failure
    }

    /// The chain accumulated before this node, if any.
    #[must_use]
    #[inline]
    pub fn previous(&self) -> Option<&FailChain<E>> {
        self.previous.get()
    }

    /// Number of failures in the chain. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links().count()
    }

    /// A chain always holds at least one failure, so this is `false` for
    /// every chain.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Walks the chain newest to oldest without allocating.
    #[inline]
    pub fn links(&self) -> Links<'_, E> {
        Links { next: Some(self) }
    }

    /// Materializes the failures oldest to newest.
    #[must_use]
    pub fn failures(&self) -> ErrorVec<&E> {
        let mut failures: ErrorVec<&E> = self.links().collect();
        failures.reverse();
        failures
    }

    /// Consumes the chain and returns its failures oldest to newest.
    #[must_use]
    pub fn into_failures(self) -> ErrorVec<E> {
        let (oldest, newer) = self.into_oldest_and_newer();
        let mut failures = ErrorVec::with_capacity(newer.len() + 1);
        failures.push(oldest);
        failures.extend(newer);
        failures
    }

    /// Applies `f` to every failure, keeping chain shape and order.
    #[must_use]
    pub fn map<D, F>(self, mut f: F) -> FailChain<D>
    where
        F: FnMut(E) -> D,
    {
        let (oldest, newer) = self.into_oldest_and_newer();
        let head = FailChain::new(f(oldest));
        newer
            .into_iter()
            .fold(head, |chain, failure| chain.push(f(failure)))
    }

    /// Appends every failure of `newer` after the failures of `self`.
    ///
    /// Unlike the one-level merge performed by
    /// [`Validation::ap`](crate::Validation::ap), nothing is dropped.
    #[must_use]
    pub fn concat(self, newer: FailChain<E>) -> Self {
        newer.into_failures().into_iter().fold(self, Self::push)
    }

    /// Splits off the newest failure from the chain behind it.
    pub(crate) fn into_parts(mut self) -> (E, Option<FailChain<E>>) {
        let previous = self.previous.take();
        (self.failure, previous)
    }

    /// Splits the chain into its oldest failure and the remaining failures in
    /// chronological order.
    pub(crate) fn into_oldest_and_newer(self) -> (E, ErrorVec<E>) {
        let mut newer = ErrorVec::new();
        let mut node = self;
        while let Some(previous) = node.previous.take() {
            newer.push(node.failure);
            node = previous;
        }
        newer.reverse();
        (node.failure, newer)
    }

    fn oldest(&self) -> &E {
        let mut node = self;
        while let Some(previous) = node.previous() {
            node = previous;
        }
        &node.failure
    }
}

impl<E> Node for FailChain<E> {
    #[inline]
    fn detach(&mut self) -> Option<Box<Self>> {
        self.previous.0.take()
    }
}

/// Iterator over a [`FailChain`] from the newest failure to the oldest.
///
/// Created by [`FailChain::links`].
pub struct Links<'a, E> {
    next: Option<&'a FailChain<E>>,
}

impl<'a, E> Iterator for Links<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.previous.get();
        Some(&node.failure)
    }
}

impl<E> core::iter::FusedIterator for Links<'_, E> {}

impl<E: Clone> Clone for FailChain<E> {
    fn clone(&self) -> Self {
        self.failures()
            .into_iter()
            .skip(1)
            .fold(FailChain::new(self.oldest().clone()), |chain, failure| {
                chain.push(failure.clone())
            })
    }
}

impl<E: PartialEq> PartialEq for FailChain<E> {
    fn eq(&self, other: &Self) -> bool {
        self.links().eq(other.links())
    }
}

impl<E: Eq> Eq for FailChain<E> {}

impl<E: Hash> Hash for FailChain<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for failure in self.links() {
            failure.hash(state);
        }
    }
}

impl<E: Debug> Debug for FailChain<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FailChain")
            .field("failures", &self.failures())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for FailChain<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.failures())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Deserialize<'de>> Deserialize<'de> for FailChain<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let failures = Vec::<E>::deserialize(deserializer)?;
        Self::from_failures(failures)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one failure"))
    }
}

impl<E: Display> Display for FailChain<E> {
    /// Renders failures oldest to newest, joined with ` -> `.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, failure) in self.failures().into_iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(failure, f)?;
        }
        Ok(())
    }
}

impl<E: Debug + Display> core::error::Error for FailChain<E> {}

impl<E> From<E> for FailChain<E> {
    #[inline]
    fn from(failure: E) -> Self {
        Self::new(failure)
    }
}
