use crate::types::alloc_type::Box;

/// A node of a singly linked chain that can hand over its tail.
pub(crate) trait Node: Sized {
    fn detach(&mut self) -> Option<Box<Self>>;
}

/// Owning pointer to the older part of a chain.
///
/// Dropping a link unlinks the nodes behind it one at a time, so releasing a
/// chain never recurses once per node.
pub(crate) struct Link<N: Node>(pub(crate) Option<Box<N>>);

impl<N: Node> Link<N> {
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self(None)
    }

    #[inline]
    pub(crate) fn to(node: N) -> Self {
        Self(Some(Box::new(node)))
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&N> {
        self.0.as_deref()
    }

    #[inline]
    pub(crate) fn take(&mut self) -> Option<N> {
        self.0.take().map(|node| *node)
    }
}

impl<N: Node> Drop for Link<N> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(mut node) = next {
            next = node.detach();
        }
    }
}
