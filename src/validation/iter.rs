use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
use crate::validation::core::Validation;
use crate::validation::flatten;

/// Iterator over a reference to the success value, if any.
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}

/// Iterator over a mutable reference to the success value, if any.
pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for IterMut<'_, A> {}

/// Owning iterator over the success value, if any.
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}

impl<E, A> IntoIterator for Validation<E, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, A> IntoIterator for &'a mut Validation<E, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E, A> Validation<E, A> {
    pub fn iter(&self) -> Iter<'_, A> {
        match self {
            Validation::Success(a) => Iter { inner: Some(a) },
            Validation::Fail(_) => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            Validation::Success(a) => IterMut { inner: Some(a) },
            Validation::Fail(_) => IterMut { inner: None },
        }
    }

    /// Iterates the failures oldest to newest. Empty on `Success`.
    pub fn iter_failures(&self) -> smallvec::IntoIter<[&E; 1]> {
        match self {
            Validation::Success(_) => ErrorVec::new().into_iter(),
            Validation::Fail(chain) => chain.failures().into_iter(),
        }
    }
}

/// Collecting validations is [`flatten`]: every failure is accumulated.
///
/// # Examples
///
/// ```
/// use konad_rail::Validation;
///
/// let items = vec![Validation::success(1), Validation::fail("bad"), Validation::fail("worse")];
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
///
/// assert_eq!(collected.into_failures().unwrap().as_slice(), &["bad", "worse"]);
/// ```
impl<E, A> FromIterator<Validation<E, A>> for Validation<E, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        flatten(iter)
    }
}
