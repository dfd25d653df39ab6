use core::iter::FusedIterator;

use crate::optional::Optional;

/// A lazy sequence of zero or one values, drained by the first `next()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Optional<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Optional<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.inner.is_some())
    }
}

impl<T> FusedIterator for IntoIter<T> {}
