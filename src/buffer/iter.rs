//! Iterators over a [`RingBuffer`], front to back.

use std::iter::FusedIterator;

use super::RingBuffer;

/// Borrowing iterator returned by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    /// Logical offset of the next element from the front
    front: usize,
    /// One past the logical offset of the next element from the back
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buffer: &'a RingBuffer<T>) -> Self {
        Self {
            buffer,
            front: 0,
            back: buffer.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `RingBuffer::into_iter`.
///
/// Each step pops from the buffer, so elements not yet yielded are dropped
/// along with the iterator.
pub struct IntoIter<T> {
    buffer: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: RingBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.buffer.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
