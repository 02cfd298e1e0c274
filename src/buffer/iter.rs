use std::fmt;
use std::iter::FusedIterator;

use super::CircularBuffer;

/// Iterator over `(logical_index, &item)` pairs of a [`CircularBuffer`].
///
/// Yields oldest first; `.rev()` (or [`CircularBuffer::iter_rev`]) walks the
/// same indices newest first.
pub struct Iter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    /// Next logical index from the front
    front: usize,
    /// Next logical index from the back
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(buffer: &'a CircularBuffer<T>) -> Self {
        Self {
            buffer,
            front: 1,
            back: buffer.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        self.buffer.get(index).map(|item| (index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back + 1).saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let index = self.back;
        self.back -= 1;
        self.buffer.get(index).map(|item| (index, item))
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            front: self.front,
            back: self.back,
        }
    }
}
