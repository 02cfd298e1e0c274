use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::buffer::CircularBuffer;
use crate::error::Result;

/// Thread-safe circular buffer that overwrites oldest data when full.
/// Every call takes the lock once; inserts never block on capacity.
pub struct SharedCircularBuffer<T> {
    inner: Mutex<CircularBuffer<T>>,
}

impl<T> SharedCircularBuffer<T> {
    pub fn new(capacity: usize) -> Result<Arc<Self>> {
        Ok(Self::from_buffer(CircularBuffer::new(capacity)?))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Arc<Self> {
        Self::from_buffer(CircularBuffer::with_capacity(capacity))
    }

    pub fn from_buffer(buffer: CircularBuffer<T>) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(buffer),
        })
    }

    /// Insert a single item. Returns the oldest item if it was overwritten.
    pub fn insert(&self, item: T) -> Option<T> {
        self.inner.lock().insert(item)
    }

    /// Insert multiple items under one lock. Drops oldest as needed.
    pub fn insert_slice(&self, items: &[T])
    where
        T: Clone,
    {
        self.inner.lock().extend(items.iter().cloned());
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().get(index).cloned()
    }

    pub fn head(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().head().cloned()
    }

    pub fn tail(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().tail().cloned()
    }

    /// Copy of the retained items, oldest first.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().to_vec()
    }

    /// Run `f` against the buffer while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&CircularBuffer<T>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Clear all items.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Current number of items.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn insert_slice_drops_oldest() {
        let buf = SharedCircularBuffer::new(4).unwrap();
        buf.insert_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.snapshot(), vec![3, 4, 5, 6]);
        assert_eq!(buf.tail(), Some(3));
        assert_eq!(buf.head(), Some(6));
        assert_eq!(buf.get(2), Some(4));
        assert!(buf.is_full());
    }

    #[test]
    fn with_iterates_under_lock() {
        let buf = SharedCircularBuffer::new(3).unwrap();
        buf.insert_slice(&["a", "b", "c", "d"]);
        let newest_first: Vec<_> = buf.with(|b| b.iter_rev().map(|(_, s)| *s).collect());
        assert_eq!(newest_first, vec!["d", "c", "b"]);
    }

    #[test]
    fn concurrent_producers_keep_capacity() {
        let buf = SharedCircularBuffer::new(8).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let buf = Arc::clone(&buf);
                thread::spawn(move || {
                    for i in 0..100 {
                        buf.insert(t * 1000 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn clear_empties() {
        let buf = SharedCircularBuffer::new(2).unwrap();
        buf.insert(1);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.head(), None);
    }
}
