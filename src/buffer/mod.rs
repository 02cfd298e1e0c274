mod iter;
mod position;

use std::fmt;
use std::mem;
use std::num::NonZeroUsize;

use crate::error::{Error, Result};

pub use iter::Iter;

/// Fixed-capacity sequence that overwrites its oldest item once full.
///
/// Items are addressed by logical index: `1` is the oldest retained item and
/// `len()` the most recently inserted one (the head).
#[derive(Clone)]
pub struct CircularBuffer<T> {
    /// Grows by push until full, then overwritten in place
    slots: Vec<T>,
    /// Slot of the most recent write, `None` while empty
    head: Option<usize>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Create an empty buffer holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(Error::ZeroCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        tracing::debug!("circular buffer created with capacity {capacity}");
        Self {
            slots: Vec::with_capacity(capacity.get()),
            head: None,
            capacity: capacity.get(),
        }
    }

    /// Insert an item as the new head.
    ///
    /// When the buffer is full the oldest item is overwritten and returned.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let slot = position::next_slot(self.head, self.capacity);
        self.head = Some(slot);

        if slot == self.slots.len() {
            self.slots.push(item);
            None
        } else {
            tracing::trace!("evicted oldest item from slot {slot}");
            Some(mem::replace(&mut self.slots[slot], item))
        }
    }

    /// Item at logical index `index` (1 = oldest), or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_of(index)?;
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_of(index)?;
        self.slots.get_mut(slot)
    }

    /// Most recently inserted item.
    pub fn head(&self) -> Option<&T> {
        self.head.and_then(|slot| self.slots.get(slot))
    }

    /// Oldest retained item.
    pub fn tail(&self) -> Option<&T> {
        if self.slots.is_empty() {
            return None;
        }
        self.get(1)
    }

    /// Iterate `(logical_index, item)` pairs from oldest to newest.
    ///
    /// The iterator borrows the buffer, so it cannot be mutated while an
    /// iteration is in progress.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate `(logical_index, item)` pairs from newest to oldest.
    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Drop every item and return to the empty state.
    ///
    /// The allocation is kept, so refilling does not reallocate.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        tracing::debug!("circular buffer cleared");
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Items from oldest to newest.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().map(|(_, item)| item.clone()).collect()
    }

    fn slot_of(&self, index: usize) -> Option<usize> {
        let head = self.head?;
        position::physical_slot(head, index, self.slots.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|(_, item)| item))
            .finish()
    }
}

impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
