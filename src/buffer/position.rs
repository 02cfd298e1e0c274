//! Conversion between the two coordinate spaces of a circular buffer.
//!
//! Physical slots are 0-based storage positions. Logical indices are 1-based
//! and ordered by age: `1` is the oldest retained item, `count` the newest.

/// Slot written by the insert that follows a write at `head`.
///
/// `head` is `None` before the first insert, so the first write lands in
/// slot 0.
pub(crate) fn next_slot(head: Option<usize>, capacity: usize) -> usize {
    match head {
        Some(slot) => (slot + 1) % capacity,
        None => 0,
    }
}

/// Physical slot holding logical index `logical`, or `None` when the index
/// is outside `1..=count`.
///
/// The modulus is the current `count`, not the capacity. Until the buffer
/// fills, the head sits at `count - 1` and addressing wraps over the
/// occupied prefix only; once full the two are equal.
pub(crate) fn physical_slot(head: usize, logical: usize, count: usize) -> Option<usize> {
    if logical == 0 || logical > count {
        return None;
    }
    Some((head + logical) % count)
}
