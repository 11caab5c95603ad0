//! Binary min-heap with an item-to-slot index.

use std::collections::HashMap;
use std::hash::Hash;

use super::error::QueueError;

/// Slot of the minimum entry. Slots are 1-based so that the children of slot
/// `s` sit at `2s` and `2s + 1` and its parent at `s / 2`.
const ROOT: usize = 1;

const fn parent(slot: usize) -> usize {
    slot >> 1
}

const fn left_child(slot: usize) -> usize {
    slot << 1
}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// Addressable binary min-heap.
///
/// Every item appears at most once. The heap keeps a map from item to its
/// current slot, updated on every swap, so [`contains`](Self::contains) is
/// O(1) and [`change_priority`](Self::change_priority) is O(log n).
///
/// Items with equal priorities are extracted in an unspecified order.
///
/// # Examples
///
/// ```
/// use waymark_core::MinHeap;
///
/// # fn main() -> Result<(), waymark_core::QueueError> {
/// let mut heap = MinHeap::new();
/// heap.insert("x", 5.0)?;
/// heap.insert("y", 2.0)?;
/// heap.insert("z", 8.0)?;
/// assert_eq!(heap.extract_min()?, ("y", 2.0));
///
/// heap.change_priority(&"z", 1.0)?;
/// assert_eq!(heap.extract_min()?.0, "z");
/// assert_eq!(heap.extract_min()?.0, "x");
/// assert!(heap.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, P = f64> {
    /// Heap-ordered entries; slot `s` is stored at index `s - 1`.
    entries: Vec<Entry<T, P>>,
    slots: HashMap<T, usize>,
}

impl<T, P> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T, P> MinHeap<T, P>
where
    T: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `item` is currently queued.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Current priority of `item`, if it is queued.
    #[must_use]
    pub fn priority(&self, item: &T) -> Option<P> {
        self.slots.get(item).and_then(|&slot| self.priority_at(slot))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    /// Add `item` with `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DuplicateItem`] if `item` is already queued; the
    /// heap is left unchanged.
    pub fn insert(&mut self, item: T, priority: P) -> Result<(), QueueError> {
        if self.contains(&item) {
            return Err(QueueError::DuplicateItem);
        }
        self.entries.push(Entry {
            item: item.clone(),
            priority,
        });
        let slot = self.entries.len();
        self.slots.insert(item, slot);
        self.bubble_up(slot);
        Ok(())
    }

    /// Borrow the item with the smallest priority without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] when the heap holds no items.
    pub fn peek_min(&self) -> Result<(&T, P), QueueError> {
        self.entries
            .first()
            .map(|entry| (&entry.item, entry.priority))
            .ok_or(QueueError::Empty)
    }

    /// Remove and return the item with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] when the heap holds no items.
    pub fn extract_min(&mut self) -> Result<(T, P), QueueError> {
        let last = self.entries.len();
        if last == 0 {
            return Err(QueueError::Empty);
        }
        self.swap(ROOT, last);
        let entry = self.entries.pop().ok_or(QueueError::Empty)?;
        self.slots.remove(&entry.item);
        self.bubble_down(ROOT);
        Ok((entry.item, entry.priority))
    }

    /// Replace the priority of a queued item and restore heap order.
    ///
    /// The new priority may be lower or higher than the current one.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NotFound`] if `item` is not queued.
    pub fn change_priority(&mut self, item: &T, priority: P) -> Result<(), QueueError> {
        let slot = self.slots.get(item).copied().ok_or(QueueError::NotFound)?;
        let entry = slot
            .checked_sub(1)
            .and_then(|index| self.entries.get_mut(index))
            .ok_or(QueueError::NotFound)?;
        entry.priority = priority;
        let settled = self.bubble_up(slot);
        self.bubble_down(settled);
        Ok(())
    }

    /// Iterate over queued items and their priorities in heap order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.item, entry.priority))
    }

    fn priority_at(&self, slot: usize) -> Option<P> {
        slot.checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.priority)
    }

    /// Whether the entry at slot `a` orders strictly before the one at `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        match (self.priority_at(a), self.priority_at(b)) {
            (Some(lhs), Some(rhs)) => lhs < rhs,
            _ => false,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (Some(index_a), Some(index_b)) = (a.checked_sub(1), b.checked_sub(1)) else {
            return;
        };
        if index_a >= self.entries.len() || index_b >= self.entries.len() {
            return;
        }
        self.entries.swap(index_a, index_b);
        for (index, slot) in [(index_a, a), (index_b, b)] {
            if let Some(entry) = self.entries.get(index)
                && let Some(tracked) = self.slots.get_mut(&entry.item)
            {
                *tracked = slot;
            }
        }
    }

    /// Move the entry at `slot` towards the root; returns its final slot.
    fn bubble_up(&mut self, slot: usize) -> usize {
        let mut current = slot;
        while current > ROOT {
            let up = parent(current);
            if !self.precedes(current, up) {
                break;
            }
            self.swap(current, up);
            current = up;
        }
        current
    }

    /// Move the entry at `slot` towards the leaves.
    fn bubble_down(&mut self, slot: usize) {
        let len = self.entries.len();
        let mut current = slot;
        loop {
            let left = left_child(current);
            if left > len {
                break;
            }
            let right = left + 1;
            let smaller = if right <= len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(smaller, current) {
                break;
            }
            self.swap(current, smaller);
            current = smaller;
        }
    }

    /// Check the heap property and the slot index; used by tests.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ordered = (ROOT + 1..=self.entries.len())
            .all(|slot| !self.precedes(slot, parent(slot)));
        let indexed = self.slots.len() == self.entries.len()
            && self.entries.iter().enumerate().all(|(index, entry)| {
                self.slots.get(&entry.item).copied() == Some(index + 1)
            });
        ordered && indexed
    }
}
