//! Addressable min-priority queue used as the search frontier.
//!
//! [`MinHeap`] is a binary heap keyed by a mutable priority. Unlike
//! [`std::collections::BinaryHeap`], items are addressable: the heap tracks the
//! slot of every item so membership tests and priority changes run without a
//! linear scan. Precondition violations (duplicate inserts, updates of absent
//! items, extraction from an empty heap) are reported as [`QueueError`].

mod error;
mod min_heap;

pub use error::QueueError;
pub use min_heap::MinHeap;
