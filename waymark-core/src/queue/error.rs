use thiserror::Error;

/// Errors from [`crate::queue::MinHeap`] operations.
///
/// Each variant marks a caller bug rather than an expected runtime condition:
/// a solver that checks membership before inserting never observes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The item is already present in the queue.
    #[error("item is already present in the priority queue")]
    DuplicateItem,
    /// The queue holds no items.
    #[error("priority queue is empty")]
    Empty,
    /// The item is not present in the queue.
    #[error("item is not present in the priority queue")]
    NotFound,
}
