use thiserror::Error;

/// Errors raised while building a [`crate::street::StreetGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreetGraphError {
    /// An edge or way referenced a node that was never added.
    #[error("street node {id} has not been added to the graph")]
    UnknownNode {
        /// Identifier of the missing node.
        id: u64,
    },
    /// A way needs at least two nodes to form an edge.
    #[error("a way must reference at least two nodes, got {count}")]
    ShortWay {
        /// Number of nodes supplied.
        count: usize,
    },
}
