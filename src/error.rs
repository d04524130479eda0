use std::collections::TryReserveError;

/// Errors reported by tree operations.
///
/// A missing key is never an error: [`search`][crate::TreeOps::search] returns `None` and
/// [`delete`][crate::TreeOps::delete] does nothing. Every variant here means some memory could
/// not be obtained. In all cases the tree is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A new node could not be allocated. The content passed to `insert` has been dropped.
    #[error("could not allocate a node for key {key:?}")]
    NodeAllocation {
        /// The key that was being inserted.
        key: char,
    },
    /// An auxiliary stack used by an iterative traversal could not grow.
    #[error("traversal stack could not grow past {depth} entries")]
    StackExhausted {
        /// How many entries the stack held when it failed to grow.
        depth: usize,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
    /// The items collection filled by a traversal could not grow.
    #[error("items collection could not grow past {len} entries")]
    ItemsExhausted {
        /// How many items had been collected when it failed to grow.
        len: usize,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}
