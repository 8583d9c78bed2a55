use thiserror::Error;

/// Errors reported when building a heap out of caller-supplied data.
///
/// Every variant is an invalid-argument failure of the bulk constructor:
/// either a fully valid heap is returned, or no heap at all. The running
/// operations (`push`, `pop`, `peek`) cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The key and value sequences have different lengths.
    #[error("keys and values must have the same length ({keys} keys, {values} values)")]
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },

    /// The key and value sequences are empty.
    #[error("keys and values must not be empty")]
    Empty,

    /// The supplied level-order layout is not a max-heap.
    #[error("entry at index {index} has a larger key than its parent")]
    NotAHeap {
        /// First index at which the heap property is violated
        index: usize,
    },
}
