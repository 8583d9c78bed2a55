//! Building blocks for array-backed priority queues.
//!
//! The central type is [`ArrayHeap`], a max-heap which keeps its entries in a
//! single growable array and derives the binary tree structure from index
//! arithmetic alone. Entries pair an ordered key with an opaque value, and the
//! entry with the largest key is always available at the root.
//!
//! Heaps can also be loaded wholesale from a level-order layout supplied by
//! the caller, in which case the layout is validated against the heap
//! invariant before a heap is handed back; see [`ArrayHeap::from_level_order`].

#![deny(missing_docs)]

mod entry;
mod error;
mod heap;
mod queue;

#[cfg(feature = "serde")]
mod serde;

pub use entry::HeapEntry;
pub use error::HeapError;
pub use heap::ArrayHeap;
pub use queue::PriorityQueue;
