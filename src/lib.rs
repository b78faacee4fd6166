//! Heap Queue - a generic binary-heap priority queue
//!
//! This library provides a priority queue that always yields the item of extreme
//! priority, either the minimum or the maximum depending on the [`HeapKind`]
//! chosen at construction. Insertion and extraction run in O(log n).
//!
//! The queue is backed by a flat vector laid out as an implicit binary tree, and
//! is meant as a building block for schedulers, event simulation and graph
//! algorithms such as shortest-path search.
//!
//! ```rust
//! use heap_queue::{HeapKind, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new(HeapKind::Min);
//! queue.put("apple", 10);
//! queue.put("banana", 3);
//!
//! let item = queue.get().unwrap();
//! assert_eq!(item.value, "banana");
//! assert_eq!(item.priority, 3);
//! ```

pub mod data_structures;

/// Re-export main types for convenient use
pub use data_structures::{DrainSorted, HeapKind, Item, Priority, PriorityQueue};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot get an item from an empty priority queue")]
    EmptyQueue,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
