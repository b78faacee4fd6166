pub mod priority;
pub mod priority_queue;

pub use priority::Priority;
pub use priority_queue::{DrainSorted, HeapKind, Item, PriorityQueue};
