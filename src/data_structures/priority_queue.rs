use log::trace;
use std::iter::FusedIterator;

use crate::data_structures::Priority;
use crate::{Error, Result};

/// Ordering mode of a priority queue, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapKind {
    /// The queue yields the item with the smallest priority first
    #[default]
    Min,

    /// The queue yields the item with the largest priority first
    Max,
}

/// An item held by the priority queue
///
/// Items are only created by [`PriorityQueue::put`] and handed back to the caller
/// on extraction. With the `serde` feature they can be serialized but not
/// deserialized; restore a queue by feeding `(value, priority)` pairs to `put`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item<T, V> {
    /// The value associated with the item
    pub value: T,

    /// The priority of the item
    pub priority: V,

    /// Current index in the backing vector, `usize::MAX` once extracted
    #[cfg_attr(feature = "serde", serde(skip))]
    position: usize,
}

impl<T, V> Item<T, V> {
    /// Splits the item into its value and priority
    pub fn into_inner(self) -> (T, V) {
        (self.value, self.priority)
    }
}

/// A binary-heap priority queue over values of type `T` with priorities of type `V`
///
/// The heap is stored as an implicit binary tree in a vector: the parent of index
/// `i` sits at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Every item
/// records its own index, which is kept in sync on each swap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, V>
where
    V: Priority,
{
    /// The heap data
    items: Vec<Item<T, V>>,

    /// Whether the root holds the minimum or the maximum priority
    kind: HeapKind,
}

impl<T, V> PriorityQueue<T, V>
where
    V: Priority,
{
    /// Creates a new empty priority queue of the given kind
    pub fn new(kind: HeapKind) -> Self {
        PriorityQueue {
            items: Vec::new(),
            kind,
        }
    }

    /// Creates a new empty priority queue with room for `capacity` items
    pub fn with_capacity(kind: HeapKind, capacity: usize) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            kind,
        }
    }

    /// Creates a new empty queue yielding the smallest priority first
    pub fn min() -> Self {
        Self::new(HeapKind::Min)
    }

    /// Creates a new empty queue yielding the largest priority first
    pub fn max() -> Self {
        Self::new(HeapKind::Max)
    }

    /// Returns the kind this queue was created with
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the number of items in the priority queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value with the given priority to the priority queue
    pub fn put(&mut self, value: T, priority: V) {
        let position = self.items.len();
        self.items.push(Item {
            value,
            priority,
            position,
        });
        self.sift_up(position);
    }

    /// Removes and returns the item with the extreme priority
    ///
    /// Returns [`Error::EmptyQueue`] if there is nothing to remove; the queue is
    /// left untouched in that case.
    pub fn get(&mut self) -> Result<Item<T, V>> {
        self.pop().ok_or_else(|| {
            trace!("get called on an empty {:?} priority queue", self.kind);
            Error::EmptyQueue
        })
    }

    /// Removes and returns the item with the extreme priority, or `None` if empty
    pub fn pop(&mut self) -> Option<Item<T, V>> {
        if self.items.is_empty() {
            return None;
        }

        // The last item takes the root slot
        let mut root = self.items.swap_remove(0);
        root.position = usize::MAX;
        if !self.items.is_empty() {
            self.items[0].position = 0;
            self.sift_down(0);
        }

        Some(root)
    }

    /// Returns the item with the extreme priority without removing it
    pub fn peek(&self) -> Option<&Item<T, V>> {
        self.items.first()
    }

    /// Removes every item from the priority queue
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator that extracts items in priority order
    ///
    /// Items not consumed before the iterator is dropped stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, V> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue and returns its items in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<Item<T, V>> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap property and the position bookkeeping of every item
    pub fn check_invariants(&self) -> bool {
        for (index, item) in self.items.iter().enumerate() {
            if item.position != index {
                return false;
            }
            if index > 0 && self.outranks(index, (index - 1) / 2) {
                return false;
            }
        }
        true
    }

    /// True if the item at `a` must sit above the item at `b`
    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        let ordering = self.items[a].priority.cmp_priority(&self.items[b].priority);
        match self.kind {
            HeapKind::Min => ordering.is_lt(),
            HeapKind::Max => ordering.is_gt(),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.items[a].position = a;
        self.items[b].position = b;
    }

    /// Move item at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.outranks(index, parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move item at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut extreme = index;

            if left < len && self.outranks(left, extreme) {
                extreme = left;
            }
            if right < len && self.outranks(right, extreme) {
                extreme = right;
            }

            if extreme == index {
                break;
            }

            self.swap(index, extreme);
            index = extreme;
        }
    }
}

impl<T, V> Default for PriorityQueue<T, V>
where
    V: Priority,
{
    fn default() -> Self {
        Self::new(HeapKind::default())
    }
}

impl<T, V> Extend<(T, V)> for PriorityQueue<T, V>
where
    V: Priority,
{
    fn extend<I: IntoIterator<Item = (T, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for (value, priority) in iter {
            self.put(value, priority);
        }
    }
}

/// Iterator returned by [`PriorityQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T, V>
where
    V: Priority,
{
    queue: &'a mut PriorityQueue<T, V>,
}

impl<T, V> Iterator for DrainSorted<'_, T, V>
where
    V: Priority,
{
    type Item = Item<T, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, V> ExactSizeIterator for DrainSorted<'_, T, V> where V: Priority {}

impl<T, V> FusedIterator for DrainSorted<'_, T, V> where V: Priority {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_queue(kind: HeapKind) -> PriorityQueue<&'static str, i64> {
        let mut queue = PriorityQueue::new(kind);
        queue.put("apple", 10);
        queue.put("banana", 3);
        queue.put("pear", 20);
        queue.put("orange", 15);
        queue
    }

    fn drain(queue: &mut PriorityQueue<&'static str, i64>) -> Vec<(&'static str, i64)> {
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.get().unwrap().into_inner());
        }
        out
    }

    #[test]
    fn test_min_queue_order() {
        let mut queue = fruit_queue(HeapKind::Min);
        assert!(queue.check_invariants());
        assert_eq!(
            drain(&mut queue),
            vec![("banana", 3), ("apple", 10), ("orange", 15), ("pear", 20)]
        );
    }

    #[test]
    fn test_max_queue_order() {
        let mut queue = fruit_queue(HeapKind::Max);
        assert!(queue.check_invariants());
        assert_eq!(
            drain(&mut queue),
            vec![("pear", 20), ("orange", 15), ("apple", 10), ("banana", 3)]
        );
    }

    #[test]
    fn test_get_on_empty_queue() {
        let mut queue: PriorityQueue<String, i32> = PriorityQueue::new(HeapKind::Max);
        assert_eq!(queue.get().unwrap_err(), Error::EmptyQueue);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        queue.put("only".to_string(), 1);
        assert!(queue.get().is_ok());
        assert_eq!(queue.get().unwrap_err(), Error::EmptyQueue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_positions_follow_swaps() {
        let mut queue = PriorityQueue::min();
        for p in [9, 4, 7, 1, 8, 2, 6, 3, 5, 0] {
            queue.put(p, p);
            assert!(queue.check_invariants());
        }
        for (index, item) in queue.items.iter().enumerate() {
            assert_eq!(item.position, index);
        }

        for _ in 0..4 {
            queue.get().unwrap();
            assert!(queue.check_invariants());
        }
    }

    #[test]
    fn test_peek_matches_get() {
        let mut queue = fruit_queue(HeapKind::Max);
        let peeked = queue.peek().map(|item| (item.value, item.priority));
        assert_eq!(peeked, Some(("pear", 20)));
        assert_eq!(queue.len(), 4);

        let item = queue.get().unwrap();
        assert_eq!((item.value, item.priority), ("pear", 20));
        assert_eq!(queue.peek().map(|item| item.priority), Some(15));
    }

    #[test]
    fn test_extracted_item_has_no_position() {
        let mut queue = PriorityQueue::max();
        queue.extend(vec![("a", 3i32), ("b", 9), ("c", 1)]);

        let first = queue.get().unwrap();
        assert_eq!(first.position, usize::MAX);
        let rest: Vec<_> = queue.drain_sorted().collect();
        assert!(rest.iter().all(|item| item.position == usize::MAX));
    }

    #[test]
    fn test_extreme_integer_priorities() {
        let mut queue = PriorityQueue::min();
        for p in [100i8, i8::MAX, i8::MIN, -1, 0, i8::MAX, i8::MIN] {
            queue.put(p, p);
            assert!(queue.check_invariants());
        }

        let order: Vec<i8> = queue.drain_sorted().map(|item| item.priority).collect();
        assert_eq!(order, vec![i8::MIN, i8::MIN, -1, 0, 100, i8::MAX, i8::MAX]);
    }

    #[test]
    fn test_pop_returns_none_when_empty() {
        let mut queue = PriorityQueue::max();
        queue.put('a', 1i32);
        assert_eq!(queue.pop().map(|item| item.value), Some('a'));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut queue = PriorityQueue::min();
        queue.put("a", 1i32);
        queue.put("b", 1);
        queue.put("c", 1);

        assert_eq!(queue.len(), 3);

        let mut values: Vec<_> = queue.drain_sorted().map(|item| item.value).collect();
        values.sort_unstable();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_negative_priorities() {
        let mut queue = PriorityQueue::min();
        for p in [-3i16, 5, -10, 0, 2] {
            queue.put(p, p);
        }
        let order: Vec<i16> = queue
            .into_sorted_vec()
            .into_iter()
            .map(|i| i.priority)
            .collect();
        assert_eq!(order, vec![-10, -3, 0, 2, 5]);
    }

    #[test]
    fn test_float_priorities_with_nan() {
        let mut queue = PriorityQueue::min();
        queue.put("nan", f64::NAN.abs());
        queue.put("one", 1.0);
        queue.put("neg", -2.5);
        queue.put("inf", f64::INFINITY);

        let order: Vec<_> = queue.drain_sorted().map(|item| item.value).collect();
        assert_eq!(order, vec!["neg", "one", "inf", "nan"]);
    }

    #[test]
    fn test_drain_sorted_partial() {
        let mut queue = PriorityQueue::max();
        queue.extend((0..10).map(|i| (i, i as i32)));

        let top: Vec<i32> = queue
            .drain_sorted()
            .take(3)
            .map(|item| item.priority)
            .collect();
        assert_eq!(top, vec![9, 8, 7]);
        assert_eq!(queue.len(), 7);
        assert!(queue.check_invariants());
        assert_eq!(queue.drain_sorted().len(), 7);
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut queue = PriorityQueue::with_capacity(HeapKind::Min, 16);
        queue.extend(vec![("x", 2i64), ("y", 1)]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.kind(), HeapKind::Min);

        queue.put("z", 5);
        assert_eq!(queue.get().unwrap().value, "z");
    }

    #[test]
    fn test_default_is_min() {
        let queue: PriorityQueue<(), i32> = PriorityQueue::default();
        assert_eq!(queue.kind(), HeapKind::Min);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ascending_insertion() {
        let mut queue = PriorityQueue::min();

        for i in 0..100 {
            queue.put(i, i);
        }

        for i in 0..100 {
            assert_eq!(queue.get().unwrap().into_inner(), (i, i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut queue = PriorityQueue::max();

        for i in 0..100 {
            queue.put(i, i);
        }

        for i in (0..100).rev() {
            assert_eq!(queue.get().unwrap().into_inner(), (i, i));
        }
    }
}
