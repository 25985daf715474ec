//! Binary min-heap with decrease-key.
//!
//! Each entry is `(priority, sequence, item)`. The sequence number is taken
//! from a counter at insertion time and breaks ties between equal
//! priorities, so items with the same priority come out in insertion order.
//! A side table maps every queued item to its heap slot, which makes
//! `contains` O(1) and `decrease_key` O(log n).

use std::fmt::Debug;
use std::hash::Hash;

use arbor_common::utils::error::{Error, Result};
use arbor_common::utils::hash::FastHashMap;

#[derive(Debug, Clone)]
struct HeapEntry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: PartialOrd> HeapEntry<T, P> {
    /// Strict heap order: lower priority first, then earlier insertion.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(std::cmp::Ordering::Less) => true,
            Some(std::cmp::Ordering::Equal) => self.sequence < other.sequence,
            _ => false,
        }
    }
}

/// A min-priority queue holding at most one entry per item.
///
/// ```
/// use arbor_core::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.push('a', 5.0)?;
/// queue.push('b', 3.0)?;
/// queue.decrease_key(&'a', 1.0)?;
/// assert_eq!(queue.pop_min()?, ('a', 1.0));
/// # Ok::<(), arbor_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, P> {
    heap: Vec<HeapEntry<T, P>>,
    positions: FastHashMap<T, usize>,
    next_sequence: u64,
}

impl<T, P> Default for IndexedPriorityQueue<T, P>
where
    T: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: arbor_common::utils::hash::fast_map_with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Number of queued items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no item is queued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `item` is queued.
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the priority currently stored for `item`.
    #[must_use]
    pub fn priority(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&slot| self.heap[slot].priority)
    }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<(T, P)> {
        self.heap.first().map(|entry| (entry.item, entry.priority))
    }

    /// Queues `item` with `priority`.
    ///
    /// An item can be queued only once; use [`decrease_key`](Self::decrease_key)
    /// to improve the priority of a queued item.
    pub fn push(&mut self, item: T, priority: P) -> Result<()> {
        if self.positions.contains_key(&item) {
            return Err(Error::InvalidParameter(format!(
                "{item:?} is already queued"
            )));
        }
        let slot = self.heap.len();
        self.heap.push(HeapEntry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
        self.positions.insert(item, slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// Among equal priorities the earliest inserted item wins.
    pub fn pop_min(&mut self) -> Result<(T, P)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.positions.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.item, entry.priority))
    }

    /// Lowers the priority of a queued item.
    ///
    /// Fails with [`Error::NotFound`] if the item is not queued and with
    /// [`Error::KeyNotLower`] unless `priority` is strictly lower than the
    /// stored one. The item keeps its original insertion sequence.
    pub fn decrease_key(&mut self, item: &T, priority: P) -> Result<()> {
        let slot = *self
            .positions
            .get(item)
            .ok_or_else(|| Error::NotFound(format!("{item:?}")))?;
        let current = self.heap[slot].priority;
        if priority.partial_cmp(&current) != Some(std::cmp::Ordering::Less) {
            return Err(Error::KeyNotLower {
                current: format!("{current:?}"),
                new: format!("{priority:?}"),
            });
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].item, a);
        self.positions.insert(self.heap[b].item, b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<T, P> Extend<(T, P)> for IndexedPriorityQueue<T, P>
where
    T: Copy + Eq + Hash + Debug,
    P: PartialOrd + Copy + Debug,
{
    /// Queues every pair; items already queued are skipped.
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            let _ = self.push(item, priority);
        }
    }
}
