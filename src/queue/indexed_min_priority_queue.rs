use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use crate::graphs::Weight;

/// Position of an item in the heap array and the priority it was given.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    index: usize,
    priority: Weight,
}

/// Min priority queue whose priorities are supplied from the outside and can
/// be changed after insertion. Every item is contained at most once.
///
/// The heap array only stores the items. Their priorities and positions live
/// in `entries`, which is kept in sync with the array on every swap.
#[derive(Clone)]
pub struct IndexedMinPriorityQueue<T> {
    heap: Vec<T>,
    entries: HashMap<T, QueueEntry>,
}

impl<T: Clone + Eq + Hash> Default for IndexedMinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> IndexedMinPriorityQueue<T> {
    pub fn new() -> IndexedMinPriorityQueue<T> {
        IndexedMinPriorityQueue {
            heap: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Inserts `item` with `priority`. Returns false and leaves the queue
    /// untouched if the item is already present.
    pub fn add(&mut self, item: T, priority: Weight) -> bool {
        if self.entries.contains_key(&item) {
            return false;
        }

        let index = self.heap.len();
        self.entries.insert(item.clone(), QueueEntry { index, priority });
        self.heap.push(item);
        self.swim(index);

        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.entries.contains_key(item)
    }

    /// Returns the current priority of `item`, if present.
    pub fn priority(&self, item: &T) -> Option<Weight> {
        self.entries.get(item).map(|entry| entry.priority)
    }

    pub fn peek_smallest(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn remove_smallest(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let last_index = self.heap.len() - 1;
        if last_index > 0 {
            self.swap(0, last_index);
        }

        let smallest = self.heap.pop()?;
        self.entries.remove(&smallest);

        if !self.heap.is_empty() {
            self.sink(0);
        }

        Some(smallest)
    }

    /// Sets the priority of `item`. Returns false if the item is not present.
    pub fn change_priority(&mut self, item: &T, priority: Weight) -> bool {
        let index = match self.entries.get_mut(item) {
            Some(entry) => {
                entry.priority = priority;
                entry.index
            }
            None => return false,
        };

        // Only one of both moves can have an effect.
        let index = self.swim(index);
        self.sink(index);

        true
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn priority_at(&self, index: usize) -> Weight {
        self.entries[&self.heap[index]].priority
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        for index in [a, b] {
            if let Some(entry) = self.entries.get_mut(&self.heap[index]) {
                entry.index = index;
            }
        }
    }

    /// Moves the item at `index` towards the root while it is smaller than
    /// its parent. Returns the final index.
    fn swim(&mut self, mut index: usize) -> usize {
        while let Some(parent) = parent_index(index) {
            if self.priority_at(index) < self.priority_at(parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the item at `index` away from the root while it is larger than
    /// its smaller child. Returns the final index.
    fn sink(&mut self, mut index: usize) -> usize {
        while let Some(left) = left_index(index, self.heap.len()) {
            let mut child = left;
            if let Some(right) = right_index(index, self.heap.len()) {
                if self.priority_at(right) < self.priority_at(left) {
                    child = right;
                }
            }

            if self.priority_at(index) > self.priority_at(child) {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
        index
    }
}

fn left_index(parent: usize, size: usize) -> Option<usize> {
    let index = 2 * parent + 1;
    (index < size).then_some(index)
}

fn right_index(parent: usize, size: usize) -> Option<usize> {
    let index = 2 * parent + 2;
    (index < size).then_some(index)
}

fn parent_index(child: usize) -> Option<usize> {
    if child == 0 {
        return None;
    }
    Some((child - 1) / 2)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{parent_index, IndexedMinPriorityQueue};

    fn assert_consistent(queue: &IndexedMinPriorityQueue<u32>) {
        assert_eq!(queue.heap.len(), queue.entries.len());
        for (index, item) in queue.heap.iter().enumerate() {
            assert_eq!(queue.entries[item].index, index);
            if let Some(parent) = parent_index(index) {
                assert!(queue.priority_at(parent) <= queue.priority_at(index));
            }
        }
    }

    #[test]
    fn index_arithmetic() {
        assert_eq!(parent_index(0), None);
        assert_eq!(parent_index(1), Some(0));
        assert_eq!(parent_index(2), Some(0));
        assert_eq!(parent_index(6), Some(2));
        assert_eq!(super::left_index(2, 6), Some(5));
        assert_eq!(super::right_index(2, 6), None);
    }

    #[test]
    fn heap_and_index_stay_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = IndexedMinPriorityQueue::new();

        for _ in 0..5_000 {
            let item = rng.gen_range(0..200u32);
            match rng.gen_range(0..3) {
                0 => {
                    let was_present = queue.contains(&item);
                    assert_eq!(queue.add(item, rng.gen_range(0.0..100.0)), !was_present);
                }
                1 => {
                    let was_present = queue.contains(&item);
                    assert_eq!(
                        queue.change_priority(&item, rng.gen_range(0.0..100.0)),
                        was_present
                    );
                }
                _ => {
                    let smallest = queue.peek_smallest().copied();
                    assert_eq!(queue.remove_smallest(), smallest);
                }
            }
            assert_consistent(&queue);
        }
    }

    #[test]
    fn infinite_priorities_sink_to_the_bottom() {
        let mut queue = IndexedMinPriorityQueue::new();
        queue.add(1, f64::INFINITY);
        queue.add(2, 3.0);
        queue.add(3, f64::INFINITY);
        assert_consistent(&queue);

        assert_eq!(queue.remove_smallest(), Some(2));
        assert!(queue.change_priority(&3, 1.0));
        assert_eq!(queue.remove_smallest(), Some(3));
        assert_eq!(queue.remove_smallest(), Some(1));
        assert_eq!(queue.remove_smallest(), None);
    }
}
