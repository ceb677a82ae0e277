use std::hash::Hash;

use ahash::AHashMap;

use super::MinQueue;
use crate::error::QueueError;

#[derive(Clone, Debug)]
struct Entry<K, P> {
    key: K,
    priority: P,
}

/// Binary min-heap over `(key, priority)` entries paired with a hash map from
/// key to heap position, which makes changing the priority of any contained
/// key `O(log n)`.
///
/// Invariants: the parent of position `i > 0` is `(i - 1) / 2` and never has a
/// larger priority than `i`; `index[heap[i].key] == i` for every position and
/// the index holds exactly the keys in the heap.
#[derive(Clone, Debug)]
pub struct HeapMinQueue<K, P> {
    heap: Vec<Entry<K, P>>,
    index: AHashMap<K, usize>,
}

impl<K, P> Default for HeapMinQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> HeapMinQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord + Copy,
{
    pub fn new() -> HeapMinQueue<K, P> {
        HeapMinQueue {
            heap: Vec::new(),
            index: AHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> HeapMinQueue<K, P> {
        HeapMinQueue {
            heap: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// The priority currently associated with `key`, if it is contained.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.index
            .get(key)
            .map(|&position| self.heap[position].priority)
    }

    pub fn peek(&self) -> Option<(&K, P)> {
        self.heap.first().map(|entry| (&entry.key, entry.priority))
    }

    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let min = self.heap.swap_remove(0);
        self.index.remove(&min.key);
        if !self.heap.is_empty() {
            self.index.insert(self.heap[0].key.clone(), 0);
            self.sift_down(0);
        }

        debug_assert!(self.check_invariant());
        Some((min.key, min.priority))
    }

    /// Checks heap order and index consistency.
    pub fn check_invariant(&self) -> bool {
        self.index.len() == self.heap.len()
            && self.heap.iter().enumerate().all(|(position, entry)| {
                self.index.get(&entry.key) == Some(&position)
                    && (position == 0 || self.heap[(position - 1) / 2].priority <= entry.priority)
            })
    }

    /// Panics if `key` is already contained.
    fn add(&mut self, key: K, priority: P) {
        assert!(!self.index.contains_key(&key), "key is already contained");

        let position = self.heap.len();
        self.index.insert(key.clone(), position);
        self.heap.push(Entry { key, priority });
        self.sift_up(position);

        debug_assert!(self.check_invariant());
    }

    /// Panics if `key` is not contained.
    fn update(&mut self, key: &K, priority: P) {
        let position = *self.index.get(key).expect("key is not contained");

        let old_priority = std::mem::replace(&mut self.heap[position].priority, priority);
        if priority < old_priority {
            self.sift_up(position);
        } else if priority > old_priority {
            self.sift_down(position);
        }

        debug_assert!(self.check_invariant());
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.index.insert(self.heap[i].key.clone(), i);
        self.index.insert(self.heap[j].key.clone(), j);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.heap[position].priority >= self.heap[parent].priority {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    // On equal priorities the left child is preferred.
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= self.heap.len() {
                break;
            }

            let right = left + 1;
            let smaller_child =
                if right < self.heap.len() && self.heap[right].priority < self.heap[left].priority {
                    right
                } else {
                    left
                };

            if self.heap[smaller_child].priority >= self.heap[position].priority {
                break;
            }
            self.swap(position, smaller_child);
            position = smaller_child;
        }
    }
}

impl<K, P> MinQueue<K, P> for HeapMinQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord + Copy,
{
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn get(&self) -> Result<&K, QueueError> {
        self.peek().map(|(key, _)| key).ok_or(QueueError::Empty)
    }

    fn min_priority(&self) -> Result<P, QueueError> {
        self.peek().map(|(_, priority)| priority).ok_or(QueueError::Empty)
    }

    fn add_or_update(&mut self, key: K, priority: P) {
        if self.index.contains_key(&key) {
            self.update(&key, priority);
        } else {
            self.add(key, priority);
        }
    }

    fn remove(&mut self) -> Result<K, QueueError> {
        self.pop().map(|(key, _)| key).ok_or(QueueError::Empty)
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_signals_empty() {
        let mut queue: HeapMinQueue<&str, i32> = HeapMinQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.get(), Err(QueueError::Empty));
        assert_eq!(queue.min_priority(), Err(QueueError::Empty));
        assert_eq!(queue.remove(), Err(QueueError::Empty));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn decreased_priority_wins() {
        let mut queue = HeapMinQueue::new();
        queue.add_or_update("x", 5);
        queue.add_or_update("x", 1);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.min_priority(), Ok(1));
        assert_eq!(queue.pop(), Some(("x", 1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn increase_key_moves_element_down() {
        let mut queue = HeapMinQueue::new();
        for (key, priority) in [('a', 1), ('b', 2), ('c', 3), ('d', 4), ('e', 5)] {
            queue.add_or_update(key, priority);
        }

        queue.add_or_update('a', 10);
        assert!(queue.check_invariant());
        assert_eq!(queue.get(), Ok(&'b'));
        assert_eq!(queue.priority(&'a'), Some(10));

        let order = std::iter::from_fn(|| queue.remove().ok()).collect::<String>();
        assert_eq!(order, "bcdea");
    }

    #[test]
    fn update_to_same_priority_is_noop() {
        let mut queue = HeapMinQueue::new();
        queue.add_or_update(1u32, 3u64);
        queue.add_or_update(2, 1);
        queue.add_or_update(1, 3);

        assert!(queue.check_invariant());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((2, 1)));
        assert_eq!(queue.pop(), Some((1, 3)));
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = HeapMinQueue::new();
        (0..10u32).for_each(|key| queue.add_or_update(key, 10 - key));
        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.contains(&3));
        assert!(queue.check_invariant());

        queue.add_or_update(3, 7);
        assert_eq!(queue.peek(), Some((&3, 7)));
    }

    #[test]
    fn remove_reindexes_moved_root() {
        let mut queue = HeapMinQueue::new();
        (0..8u32).for_each(|key| queue.add_or_update(key, key as u64));

        assert_eq!(queue.remove(), Ok(0));
        assert!(queue.check_invariant());

        // 7 was moved to the root by the removal; it must still be updatable
        queue.add_or_update(7, 0);
        assert_eq!(queue.get(), Ok(&7));
    }
}
