use std::hash::Hash;

use thiserror::Error;

use crate::memory::{
    allocation_tracker::AllocationTracker,
    tracked::{TrackedMap, TrackedVec},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("Element already exists in the priority queue")]
    ElementAlreadyExists,
}

/// Binary min-heap with an index of every key's heap position, which makes
/// `decrease_key` and `contains` cheap.
///
/// Elements with equal priorities come out in an order that depends on the
/// heap layout only.
pub struct PriorityQueue<'t, K, P> {
    heap: TrackedVec<'t, (K, P)>,
    positions: TrackedMap<'t, K, usize>,
}

impl<'t, K, P> PriorityQueue<'t, K, P>
where
    K: Copy + Eq + Hash,
    P: Ord + Copy,
{
    pub fn new(tracker: &'t AllocationTracker) -> Self {
        PriorityQueue {
            heap: TrackedVec::new(tracker),
            positions: TrackedMap::new(tracker),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.positions.contains_key(&key)
    }

    pub fn priority(&self, key: K) -> Option<P> {
        self.positions
            .get(&key)
            .map(|&position| self.heap[position].1)
    }

    pub fn peek(&self) -> Option<&(K, P)> {
        self.heap.first()
    }

    pub fn insert(&mut self, key: K, priority: P) -> Result<(), PriorityQueueError> {
        if self.contains(key) {
            return Err(PriorityQueueError::ElementAlreadyExists);
        }

        let position = self.heap.len();
        self.heap.push((key, priority));
        self.positions.insert(key, position);
        self.sift_up(position);

        Ok(())
    }

    /// Removes and returns the element with the smallest priority.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let (key, priority) = self.heap.pop()?;
        self.positions.remove(&key);

        if !self.heap.is_empty() {
            // The last element became the root
            self.positions.insert(self.heap[0].0, 0);
            self.sift_down(0);
        }

        Some((key, priority))
    }

    /// Lowers the priority of `key`, inserting it when absent.
    ///
    /// Returns `false` without touching the queue when `priority` is not
    /// strictly lower than the current one.
    pub fn decrease_key(&mut self, key: K, priority: P) -> bool {
        let Some(&position) = self.positions.get(&key) else {
            return self.insert(key, priority).is_ok();
        };

        if priority >= self.heap[position].1 {
            return false;
        }

        self.heap[position].1 = priority;
        self.sift_up(position);
        true
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        let priority = self.heap[index].1;

        while index > 0 {
            let parent_index = (index - 1) / 2;
            if priority >= self.heap[parent_index].1 {
                break;
            }

            self.heap.swap(index, parent_index);

            // The previous parent moved down
            self.positions.insert(self.heap[index].0, index);

            index = parent_index;
        }

        self.positions.insert(self.heap[index].0, index);
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.heap.len();
        let mut index = element_index;
        let priority = self.heap[index].1;

        while 2 * index + 1 < size {
            let left_child_index = 2 * index + 1;
            let right_child_index = left_child_index + 1;

            let mut child_index = left_child_index;
            if right_child_index < size
                && self.heap[right_child_index].1 < self.heap[left_child_index].1
            {
                child_index = right_child_index;
            }

            if priority <= self.heap[child_index].1 {
                break;
            }

            self.heap.swap(index, child_index);

            // The previous child moved up
            self.positions.insert(self.heap[index].0, index);

            index = child_index;
        }

        self.positions.insert(self.heap[index].0, index);
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        for (position, (key, priority)) in self.heap.iter().enumerate() {
            assert_eq!(self.positions.get(key), Some(&position));
            if position > 0 {
                assert!(self.heap[(position - 1) / 2].1 <= *priority);
            }
        }
        assert_eq!(self.positions.len(), self.heap.len());
    }
}
