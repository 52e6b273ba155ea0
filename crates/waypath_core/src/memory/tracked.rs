//! Containers that report the size of their buffers to an
//! [`AllocationTracker`].
//!
//! Every change of capacity is reported as an allocation of the new buffer
//! followed by the release of the old one, the way a reallocating allocator
//! behaves, so the peak includes the moment both buffers are alive. Hash
//! containers are accounted per slot with one extra control byte.

use std::{
    collections::VecDeque,
    hash::Hash,
    mem::size_of,
    ops::{Deref, DerefMut, Index},
};

use fxhash::{FxHashMap, FxHashSet};

use super::allocation_tracker::AllocationTracker;

struct Reservation<'t> {
    tracker: &'t AllocationTracker,
    bytes: usize,
}

impl<'t> Reservation<'t> {
    fn new(tracker: &'t AllocationTracker) -> Self {
        Reservation { tracker, bytes: 0 }
    }

    #[inline(always)]
    fn resize(&mut self, bytes: usize) {
        if bytes == self.bytes {
            return;
        }

        if bytes > 0 {
            self.tracker.alloc(bytes);
        }
        if self.bytes > 0 {
            self.tracker.free(self.bytes);
        }
        self.bytes = bytes;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if self.bytes > 0 {
            self.tracker.free(self.bytes);
        }
    }
}

#[inline(always)]
const fn slot_bytes<T>() -> usize {
    size_of::<T>() + 1
}

pub struct TrackedVec<'t, T> {
    inner: Vec<T>,
    reservation: Reservation<'t>,
}

impl<'t, T> TrackedVec<'t, T> {
    pub fn new(tracker: &'t AllocationTracker) -> Self {
        TrackedVec {
            inner: Vec::new(),
            reservation: Reservation::new(tracker),
        }
    }

    fn sync(&mut self) {
        self.reservation
            .resize(self.inner.capacity() * size_of::<T>());
    }

    pub fn push(&mut self, value: T) {
        self.inner.push(value);
        self.sync();
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }
}

impl<T> Deref for TrackedVec<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.inner
    }
}

impl<T> DerefMut for TrackedVec<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

pub struct TrackedDeque<'t, T> {
    inner: VecDeque<T>,
    reservation: Reservation<'t>,
}

impl<'t, T> TrackedDeque<'t, T> {
    pub fn new(tracker: &'t AllocationTracker) -> Self {
        TrackedDeque {
            inner: VecDeque::new(),
            reservation: Reservation::new(tracker),
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.inner.push_back(value);
        self.reservation
            .resize(self.inner.capacity() * size_of::<T>());
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

pub struct TrackedMap<'t, K, V> {
    inner: FxHashMap<K, V>,
    reservation: Reservation<'t>,
}

impl<'t, K, V> TrackedMap<'t, K, V>
where
    K: Eq + Hash,
{
    pub fn new(tracker: &'t AllocationTracker) -> Self {
        TrackedMap {
            inner: FxHashMap::default(),
            reservation: Reservation::new(tracker),
        }
    }

    fn sync(&mut self) {
        self.reservation
            .resize(self.inner.capacity() * slot_bytes::<(K, V)>());
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.inner.insert(key, value);
        self.sync();
        previous
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> Index<&K> for TrackedMap<'_, K, V>
where
    K: Eq + Hash,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        &self.inner[key]
    }
}

pub struct TrackedSet<'t, K> {
    inner: FxHashSet<K>,
    reservation: Reservation<'t>,
}

impl<'t, K> TrackedSet<'t, K>
where
    K: Eq + Hash,
{
    pub fn new(tracker: &'t AllocationTracker) -> Self {
        TrackedSet {
            inner: FxHashSet::default(),
            reservation: Reservation::new(tracker),
        }
    }

    /// Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: K) -> bool {
        let inserted = self.inner.insert(value);
        self.reservation
            .resize(self.inner.capacity() * slot_bytes::<K>());
        inserted
    }

    pub fn contains(&self, value: &K) -> bool {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_growth_is_reported_as_realloc() {
        let tracker = AllocationTracker::new();
        {
            let mut vec: TrackedVec<u64> = TrackedVec::new(&tracker);
            for i in 0..100 {
                vec.push(i);
                let statistics = tracker.statistics();
                assert_eq!(statistics.current_allocated, vec.inner.capacity() * 8);
                assert!(statistics.peak_allocated >= statistics.current_allocated);
            }
        }

        let statistics = tracker.statistics();
        assert_eq!(statistics.current_allocated, 0);
        assert!(statistics.total_allocated >= statistics.peak_allocated);
        assert!(statistics.peak_allocated >= 100 * 8);
    }

    #[test]
    fn deque_released_on_drop() {
        let tracker = AllocationTracker::new();
        {
            let mut deque = TrackedDeque::new(&tracker);
            deque.push_back(1_u32);
            deque.push_back(2);
            assert_eq!(deque.pop_front(), Some(1));
            assert!(tracker.statistics().current_allocated > 0);
        }
        assert_eq!(tracker.statistics().current_allocated, 0);
    }

    #[test]
    fn map_accounts_slots() {
        let tracker = AllocationTracker::new();
        let mut map = TrackedMap::new(&tracker);
        for i in 0..50_usize {
            map.insert(i, i * 2);
        }

        assert_eq!(map[&10], 20);
        assert_eq!(
            tracker.statistics().current_allocated,
            map.inner.capacity() * slot_bytes::<(usize, usize)>()
        );
        drop(map);
        assert_eq!(tracker.statistics().current_allocated, 0);
    }

    #[test]
    fn set_insert_reports_novelty() {
        let tracker = AllocationTracker::new();
        let mut set = TrackedSet::new(&tracker);

        assert!(set.insert(3_usize));
        assert!(!set.insert(3));
        assert!(set.contains(&3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn containers_share_a_tracker() {
        let tracker = AllocationTracker::new();
        let mut vec = TrackedVec::new(&tracker);
        let mut set = TrackedSet::new(&tracker);
        vec.push(1_u8);
        set.insert(1_u8);

        let vec_bytes = vec.inner.capacity();
        let set_bytes = set.inner.capacity() * slot_bytes::<u8>();
        assert_eq!(tracker.statistics().current_allocated, vec_bytes + set_bytes);
    }
}
