//! LRU (Least Recently Used) cache implementation
//!
//! Uses an arena-backed intrusive linked list for O(1) promotion and
//! eviction: entries live in `Vec` slots and `prev`/`next` are slot indices,
//! not pointers.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::debug;

/// Capacity of a default-constructed [`LruCache`].
pub const DEFAULT_CAPACITY: usize = 512;

/// Node in the LRU doubly-linked list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with an optional capacity bound.
///
/// A bounded cache never holds more than `capacity` entries: inserting a new
/// key into a full cache first evicts the least-recently-used entry. An
/// unbounded cache (capacity zero, or [`LruCache::unbounded`]) never evicts.
///
/// Reads promote: `get`, `put` and `contains` all move the touched entry to
/// the most-recently-used position.
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: Option<usize>,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries.
    ///
    /// A capacity of zero disables eviction entirely, same as
    /// [`LruCache::unbounded`].
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            debug!("created unbounded LRU cache");
        } else {
            debug!("created LRU cache with capacity {}", capacity);
        }

        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity: if capacity == 0 { None } else { Some(capacity) },
        }
    }

    /// Create a cache that never evicts.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Get a value from the cache.
    ///
    /// A hit promotes the entry to most-recently-used. Returns `None` only
    /// when `key` is absent; a stored empty-like value (say, a `None` of a
    /// `V = Option<T>`) still comes back as `Some(&value)`.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&idx) = self.map.get(key) {
            self.move_to_front(idx);
            self.nodes[idx].as_ref().map(|node| &node.value)
        } else {
            None
        }
    }

    /// Insert a key-value pair into the cache.
    ///
    /// The entry becomes most-recently-used. Re-inserting an existing key
    /// replaces its value and never evicts. Inserting a new key into a full
    /// bounded cache first evicts the least-recently-used entry — exactly
    /// one — so the write itself is never rejected.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            // Replace in place, then promote
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
        } else {
            if let Some(capacity) = self.capacity {
                if self.map.len() >= capacity {
                    self.evict();
                }
            }

            let idx = self.alloc_node();
            self.nodes[idx] = Some(Node {
                key: key.clone(),
                value,
                prev: None,
                next: None,
            });
            self.push_front(idx);
            self.map.insert(key, idx);
        }
    }

    /// Check whether `key` is present.
    ///
    /// A membership check counts as a use: unlike `HashMap::contains_key`,
    /// a present key is promoted to most-recently-used (hence `&mut self`).
    pub fn contains(&mut self, key: &K) -> bool {
        if let Some(&idx) = self.map.get(key) {
            self.move_to_front(idx);
            true
        } else {
            false
        }
    }

    /// Remove a key from the cache, returning its value.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if let Some(idx) = self.map.remove(key) {
            self.unlink(idx);
            self.free_node(idx);
            self.nodes[idx].take().map(|node| node.value)
        } else {
            None
        }
    }

    /// Get the current number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the capacity bound, or `None` for an unbounded cache.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head) = &mut self.nodes[head_idx] {
                    head.prev = Some(idx);
                }
            }
            None => {
                // List was empty; this entry is also the tail
                self.tail = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    /// Splice a node out of the list. Must run while the slot is still
    /// occupied; the node's own links are overwritten by the next
    /// `push_front`.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn evict(&mut self) {
        if let Some(tail_idx) = self.tail {
            debug!("cache full, evicting least recently used entry");
            self.unlink(tail_idx);
            self.free_node(tail_idx);
            if let Some(node) = self.nodes[tail_idx].take() {
                self.map.remove(&node.key);
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
