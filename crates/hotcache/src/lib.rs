//! # hotcache
//!
//! In-memory LRU cache for bounding the memory of a hot working set.
//!
//! ## Architecture
//! - **Key index**: AHash-backed `HashMap` for O(1) lookups
//! - **Recency list**: arena-backed doubly-linked list for O(1) promotion
//!   and eviction, most-recently-used at the head
//! - **Slot reuse**: freed arena slots are recycled, so a bounded cache
//!   never holds more than `capacity` slots
//!
//! Every operation — [`LruCache::get`], [`LruCache::put`],
//! [`LruCache::contains`], [`LruCache::remove`] — runs in O(1) amortized
//! time. Lookups, inserts *and membership checks* all count as a use and
//! refresh the entry's recency.
//!
//! The cache is single-threaded by design: every operation takes `&mut self`
//! and completes synchronously, with no internal locking. Callers sharing a
//! cache across threads wrap it in an exclusive lock (e.g.
//! `parking_lot::Mutex`) around every call.
//!
//! ## Example
//! ```
//! use hotcache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");   // "a" is now most recently used
//! cache.put("c", 3); // evicts "b", the least recently used
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.len(), 2);
//! ```

#![warn(missing_docs)]

mod lru;

pub use lru::{LruCache, DEFAULT_CAPACITY};
