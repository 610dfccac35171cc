//! A fixed-capacity concurrent hash map with one lock per bucket.
//!
//! [`HashMap`] maps `i32` keys to `i32` values. It is created with a fixed number of buckets and
//! never resizes. A key lives in bucket `key mod capacity`, in a singly-linked chain together with
//! every other key that maps to the same bucket.
//!
//! # Locking
//!
//! Each bucket has its own lock ("striped" locking), so threads that touch different buckets do
//! not block each other. An operation:
//!
//!  1. computes the bucket of its key,
//!  2. takes that bucket's lock, walks the chain, and releases the lock,
//!  3. then updates the map's size and profiling counters.
//!
//! No operation ever holds more than one bucket lock, and no operation holds a bucket lock while
//! touching the size or the counters. The only exception is [`HashMap::dump`], which locks every
//! bucket, always in ascending order, to produce a consistent picture of the map.
//!
//! # Profiling
//!
//! The map counts every operation it performs: gets, inserts of new keys, inserts that replaced a
//! value, and successful and failed removes. A snapshot of the counters is available through
//! [`HashMap::profile`], and [`HashMap::teardown`] emits the final summary as a `tracing` event.
//! The counters are updated in a single critical section per operation, so the total always
//! equals the sum of the categories.
//!
//! ```
//! use striped_hashmap::HashMap;
//!
//! let map = HashMap::with_capacity(4)?;
//! assert_eq!(map.insert(1, 100), None);
//! assert_eq!(map.insert(5, 200), None); // shares bucket 1 with key 1
//! assert_eq!(map.get(1), Some(100));
//! assert_eq!(map.remove(1), Some(100));
//! assert_eq!(map.get(1), None);
//!
//! let profile = map.teardown();
//! assert_eq!(profile.total_ops, 5);
//! assert_eq!(profile.size, 1);
//! # Ok::<(), striped_hashmap::Error>(())
//! ```
//!
//! # Negative keys
//!
//! Bucket indices are the euclidean remainder of the key, so they are never negative: with four
//! buckets, `-1` lives in bucket 3 and `-4` in bucket 0. See [`HashMap::bucket_of`].
#![deny(missing_docs, missing_debug_implementations)]
#![warn(rust_2018_idioms)]

mod counter;
mod dump;
mod error;
mod map;
mod node;
mod raw;

#[cfg(feature = "rayon")]
mod rayon_impls;

#[cfg(feature = "serde")]
mod serde_impls;

pub use counter::Profile;
pub use dump::Dump;
pub use error::{Error, Result};
pub use map::HashMap;
