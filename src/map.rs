use crate::counter::{Counters, Op, Profile};
use crate::dump::Dump;
use crate::error::Result;
use crate::raw::Table;
use parking_lot::Mutex;
use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicIsize, Ordering};
use tracing::{debug, info, trace};

/// A fixed-capacity concurrent map from `i32` keys to `i32` values.
///
/// Keys are spread over `capacity` buckets by `key mod capacity` (see [`HashMap::bucket_of`]), and
/// each bucket has its own lock. Operations on different buckets never wait on each other;
/// operations on the same bucket are serialized by its lock. An operation holds at most one
/// bucket lock, and it updates the size and the profiling counters only after that lock has been
/// released.
///
/// The map is meant to be shared by reference, typically through an [`Arc`](std::sync::Arc):
///
/// ```
/// use striped_hashmap::HashMap;
/// use std::sync::Arc;
/// use std::thread;
///
/// let map = Arc::new(HashMap::with_capacity(16)?);
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let map = Arc::clone(&map);
///         thread::spawn(move || {
///             for k in (t * 100)..(t * 100 + 100) {
///                 map.insert(k, k);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(map.len(), 400);
/// # Ok::<(), striped_hashmap::Error>(())
/// ```
pub struct HashMap {
    /// The buckets and their locks. Never resized.
    table: Table,

    /// Number of live entries. Only touched with no bucket lock held.
    ///
    /// Signed, since a remove may settle its decrement before the insert it undid has settled its
    /// increment.
    count: AtomicIsize,

    /// Profiling counters. Only touched with no bucket lock held.
    counters: Mutex<Counters>,
}

impl HashMap {
    /// Creates an empty map with `capacity` buckets.
    ///
    /// The number of buckets is fixed for the lifetime of the map. It bounds nothing; it only
    /// decides how many keys share a chain and a lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`](crate::Error::ZeroCapacity) if `capacity` is 0, and
    /// [`Error::Allocation`](crate::Error::Allocation) if the buckets cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::{Error, HashMap};
    ///
    /// let map = HashMap::with_capacity(4)?;
    /// assert_eq!(map.capacity(), 4);
    /// assert_eq!(HashMap::with_capacity(0).unwrap_err(), Error::ZeroCapacity);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let table = Table::new(capacity)?;
        debug!(capacity, "created map");
        Ok(Self {
            table,
            count: AtomicIsize::new(0),
            counters: Mutex::new(Counters::default()),
        })
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Returns the index of the bucket that holds `key`.
    ///
    /// This is the euclidean remainder of `key` by [`HashMap::capacity`], which is never negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(4)?;
    /// assert_eq!(map.bucket_of(5), 1);
    /// assert_eq!(map.bucket_of(-1), 3);
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn bucket_of(&self, key: i32) -> usize {
        self.table.bini(key)
    }

    /// Returns the number of entries in the map.
    ///
    /// While other threads are modifying the map this may briefly lag behind the contents of the
    /// buckets.
    pub fn len(&self) -> usize {
        let n = self.count.load(Ordering::Relaxed);
        if n < 0 {
            0
        } else {
            n as usize
        }
    }

    /// Returns `true` if the map is empty. Otherwise returns `false`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, op: Op) {
        self.counters.lock().record(op);
    }

    /// Returns the value mapped to `key`.
    ///
    /// Counts as a get in the profiling counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(8)?;
    /// map.insert(1, 100);
    /// assert_eq!(map.get(1), Some(100));
    /// assert_eq!(map.get(2), None);
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn get(&self, key: i32) -> Option<i32> {
        let bini = self.table.bini(key);
        let value = self.table.bin(bini).lock().find(key);

        self.record(Op::Get);
        trace!(key, bin = bini, found = value.is_some(), "get");
        value
    }

    /// Returns `true` if the map contains a value for `key`.
    ///
    /// Counts as a get in the profiling counters.
    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Maps `key` to `value`.
    ///
    /// If the map did not have this key present, [`None`] is returned. If it did, the value is
    /// overwritten in place and the old value is returned. Counts as a put add or a put replace
    /// respectively.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(8)?;
    /// assert_eq!(map.insert(37, 1), None);
    /// assert_eq!(map.insert(37, 2), Some(1));
    /// assert_eq!(map.get(37), Some(2));
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn insert(&self, key: i32, value: i32) -> Option<i32> {
        let bini = self.table.bini(key);
        let old = self.table.bin(bini).lock().put(key, value);

        // the bucket lock is released by now
        if old.is_none() {
            self.count.fetch_add(1, Ordering::Relaxed);
            self.record(Op::PutAdd);
        } else {
            self.record(Op::PutReplace);
        }
        trace!(key, bin = bini, replaced = old.is_some(), "insert");
        old
    }

    /// Removes `key` from the map, returning the value it was mapped to.
    ///
    /// Removing a key that is not in the map returns [`None`] and leaves the map unchanged.
    /// Counts as a successful or failed delete respectively.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(8)?;
    /// map.insert(1, 10);
    /// assert_eq!(map.remove(1), Some(10));
    /// assert_eq!(map.remove(1), None);
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn remove(&self, key: i32) -> Option<i32> {
        let bini = self.table.bini(key);
        let removed = self.table.bin(bini).lock().remove(key);

        // the bucket lock is released by now
        if removed.is_some() {
            self.count.fetch_sub(1, Ordering::Relaxed);
            self.record(Op::DelSuccess);
        } else {
            self.record(Op::DelFailure);
        }
        trace!(key, bin = bini, found = removed.is_some(), "remove");
        removed
    }

    /// Returns a snapshot of the profiling counters and the current size.
    ///
    /// The counters are read under their own lock, so `total_ops` always matches the sum of the
    /// categories. The size is read separately and is exact once no operation is in flight.
    pub fn profile(&self) -> Profile {
        let counters = *self.counters.lock();
        Profile::new(counters, self.len())
    }

    /// Returns the contents of every bucket as of a single instant.
    ///
    /// All bucket locks are taken in ascending order before anything is read, so concurrent
    /// modifications are either fully visible or not at all. Every operation on the map blocks
    /// until the dump has been taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(4)?;
    /// map.insert(1, 100);
    /// map.insert(5, 200);
    /// assert_eq!(map.dump().to_string(), "[0] -> \n[1] -> (1,100) -> (5,200)\n[2] -> \n[3] -> \n");
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn dump(&self) -> Dump {
        let bins = self.table.lock_all();
        let mut dump = Dump::with_buckets(bins.len());
        for bin in &bins {
            dump.push_bucket(bin.iter());
        }
        dump
    }

    /// Returns the contents of every bucket, locking only one bucket at a time.
    ///
    /// Each bucket is internally consistent, but different buckets may be read at different
    /// instants while other threads are modifying the map. Meant for debugging output where
    /// stalling the whole map for [`HashMap::dump`] is undesirable.
    pub fn dump_relaxed(&self) -> Dump {
        let mut dump = Dump::with_buckets(self.capacity());
        self.table.for_each_bin(|bin| dump.push_bucket(bin.iter()));
        dump
    }

    /// Tears the map down, returning its final profile.
    ///
    /// The profiling summary is emitted as an `info` event before every entry and lock is
    /// released. To tear down a map that may already be gone, keep it in an `Option` and use
    /// `map.take().map(HashMap::teardown)`, which does nothing for `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use striped_hashmap::HashMap;
    ///
    /// let map = HashMap::with_capacity(4)?;
    /// map.insert(1, 1);
    /// map.get(1);
    /// let profile = map.teardown();
    /// assert_eq!(profile.total_ops, 2);
    /// assert_eq!(profile.size, 1);
    /// # Ok::<(), striped_hashmap::Error>(())
    /// ```
    pub fn teardown(self) -> Profile {
        let profile = self.profile();
        info!(
            total_ops = profile.total_ops,
            size = profile.size,
            "profiling run\n{}",
            profile
        );

        let capacity = self.capacity();
        drop(self);
        debug!(capacity, "tore down map");
        profile
    }
}

impl Debug for HashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.dump().iter()).finish()
    }
}

impl Extend<(i32, i32)> for &HashMap {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> Extend<(&'a i32, &'a i32)> for &HashMap {
    fn extend<T: IntoIterator<Item = (&'a i32, &'a i32)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl Extend<(i32, i32)> for HashMap {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, iter: T) {
        let mut map: &HashMap = self;
        map.extend(iter);
    }
}
