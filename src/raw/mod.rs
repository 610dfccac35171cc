use crate::error::{Error, Result};
use crate::node::Bin;
use parking_lot::{Mutex, MutexGuard};

/// The fixed array of buckets.
///
/// Every bucket carries its own lock, so lock `i` and bucket `i` are the same slot and can never
/// drift out of alignment. Operations take at most one bucket lock at a time; the only place that
/// holds several is [`Table::lock_all`], which always goes in ascending index order.
#[derive(Debug)]
pub(crate) struct Table {
    bins: Box<[Mutex<Bin>]>,
}

impl Table {
    pub(crate) fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let mut bins = Vec::new();
        bins.try_reserve_exact(capacity)
            .map_err(|source| Error::Allocation { capacity, source })?;
        bins.extend((0..capacity).map(|_| Mutex::new(Bin::new())));

        Ok(Self {
            bins: bins.into_boxed_slice(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.bins.len()
    }

    /// Index of the bucket responsible for `key`.
    ///
    /// This is the euclidean remainder of `key` by the number of buckets, so negative keys land
    /// in `0..len` as well: with four buckets, `-1` goes to bucket 3 and `-4` to bucket 0.
    #[inline]
    pub(crate) fn bini(&self, key: i32) -> usize {
        // the widening makes every usize length representable as a positive divisor
        i128::from(key).rem_euclid(self.bins.len() as i128) as usize
    }

    #[inline]
    pub(crate) fn bin(&self, i: usize) -> &Mutex<Bin> {
        &self.bins[i]
    }

    /// Locks every bucket, lowest index first.
    pub(crate) fn lock_all(&self) -> Vec<MutexGuard<'_, Bin>> {
        self.bins.iter().map(Mutex::lock).collect()
    }

    /// Locks buckets one at a time, handing each to `f` before moving on to the next.
    pub(crate) fn for_each_bin<F>(&self, mut f: F)
    where
        F: FnMut(&Bin),
    {
        for bin in self.bins.iter() {
            f(&bin.lock());
        }
    }
}
