use std::fmt::{self, Display, Formatter};

/// The contents of every bucket of a map, in bucket order.
///
/// Produced by [`HashMap::dump`](crate::HashMap::dump) and
/// [`HashMap::dump_relaxed`](crate::HashMap::dump_relaxed). Entries within a bucket appear in chain
/// order. Displaying a `Dump` prints one line per bucket:
///
/// ```text
/// [0] ->
/// [1] -> (1,100) -> (5,200)
/// [2] ->
/// [3] -> (-1,7)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dump {
    buckets: Vec<Vec<(i32, i32)>>,
}

impl Dump {
    pub(crate) fn with_buckets(n: usize) -> Self {
        Self {
            buckets: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push_bucket<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.buckets.push(entries.into_iter().collect());
    }

    /// All buckets, indexed like the map they came from.
    pub fn buckets(&self) -> &[Vec<(i32, i32)>] {
        &self.buckets
    }

    /// The entries of bucket `i`, or `None` if there is no such bucket.
    pub fn bucket(&self, i: usize) -> Option<&[(i32, i32)]> {
        self.buckets.get(i).map(Vec::as_slice)
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no bucket holds an entry.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Every entry, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.buckets.iter().flatten().copied()
    }
}

impl Display for Dump {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "[{}] -> ", i)?;
            for (j, (k, v)) in bucket.iter().enumerate() {
                if j != 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "({},{})", k, v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
