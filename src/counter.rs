use std::fmt::{self, Display, Formatter};

const RULE: &str = "-----------------------------------------------";

/// The kind of operation that finished, for the profiling counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Get,
    PutAdd,
    PutReplace,
    DelSuccess,
    DelFailure,
}

/// Operation counters.
///
/// These live behind a single lock in the map, and [`Counters::record`] bumps `total_ops` together
/// with the category counter, so `total_ops` is always the sum of the five categories.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    total_ops: u64,
    gets: u64,
    put_adds: u64,
    put_replaces: u64,
    del_success: u64,
    del_failure: u64,
}

impl Counters {
    pub(crate) fn record(&mut self, op: Op) {
        self.total_ops += 1;
        match op {
            Op::Get => self.gets += 1,
            Op::PutAdd => self.put_adds += 1,
            Op::PutReplace => self.put_replaces += 1,
            Op::DelSuccess => self.del_success += 1,
            Op::DelFailure => self.del_failure += 1,
        }
    }
}

/// A snapshot of a map's operation counters and size.
///
/// The `Display` implementation renders the profiling summary that
/// [`HashMap::teardown`](crate::HashMap::teardown) emits:
///
/// ```text
/// -----------------------------------------------
/// Profiling Run:
///   gets      = 2 (50%)
///   put adds  = 1 (25%)
///   put reps  = 0 (0%)
///   del succ  = 1 (25%)
///   del fail  = 0 (0%)
///   total ops = 4
///   map size  = 0
/// -----------------------------------------------
/// ```
///
/// Percentages of an empty run are shown as `n/a`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    /// Lookups, successful or not.
    pub gets: u64,
    /// Inserts of keys that were not yet in the map.
    pub put_adds: u64,
    /// Inserts that replaced the value of an existing key.
    pub put_replaces: u64,
    /// Removals that found their key.
    pub del_success: u64,
    /// Removals of keys that were not in the map.
    pub del_failure: u64,
    /// All of the above.
    pub total_ops: u64,
    /// Number of entries in the map.
    pub size: usize,
}

impl Profile {
    pub(crate) fn new(counters: Counters, size: usize) -> Self {
        Self {
            gets: counters.gets,
            put_adds: counters.put_adds,
            put_replaces: counters.put_replaces,
            del_success: counters.del_success,
            del_failure: counters.del_failure,
            total_ops: counters.total_ops,
            size,
        }
    }

    /// `count` as a percentage of [`Profile::total_ops`].
    ///
    /// Returns `None` if no operations were recorded.
    pub fn percent(&self, count: u64) -> Option<f64> {
        if self.total_ops == 0 {
            None
        } else {
            Some(count as f64 * 100.0 / self.total_ops as f64)
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Profiling Run:")?;
        for (label, count) in [
            ("gets", self.gets),
            ("put adds", self.put_adds),
            ("put reps", self.put_replaces),
            ("del succ", self.del_success),
            ("del fail", self.del_failure),
        ] {
            match self.percent(count) {
                Some(p) => writeln!(f, "  {:<9} = {} ({:.0}%)", label, count, p)?,
                None => writeln!(f, "  {:<9} = {} (n/a)", label, count)?,
            }
        }
        writeln!(f, "  total ops = {}", self.total_ops)?;
        writeln!(f, "  map size  = {}", self.size)?;
        write!(f, "{}", RULE)
    }
}
