use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while setting up a [`HashMap`](crate::HashMap).
///
/// Looking up or removing a key that is not in the map is not an error; those operations return
/// `None` instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The map was asked for zero buckets.
    #[error("a map needs at least one bucket")]
    ZeroCapacity,

    /// The bucket array could not be allocated.
    #[error("failed to allocate {capacity} buckets")]
    Allocation {
        /// The number of buckets that was requested.
        capacity: usize,
        /// Why the allocation failed.
        #[source]
        source: TryReserveError,
    },
}

/// A `Result` whose error type defaults to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
