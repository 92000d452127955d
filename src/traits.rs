//! Core traits and error types for the statistics engine
//!
//! Accumulators implement the base [`Sketch`] trait. Accumulators are
//! append-only: observations can be added or merged in, never removed.
//! Aggregate queries that have no meaning on an empty accumulator report
//! [`StatsError`].

use core::fmt::Debug;

use thiserror::Error;

/// Error from an accumulator update or aggregate query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The query needs at least one observation, but none were recorded
    #[error("no observations recorded; statistics are undefined for empty input")]
    EmptyInput,
    /// Recording the observations would overflow the `u64` total count
    #[error("observation count overflow: {total} recorded, cannot add {requested} more")]
    CountOverflow {
        /// Observations already recorded
        total: u64,
        /// Observations that were rejected
        requested: u64,
    },
}

/// Core trait for all accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// On success the result is identical to having updated `self` with
    /// every item `other` has seen. On error `self` is left unchanged.
    fn merge(&mut self, other: &Self) -> Result<(), StatsError>;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
