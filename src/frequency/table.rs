//! Exact frequency table over real-valued observations
//!
//! Stores each distinct value once together with the number of times it was
//! observed. Every aggregate is derived from those multiplicities, so the
//! memory footprint is proportional to the number of distinct readings rather
//! than the number of rows.

use crate::traits::{Sketch, StatsError};
use log::warn;
use std::collections::HashMap;
use xxhash_rust::xxh3::Xxh3Builder;

/// Map key for an observed value
///
/// Values are keyed by their bit pattern after folding `-0.0` onto `0.0`,
/// so equal finite readings always land on the same entry.
#[inline]
fn key_of(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Multiplicity-weighted set of real observations
///
/// A `FrequencyTable` answers the usual descriptive statistics (weighted
/// average, median, extrema and mode) without ever keeping the raw stream.
/// The median is computed over the *expanded* sequence, i.e. every value
/// repeated as often as it was observed, by walking cumulative counts over
/// the sorted distinct values.
///
/// # Example
///
/// ```
/// use weatherstats::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
///
/// for value in [3.0, 1.0, 3.0, 2.0, 3.0, 1.0] {
///     table.add(value);
/// }
///
/// assert_eq!(table.total_count(), 6);
/// assert_eq!(table.distinct_len(), 3);
/// assert!((table.average().unwrap() - 13.0 / 6.0).abs() < 1e-12);
/// assert_eq!(table.median().unwrap(), 2.5);
/// assert_eq!(table.low_high().unwrap(), (1.0, 3.0));
/// assert_eq!(table.most_frequent().unwrap(), (vec![3.0], 3));
/// ```
///
/// Ties for the highest count are all reported:
///
/// ```
/// use weatherstats::frequency::FrequencyTable;
///
/// let table: FrequencyTable = [20.0, 10.0, 20.0, 10.0, 5.0].into_iter().collect();
/// assert_eq!(table.most_frequent().unwrap(), (vec![10.0, 20.0], 2));
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    /// Map from value bits to occurrence count (always >= 1)
    counts: HashMap<u64, u64, Xxh3Builder>,
    /// Sum of all counts
    total: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            counts: HashMap::with_hasher(Xxh3Builder::new()),
            total: 0,
        }
    }

    /// Record one observation of `value`
    ///
    /// NaN is not an observable reading and is ignored. A table that already
    /// holds `u64::MAX` observations drops the reading and logs a warning.
    pub fn add(&mut self, value: f64) {
        if let Err(err) = self.add_count(value, 1) {
            warn!("dropping reading {}: {}", value, err);
        }
    }

    /// Record `count` observations of `value` at once
    ///
    /// Equivalent to calling [`add`](Self::add) `count` times. Fails with
    /// [`StatsError::CountOverflow`] if the total would exceed `u64::MAX`;
    /// the table is unchanged in that case.
    pub fn add_count(&mut self, value: f64, count: u64) -> Result<(), StatsError> {
        if value.is_nan() || count == 0 {
            return Ok(());
        }
        let total = self
            .total
            .checked_add(count)
            .ok_or(StatsError::CountOverflow {
                total: self.total,
                requested: count,
            })?;

        // Each count is bounded by the total, so it cannot overflow either.
        *self.counts.entry(key_of(value)).or_insert(0) += count;
        self.total = total;
        Ok(())
    }

    /// Total number of observations (sum of all counts)
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct values observed
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no observations were recorded
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of times `value` was observed
    pub fn frequency(&self, value: f64) -> u64 {
        self.counts.get(&key_of(value)).copied().unwrap_or(0)
    }

    /// Iterate over `(value, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts
            .iter()
            .map(|(&bits, &count)| (f64::from_bits(bits), count))
    }

    /// Distinct values with their counts, ascending by value
    fn sorted_entries(&self) -> Vec<(f64, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
        entries
    }

    /// The expanded sequence: every value repeated by its count, ascending
    pub fn expanded(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.total as usize);
        for (value, count) in self.sorted_entries() {
            values.extend(core::iter::repeat(value).take(count as usize));
        }
        values
    }

    /// Weighted mean: `Σ(value × count) / Σ count`
    pub fn average(&self) -> Result<f64, StatsError> {
        if self.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        // Summed in value order so the result does not depend on hash order.
        let sum: f64 = self
            .sorted_entries()
            .iter()
            .map(|&(value, count)| value * count as f64)
            .sum();
        Ok(sum / self.total as f64)
    }

    /// Median of the expanded sequence
    ///
    /// Sorts the distinct values once and walks the cumulative counts to the
    /// middle position(s). For an even total the two middle elements are
    /// averaged.
    pub fn median(&self) -> Result<f64, StatsError> {
        if self.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let entries = self.sorted_entries();
        let upper_rank = self.total / 2;
        let lower_rank = if self.total % 2 == 0 {
            upper_rank - 1
        } else {
            upper_rank
        };

        let mut lower = None;
        let mut seen = 0u64;
        for (value, count) in entries {
            seen += count;
            if lower.is_none() && lower_rank < seen {
                lower = Some(value);
            }
            if upper_rank < seen {
                // lower_rank <= upper_rank, so lower is set by now
                let lower = lower.unwrap_or(value);
                return Ok(if lower_rank == upper_rank {
                    value
                } else {
                    (lower + value) / 2.0
                });
            }
        }

        // Counts always sum to total, so the walk returns above.
        Err(StatsError::EmptyInput)
    }

    /// Median computed by materializing and sorting the expanded sequence
    ///
    /// O(n log n) in the number of observations. Kept as the reference for
    /// [`median`](Self::median); both return identical results.
    pub fn median_expanded(&self) -> Result<f64, StatsError> {
        let mut values: Vec<f64> = Vec::with_capacity(self.total as usize);
        for (value, count) in self.iter() {
            values.extend(core::iter::repeat(value).take(count as usize));
        }
        if values.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        values.sort_unstable_by(|a, b| a.total_cmp(b));

        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Ok((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Ok(values[mid])
        }
    }

    /// Smallest and largest distinct value
    ///
    /// Counts play no role: a value seen once still defines the extremum.
    pub fn low_high(&self) -> Result<(f64, f64), StatsError> {
        self.iter()
            .map(|(value, _)| value)
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
            .ok_or(StatsError::EmptyInput)
    }

    /// All values sharing the highest count, ascending, with that count
    ///
    /// When several values tie for the highest count every one of them is
    /// returned; no single winner is picked.
    pub fn most_frequent(&self) -> Result<(Vec<f64>, u64), StatsError> {
        let top = self
            .counts
            .values()
            .copied()
            .max()
            .ok_or(StatsError::EmptyInput)?;

        let mut values: Vec<f64> = self
            .iter()
            .filter(|&(_, count)| count == top)
            .map(|(value, _)| value)
            .collect();
        values.sort_unstable_by(|a, b| a.total_cmp(b));

        Ok((values, top))
    }
}

impl Sketch for FrequencyTable {
    type Item = f64;

    fn update(&mut self, item: &f64) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) -> Result<(), StatsError> {
        // Checked up front so a failed merge leaves `self` untouched.
        if self.total.checked_add(other.total).is_none() {
            return Err(StatsError::CountOverflow {
                total: self.total,
                requested: other.total,
            });
        }

        self.counts.reserve(other.counts.len());
        for (value, count) in other.iter() {
            self.add_count(value, count)?;
        }
        Ok(())
    }

    fn count(&self) -> u64 {
        self.total
    }
}

impl FromIterator<f64> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<f64> for FrequencyTable {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for FrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let entries = self.sorted_entries();

        let mut state = serializer.serialize_struct("FrequencyTable", 2)?;
        state.serialize_field("total_count", &self.total)?;
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}
