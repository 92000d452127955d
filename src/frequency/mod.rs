//! Frequency-weighted statistics
//!
//! This module provides an exact multiplicity table for real-valued
//! observations and the aggregates derived from it.
//!
//! # Types
//!
//! - [`FrequencyTable`]: value → count map with weighted average, median,
//!   extrema and mode queries
//!
//! # Example
//!
//! ```
//! use weatherstats::frequency::FrequencyTable;
//!
//! let mut wind = FrequencyTable::new();
//!
//! wind.add(5.0);
//! wind.add(5.0);
//! wind.add(7.5);
//!
//! let (values, frequency) = wind.most_frequent().unwrap();
//! println!("Most frequent: {:?} ({} times)", values, frequency);
//! ```

mod table;

pub use table::FrequencyTable;
