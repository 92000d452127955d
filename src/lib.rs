//! # Weatherstats
//!
//! Frequency-weighted descriptive statistics for weather sensor logs.
//!
//! Weatherstats reads a whitespace-delimited log of environmental readings,
//! tracks air temperature, barometric pressure and wind speed, and reports
//! the average, median, extrema and most frequent value(s) of each.
//!
//! ## Features
//!
//! - **Exact frequency tables**: values are stored once with their
//!   multiplicity; every aggregate is derived from the counts
//! - **Weighted median**: computed by walking cumulative counts over the
//!   sorted distinct values instead of sorting the raw stream
//! - **All-ties mode**: every value sharing the highest count is reported
//! - **Mergeable**: tables implement [`Sketch`](traits::Sketch), so partial
//!   tables can be combined exactly
//!
//! ## Quick Start
//!
//! ```rust
//! use weatherstats::prelude::*;
//!
//! let mut pressure = FrequencyTable::new();
//! for reading in [30.5, 30.5, 30.4, 30.6] {
//!     pressure.add(reading);
//! }
//!
//! assert_eq!(pressure.median().unwrap(), 30.5);
//! assert_eq!(pressure.most_frequent().unwrap(), (vec![30.5], 2));
//! ```
//!
//! ## Ingesting a log
//!
//! ```rust
//! use weatherstats::ingest::IngestionPipeline;
//!
//! let log = "header\na b 10.0 1000.0 c d e f 5.0\na b 20.0 1010.0 c d e f 5.0\n";
//! let report = IngestionPipeline::new().run(log.as_bytes()).unwrap();
//!
//! assert_eq!(report.rows, 2);
//! assert_eq!(report.temperature.average, 15.0);
//! assert_eq!(report.wind_speed.most_frequent, vec![5.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for [`FrequencyTable`](frequency::FrequencyTable),
//!   [`Report`](ingest::Report) and [`ColumnSummary`](ingest::ColumnSummary)

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod traits;

pub mod frequency;

pub mod ingest;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::frequency::FrequencyTable;

    pub use crate::ingest::{ColumnSummary, Field, IngestError, IngestionPipeline, Report};
}

pub use frequency::FrequencyTable;

pub use ingest::{IngestError, IngestionPipeline, Report};

pub use traits::StatsError;
