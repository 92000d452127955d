//! Sensor log ingestion
//!
//! This module turns a whitespace-delimited weather log into a [`Report`]:
//! one [`FrequencyTable`](crate::frequency::FrequencyTable) per tracked
//! field, filled row by row and summarized once the source is exhausted.
//!
//! # Example
//!
//! ```no_run
//! use weatherstats::ingest::IngestionPipeline;
//!
//! let report = IngestionPipeline::new()
//!     .run_path("Environmental_Data_Deep_Moor_2015.txt")
//!     .unwrap();
//!
//! println!("{}", report);
//! ```

mod config;
mod error;
mod pipeline;
mod report;

pub use config::{Field, PipelineConfig};
pub use error::IngestError;
pub use pipeline::{timed, IngestionPipeline};
pub use report::{ColumnSummary, Report};
