//! Row-by-row ingestion of a sensor log into per-column frequency tables

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;

use crate::frequency::FrequencyTable;
use crate::ingest::{ColumnSummary, Field, IngestError, PipelineConfig, Report};

/// One table per tracked field, owned by a single run
#[derive(Debug, Default)]
struct ColumnTables {
    temperature: FrequencyTable,
    pressure: FrequencyTable,
    wind_speed: FrequencyTable,
}

impl ColumnTables {
    fn table_mut(&mut self, field: Field) -> &mut FrequencyTable {
        match field {
            Field::AirTemperature => &mut self.temperature,
            Field::BarometricPressure => &mut self.pressure,
            Field::WindSpeed => &mut self.wind_speed,
        }
    }
}

/// Drives three [`FrequencyTable`]s from a whitespace-delimited source
///
/// The first `header_lines` lines are discarded. Every following line is
/// split on whitespace, the tracked tokens are parsed as `f64` and recorded.
/// Any short row (blank rows included), unparsable token or line that is not
/// valid UTF-8 aborts the run.
///
/// # Example
///
/// ```
/// use weatherstats::ingest::IngestionPipeline;
///
/// let data = "\
/// date time Air_Temp Barometric_Press Dew_Point Relative_Humidity Wind_Dir Wind_Gust Wind_Speed
/// 2012_01_01 00:02:14 34.30 30.50 26.90 74.20 346.40 11.00 3.60
/// 2012_01_01 00:08:29 34.10 30.50 26.50 73.60 349.00 12.00 8.00
/// 2012_01_01 00:14:45 34.10 30.50 26.50 73.60 348.50 12.00 3.60
/// ";
///
/// let report = IngestionPipeline::new().run(data.as_bytes()).unwrap();
///
/// assert_eq!(report.rows, 3);
/// assert_eq!(report.temperature.most_frequent, vec![34.1]);
/// assert_eq!(report.pressure.frequency, 3);
/// assert_eq!(report.wind_speed.median, 3.6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IngestionPipeline {
    config: PipelineConfig,
}

impl IngestionPipeline {
    /// Create a pipeline for the standard sensor log layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a custom layout
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Open `path` and run the pipeline over it
    ///
    /// Anything other than a readable regular file (a missing path, a
    /// directory, a permission error) is reported as
    /// [`IngestError::SourceUnavailable`]. The file is closed before this
    /// returns, on success and on error.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<Report, IngestError> {
        let path = path.as_ref();
        let unavailable = |source| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        if !file.metadata().map_err(unavailable)?.is_file() {
            return Err(unavailable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        debug!("reading sensor log from {}", path.display());

        self.run(BufReader::new(file))
    }

    /// Ingest every row of `source` and summarize the three columns
    pub fn run<R: BufRead>(&self, source: R) -> Result<Report, IngestError> {
        let mut tables = ColumnTables::default();
        let mut rows = 0u64;

        let min_fields = self.config.min_fields();

        for (i, line) in source.lines().enumerate().skip(self.config.header_lines) {
            let line_no = i + 1;
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => IngestError::InvalidText { line: line_no },
                _ => IngestError::Read(err),
            })?;

            // Blank rows are short rows too: there is no policy for skipping.
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < min_fields {
                return Err(IngestError::MissingField {
                    line: line_no,
                    index: min_fields - 1,
                    found: tokens.len(),
                });
            }

            for field in Field::ALL {
                let value = self.parse_field(&tokens, field, line_no)?;
                tables.table_mut(field).add(value);
            }
            rows += 1;
        }

        debug!(
            "ingested {} rows ({} / {} / {} distinct values)",
            rows,
            tables.temperature.distinct_len(),
            tables.pressure.distinct_len(),
            tables.wind_speed.distinct_len()
        );

        Ok(Report {
            rows,
            temperature: ColumnSummary::from_table(&tables.temperature)?,
            pressure: ColumnSummary::from_table(&tables.pressure)?,
            wind_speed: ColumnSummary::from_table(&tables.wind_speed)?,
        })
    }

    /// Parse the token for `field`; the row is already known to be long enough
    fn parse_field(&self, tokens: &[&str], field: Field, line: usize) -> Result<f64, IngestError> {
        let index = self.config.index(field);
        let token = tokens[index];

        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| IngestError::InvalidNumber {
                line,
                index,
                token: token.to_string(),
            })
    }
}

/// Run `f` and measure how long it took
///
/// ```
/// use weatherstats::ingest::{timed, IngestionPipeline};
///
/// let (result, elapsed) = timed(|| IngestionPipeline::new().run("header\n".as_bytes()));
/// assert!(result.is_err());
/// assert!(elapsed.as_secs() < 60);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
