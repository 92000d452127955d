//! Per-column summaries and the final run report

use core::fmt;

use crate::frequency::FrequencyTable;
use crate::ingest::Field;
use crate::traits::StatsError;

/// Descriptive statistics for one column
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnSummary {
    /// Weighted mean
    pub average: f64,
    /// Median of all observations
    pub median: f64,
    /// Smallest observed value
    pub low: f64,
    /// Largest observed value
    pub high: f64,
    /// Every value sharing the highest count, ascending
    pub most_frequent: Vec<f64>,
    /// The highest count
    pub frequency: u64,
}

impl ColumnSummary {
    /// Query every aggregate of `table`
    pub fn from_table(table: &FrequencyTable) -> Result<Self, StatsError> {
        let (low, high) = table.low_high()?;
        let (most_frequent, frequency) = table.most_frequent()?;
        Ok(Self {
            average: table.average()?,
            median: table.median()?,
            low,
            high,
            most_frequent,
            frequency,
        })
    }
}

/// Result of one ingestion run
///
/// `Display` renders the plain-text report:
///
/// ```text
/// Total readings: 2
/// Air temperature: Average 15.00, Median 15.00, Low 10.00, High 20.00, Most frequent [10.0, 20.0], Frequency 1
/// ...
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Number of data rows processed
    pub rows: u64,
    /// Air temperature statistics
    pub temperature: ColumnSummary,
    /// Barometric pressure statistics
    pub pressure: ColumnSummary,
    /// Wind speed statistics
    pub wind_speed: ColumnSummary,
}

impl Report {
    /// Summary for `field`
    pub fn column(&self, field: Field) -> &ColumnSummary {
        match field {
            Field::AirTemperature => &self.temperature,
            Field::BarometricPressure => &self.pressure,
            Field::WindSpeed => &self.wind_speed,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total readings: {}", self.rows)?;
        for (i, field) in Field::ALL.iter().enumerate() {
            let c = self.column(*field);
            write!(
                f,
                "{}: Average {:.2}, Median {:.2}, Low {:.2}, High {:.2}, Most frequent {:?}, Frequency {}",
                field, c.average, c.median, c.low, c.high, c.most_frequent, c.frequency
            )?;
            if i + 1 < Field::ALL.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(values: &[f64]) -> ColumnSummary {
        let table: FrequencyTable = values.iter().copied().collect();
        ColumnSummary::from_table(&table).unwrap()
    }

    #[test]
    fn test_from_table() {
        let c = summary(&[10.0, 20.0, 20.0]);

        assert!((c.average - 50.0 / 3.0).abs() < 1e-12);
        assert_eq!(c.median, 20.0);
        assert_eq!(c.low, 10.0);
        assert_eq!(c.high, 20.0);
        assert_eq!(c.most_frequent, vec![20.0]);
        assert_eq!(c.frequency, 2);
    }

    #[test]
    fn test_from_empty_table() {
        let table = FrequencyTable::new();
        assert_eq!(
            ColumnSummary::from_table(&table),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_display() {
        let report = Report {
            rows: 2,
            temperature: summary(&[10.0, 20.0]),
            pressure: summary(&[1000.0, 1010.0]),
            wind_speed: summary(&[5.0, 5.0]),
        };

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Total readings: 2");
        assert_eq!(
            lines[1],
            "Air temperature: Average 15.00, Median 15.00, Low 10.00, High 20.00, \
             Most frequent [10.0, 20.0], Frequency 1"
        );
        assert_eq!(
            lines[2],
            "Barometric pressure: Average 1005.00, Median 1005.00, Low 1000.00, High 1010.00, \
             Most frequent [1000.0, 1010.0], Frequency 1"
        );
        assert_eq!(
            lines[3],
            "Wind speed: Average 5.00, Median 5.00, Low 5.00, High 5.00, \
             Most frequent [5.0], Frequency 2"
        );
    }
}
