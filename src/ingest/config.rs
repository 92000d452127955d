//! Input layout configuration

/// The three tracked reading columns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    /// Air temperature
    AirTemperature,
    /// Barometric pressure
    BarometricPressure,
    /// Wind speed
    WindSpeed,
}

impl Field {
    /// All tracked fields, in report order
    pub const ALL: [Field; 3] = [
        Field::AirTemperature,
        Field::BarometricPressure,
        Field::WindSpeed,
    ];

    /// Human-readable label used in the text report
    pub fn label(self) -> &'static str {
        match self {
            Field::AirTemperature => "Air temperature",
            Field::BarometricPressure => "Barometric pressure",
            Field::WindSpeed => "Wind speed",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the pipeline finds its data
///
/// The defaults describe the standard sensor log: one header line, air
/// temperature in token 2, barometric pressure in token 3 and wind speed in
/// token 8 (all zero-based).
///
/// # Example
///
/// ```
/// use weatherstats::ingest::{Field, PipelineConfig};
///
/// let config = PipelineConfig::default().with_index(Field::WindSpeed, 4);
///
/// assert_eq!(config.index(Field::AirTemperature), 2);
/// assert_eq!(config.index(Field::WindSpeed), 4);
/// assert_eq!(config.min_fields(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of leading lines to discard
    pub header_lines: usize,
    /// Token index of the air temperature
    pub temperature_index: usize,
    /// Token index of the barometric pressure
    pub pressure_index: usize,
    /// Token index of the wind speed
    pub wind_speed_index: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            header_lines: 1,
            temperature_index: 2,
            pressure_index: 3,
            wind_speed_index: 8,
        }
    }
}

impl PipelineConfig {
    /// Set the number of header lines to skip
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    /// Set the token index of `field`
    pub fn with_index(mut self, field: Field, index: usize) -> Self {
        match field {
            Field::AirTemperature => self.temperature_index = index,
            Field::BarometricPressure => self.pressure_index = index,
            Field::WindSpeed => self.wind_speed_index = index,
        }
        self
    }

    /// Token index of `field`
    pub fn index(&self, field: Field) -> usize {
        match field {
            Field::AirTemperature => self.temperature_index,
            Field::BarometricPressure => self.pressure_index,
            Field::WindSpeed => self.wind_speed_index,
        }
    }

    /// Minimum number of tokens a data row must have
    pub fn min_fields(&self) -> usize {
        Field::ALL
            .iter()
            .map(|&field| self.index(field))
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();

        assert_eq!(config.header_lines, 1);
        assert_eq!(config.index(Field::AirTemperature), 2);
        assert_eq!(config.index(Field::BarometricPressure), 3);
        assert_eq!(config.index(Field::WindSpeed), 8);
        assert_eq!(config.min_fields(), 9);
    }

    #[test]
    fn test_overrides() {
        let config = PipelineConfig::default()
            .with_header_lines(0)
            .with_index(Field::AirTemperature, 0)
            .with_index(Field::BarometricPressure, 1)
            .with_index(Field::WindSpeed, 2);

        assert_eq!(config.header_lines, 0);
        assert_eq!(config.min_fields(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::AirTemperature.to_string(), "Air temperature");
        assert_eq!(Field::BarometricPressure.label(), "Barometric pressure");
        assert_eq!(Field::WindSpeed.label(), "Wind speed");
    }
}
