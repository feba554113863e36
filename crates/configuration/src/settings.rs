use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the file; missing sections and keys take the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// How the input file is checked and read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Field delimiter. Must be exactly one ASCII character.
    pub delimiter: String,
    /// Reject paths that do not end in `.csv` before reading them.
    pub require_csv_extension: bool,
    /// Number of leading bytes inspected when sniffing the file format.
    pub sniff_bytes: usize,
}

/// How the finished aggregate is presented.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Also print the demand/supply schedule (the plotted series).
    pub show_schedule: bool,
    /// Also draw the demand and supply curves as a text chart.
    pub show_chart: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is not set (e.g. "warn", "debug").
    pub level: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain sentences, one fact per line.
    #[default]
    Text,
    /// A bordered table of the same facts.
    Table,
    /// The full aggregate as pretty-printed JSON.
    Json,
}

// --- Default Implementations ---

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            require_csv_extension: true,
            sniff_bytes: 1024,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl InputSettings {
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(ConfigError::ValidationError(format!(
                "delimiter must be a single ASCII character other than a line break, got {:?}",
                self.delimiter
            ))),
        }
    }
}

impl Settings {
    /// Checks the values that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.delimiter_byte()?;
        if self.input.sniff_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "input.sniff_bytes must be greater than zero".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_must_be_one_ascii_byte() {
        let mut input = InputSettings::default();
        assert_eq!(input.delimiter_byte().unwrap(), b',');

        input.delimiter = "\t".to_string();
        assert_eq!(input.delimiter_byte().unwrap(), b'\t');

        for bad in ["", ",,", "\n", "é"] {
            input.delimiter = bad.to_string();
            assert!(input.delimiter_byte().is_err(), "{bad:?} should be rejected");
        }
    }
}
