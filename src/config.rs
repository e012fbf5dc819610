//! Configuration management for sorting runs

use crate::error::{SortError, SortResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How input text is split into items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Whitespace separated base-10 integers
    Long,
    /// Whole input lines, unmodified
    Line,
    /// Whitespace separated tokens
    Word,
}

impl DataType {
    /// Name accepted by `-dataType`
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Long => "long",
            DataType::Line => "line",
            DataType::Word => "word",
        }
    }

    /// Plural label used in the `Total ...` summary line
    pub fn plural_label(&self) -> &'static str {
        match self {
            DataType::Long => "numbers",
            DataType::Line => "lines",
            DataType::Word => "words",
        }
    }

    /// Separator placed between items of natural sort output
    pub fn delimiter(&self) -> &'static str {
        match self {
            DataType::Line => "\n",
            DataType::Long | DataType::Word => " ",
        }
    }
}

impl FromStr for DataType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" => Ok(DataType::Long),
            "line" => Ok(DataType::Line),
            "word" => Ok(DataType::Word),
            _ => Err(SortError::unknown_data_type(s)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output ordering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortingType {
    /// Ascending natural order of the items
    Natural,
    /// Distinct items grouped by ascending occurrence count
    ByCount,
}

impl SortingType {
    /// Name accepted by `-sortingType`
    pub fn name(&self) -> &'static str {
        match self {
            SortingType::Natural => "natural",
            SortingType::ByCount => "byCount",
        }
    }
}

impl FromStr for SortingType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" => Ok(SortingType::Natural),
            "bycount" => Ok(SortingType::ByCount),
            _ => Err(SortError::unknown_sorting_type(s)),
        }
    }
}

impl fmt::Display for SortingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved configuration of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub sorting_type: SortingType,
    pub data_type: DataType,
    /// Input file path; `None` reads standard input
    pub input_file: Option<PathBuf>,
    /// Output file path; `None` writes standard output
    pub output_file: Option<PathBuf>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sorting_type: SortingType::Natural,
            data_type: DataType::Word,
            input_file: None,
            output_file: None,
        }
    }
}

impl SortConfig {
    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        // Opening the output truncates it before the input is read
        if let (Some(input), Some(output)) = (&self.input_file, &self.output_file) {
            if input == output {
                return Err(SortError::conflicting_options(&format!(
                    "input and output file are the same: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn sorting_type(mut self, sorting_type: SortingType) -> Self {
        self.config.sorting_type = sorting_type;
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.config.data_type = data_type;
        self
    }

    pub fn input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_file = Some(path.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_file = Some(path.into());
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
