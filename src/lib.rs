//! Sorting tool
//!
//! Reads numbers, lines or words and prints them either in natural order or
//! grouped by how often each distinct value occurs.

#![warn(clippy::all)]

use std::io::Write;

pub mod args;
pub mod config;
pub mod error;
pub mod parser;
pub mod reader;
pub mod sorter;
pub mod streams;

// Re-export commonly used types
pub use config::{DataType, SortConfig, SortingType};
pub use error::{SortError, SortResult, Warning};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const IO_FAILURE: i32 = 2;

/// Run the read, parse, sort and print pipeline for `config`.
///
/// Input and output are opened here and released when this function
/// returns, whichever path it returns on.
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let mut input = streams::open_input(config)?;
    let mut output = streams::open_output(config)?;

    let lines = reader::read_lines(&mut input)?;
    let parsed = parser::parse(config.data_type, lines);
    error::report_warnings(&parsed.warnings);

    sorter::sort_and_print(config, parsed.items, &mut output)?;
    output.flush()?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfigBuilder;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn sort_file(input: &str, builder: SortConfigBuilder) -> io::Result<String> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        let output_file = temp_dir.path().join("output.txt");
        fs::write(&input_file, input)?;

        let config = builder
            .input_file(&input_file)
            .output_file(&output_file)
            .build()
            .expect("Failed to build test config");
        let code = sort(&config).expect("sort should succeed");
        assert_eq!(code, EXIT_SUCCESS);

        fs::read_to_string(&output_file)
    }

    #[test]
    fn test_sort_words_naturally() -> io::Result<()> {
        let output = sort_file("banana apple\nbanana\n", SortConfigBuilder::new())?;
        assert_eq!(output, "Total words: 3.\nSorted data: apple banana banana\n");
        Ok(())
    }

    #[test]
    fn test_sort_numbers_by_count() -> io::Result<()> {
        let output = sort_file(
            "1 -2 x 1\n",
            SortConfigBuilder::new()
                .data_type(DataType::Long)
                .sorting_type(SortingType::ByCount),
        )?;
        assert_eq!(
            output,
            "Total numbers: 3.\n-2: 1 time(s), 33%\n1: 2 time(s), 66%\n"
        );
        Ok(())
    }

    #[test]
    fn test_sorted_lines_are_stable_when_fed_back() -> io::Result<()> {
        let first = sort_file(
            "pear\napple\n\nfig tree\n",
            SortConfigBuilder::new().data_type(DataType::Line),
        )?;
        assert_eq!(first, "Total lines: 4.\nSorted data:\n\napple\nfig tree\npear\n");

        let sorted_lines = first
            .strip_prefix("Total lines: 4.\nSorted data:\n")
            .expect("natural line output");
        let second = sort_file(sorted_lines, SortConfigBuilder::new().data_type(DataType::Line))?;
        assert_eq!(second, first);
        Ok(())
    }

    #[test]
    fn test_missing_input_file_fails() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = SortConfigBuilder::new()
            .input_file(temp_dir.path().join("nope.txt"))
            .build()
            .expect("Failed to build test config");

        let err = sort(&config).expect_err("missing input");
        assert!(matches!(err, SortError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), IO_FAILURE);
        Ok(())
    }
}
