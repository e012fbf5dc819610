//! Scoped acquisition of the input source and output sink
//!
//! Files are closed when the returned handles are dropped. The standard
//! streams are only borrowed, so dropping their handles never closes them.

use crate::config::SortConfig;
use crate::error::{SortContext, SortError, SortResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Open the configured input, falling back to stdin
pub fn open_input(config: &SortConfig) -> SortResult<Box<dyn BufRead>> {
    match &config.input_file {
        // Opening a directory succeeds on some platforms; reading it does not
        Some(path) if path.is_dir() => {
            Err(SortError::is_directory(&path.display().to_string()))
        }
        Some(path) => {
            let file = File::open(path).with_file_context(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Open the configured output, falling back to stdout
pub fn open_output(config: &SortConfig) -> SortResult<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path).with_file_context(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfigBuilder;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_input_file() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing.txt");
        let config = SortConfigBuilder::new()
            .input_file(&missing)
            .build()
            .expect("Failed to build test config");

        let result = open_input(&config);
        assert!(matches!(result, Err(SortError::FileNotFound { .. })));

        Ok(())
    }

    #[test]
    fn test_open_directory_as_input() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = SortConfigBuilder::new()
            .input_file(temp_dir.path())
            .build()
            .expect("Failed to build test config");

        let result = open_input(&config);
        assert!(matches!(result, Err(SortError::IsDirectory { .. })));

        Ok(())
    }

    #[test]
    fn test_open_file_handles() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        let output_file = temp_dir.path().join("output.txt");
        fs::write(&input_file, "b a\n")?;

        let config = SortConfigBuilder::new()
            .input_file(&input_file)
            .output_file(&output_file)
            .build()
            .expect("Failed to build test config");

        let mut content = String::new();
        open_input(&config)
            .expect("input should open")
            .read_to_string(&mut content)?;
        assert_eq!(content, "b a\n");

        {
            let mut output = open_output(&config).expect("output should open");
            output.write_all(b"done\n")?;
            output.flush()?;
        }
        assert_eq!(fs::read_to_string(&output_file)?, "done\n");

        Ok(())
    }
}
