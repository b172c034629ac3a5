//! Taskboard CLI library
//!
//! Exposes the `tbq` commands and renderers for use in integration tests.
//! The binary is in `main.rs` and uses this library.

use std::path::Path;

use taskboard_query::{Dataset, QueryResult};
use tracing::debug;

pub mod commands;
pub mod output;

pub use commands::*;

/// Load the dataset at `path`, or the built-in sample board when no path is given.
///
/// # Errors
///
/// Returns the dataset loading error if the file cannot be read, parsed or
/// validated.
pub fn load_dataset(path: Option<&Path>) -> QueryResult<Dataset> {
    match path {
        Some(path) => Dataset::from_path(path),
        None => {
            debug!("No dataset path given, using the sample board");
            let dataset = Dataset::sample();
            dataset.validate()?;
            Ok(dataset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dataset_defaults_to_sample() {
        let dataset = load_dataset(None).unwrap();
        assert_eq!(dataset, Dataset::sample());
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(Some(&dir.path().join("board.json")));
        assert!(result.is_err());
    }
}
