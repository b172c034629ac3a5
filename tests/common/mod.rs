//! Test infrastructure for integration tests
//!
//! Provides isolated dataset files and command construction helpers.
//! Each test writes its own dataset into its own temp directory.

use std::path::PathBuf;

use taskboard::commands::{ProjectsCommand, TasksCommand};
use taskboard::load_dataset;
use taskboard_query::Dataset;

/// Test context owning a temp directory with one dataset file
pub struct TestContext {
    pub dataset: Dataset,
    pub path: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestContext {
    /// Write `json` to a fresh dataset file and load it back.
    pub fn from_json(json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, json).unwrap();

        let dataset = load_dataset(Some(&path)).unwrap();
        Self {
            dataset,
            path,
            _dir: dir,
        }
    }

    /// Round-trip the sample board through a dataset file.
    pub fn sample() -> Self {
        Self::from_json(&serde_json::to_string(&Dataset::sample()).unwrap())
    }
}

/// Create a TasksCommand with no options.
pub fn tasks_cmd() -> TasksCommand {
    TasksCommand::default()
}

/// Create a TasksCommand grouped by the given field.
pub fn board_cmd(group_by: &str) -> TasksCommand {
    TasksCommand {
        group_by: Some(group_by.to_string()),
        ..Default::default()
    }
}

/// Create a ProjectsCommand with no options.
pub fn projects_cmd() -> ProjectsCommand {
    ProjectsCommand::default()
}

/// Extract the ID column from table output, skipping header and separator.
#[allow(dead_code)]
pub fn table_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(2)
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect()
}

/// Split grouped table output into (header, body) sections.
#[allow(dead_code)]
pub fn board_sections(output: &str) -> Vec<(String, String)> {
    output
        .split("\n\n")
        .filter_map(|section| {
            let (header, body) = section.split_once('\n')?;
            Some((header.to_string(), body.to_string()))
        })
        .collect()
}
