//! CLI commands for tbq
//!
//! This module contains all subcommand implementations for the tbq CLI.

pub mod projects;
pub mod summary;
pub mod tasks;

pub use projects::ProjectsCommand;
pub use summary::SummaryCommand;
pub use tasks::TasksCommand;

use clap::Subcommand;
use taskboard_query::{Dataset, QueryResult};

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks with search, filters, sorting and board grouping
    Tasks(TasksCommand),
    /// List projects with search, filters, sorting and grouping
    Projects(ProjectsCommand),
    /// Show dashboard figures
    Summary(SummaryCommand),
}

impl Command {
    /// Execute the command against a dataset and render its result.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the command's query is invalid or its output
    /// cannot be encoded.
    pub fn execute(&self, dataset: &Dataset, format: OutputFormat) -> QueryResult<String> {
        match self {
            Command::Tasks(cmd) => cmd.execute(dataset, format),
            Command::Projects(cmd) => cmd.execute(dataset, format),
            Command::Summary(cmd) => cmd.execute(dataset, format),
        }
    }
}
