//! Summary command for dashboard figures

use clap::Args;
use taskboard_query::{DashboardSummary, Dataset, QueryResult};

use crate::output::{OutputFormat, render_summary};

/// Show project and task counts, completion and team size
#[derive(Debug, Default, Args)]
pub struct SummaryCommand {}

impl SummaryCommand {
    /// Execute the summary command.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::EncodeOutput` if JSON encoding fails.
    pub fn execute(&self, dataset: &Dataset, format: OutputFormat) -> QueryResult<String> {
        let summary = DashboardSummary::from_dataset(dataset);
        render_summary(&summary, format)
    }
}
