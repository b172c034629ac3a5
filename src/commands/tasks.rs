//! Tasks command for listing and grouping tasks
//!
//! Implements `tbq tasks`, the command-line form of the task board and task
//! list views.

use clap::Args;
use taskboard_query::{Dataset, Query, QueryResult, query};
use tracing::debug;

use crate::output::{OutputFormat, render_tasks};

/// List tasks with optional search, filters, sort and grouping
#[derive(Debug, Default, Args)]
pub struct TasksCommand {
    /// Search text in title and description (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status: to-do, in-progress, review, done or all
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by priority: high, medium, low or all
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Filter by assignee name (exact match)
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Filter by project name (exact match)
    #[arg(long)]
    pub project: Option<String>,

    /// Sort key: dueDate (default), priority or title
    #[arg(long)]
    pub sort: Option<String>,

    /// Group into board columns by status or priority
    #[arg(short, long = "group-by")]
    pub group_by: Option<String>,
}

impl TasksCommand {
    /// Execute the tasks command.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidQuery` for an unknown sort key or group
    /// field, and `QueryError::EncodeOutput` if JSON encoding fails.
    pub fn execute(&self, dataset: &Dataset, format: OutputFormat) -> QueryResult<String> {
        let q = self.build_query();
        debug!("tasks query: {:?}", q);

        let output = query(&dataset.tasks, &q)?;
        render_tasks(&output, format)
    }

    /// Build a `Query` from the command options.
    ///
    /// Filter values are passed through unchanged, so `all` leaves a field
    /// unconstrained.
    pub fn build_query(&self) -> Query {
        let mut q = Query::new();

        if let Some(ref search) = self.search {
            q = q.with_search(search.as_str());
        }

        let filters = [
            ("status", &self.status),
            ("priority", &self.priority),
            ("assignee", &self.assignee),
            ("project", &self.project),
        ];
        for (field, value) in filters {
            if let Some(value) = value {
                q = q.with_filter(field, value.as_str());
            }
        }

        if let Some(ref key) = self.sort {
            q = q.sort_by(key.as_str());
        }

        if let Some(ref field) = self.group_by {
            q = q.group_by(field.as_str());
        }

        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_query::{FilterValue, QueryError};

    fn sample() -> Dataset {
        Dataset::sample()
    }

    fn title_lines(output: &str) -> Vec<String> {
        output
            .lines()
            .skip(2)
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn test_build_query_empty() {
        let cmd = TasksCommand::default();
        assert_eq!(cmd.build_query(), Query::new());
    }

    #[test]
    fn test_build_query_all_options() {
        let cmd = TasksCommand {
            search: Some("design".to_string()),
            status: Some("in-progress".to_string()),
            priority: Some("all".to_string()),
            assignee: Some("John Doe".to_string()),
            project: Some("Website Redesign".to_string()),
            sort: Some("priority".to_string()),
            group_by: Some("status".to_string()),
        };
        let q = cmd.build_query();

        assert_eq!(q.search_text, "design");
        assert_eq!(q.field_filters["status"], FilterValue::parse("in-progress"));
        assert!(q.field_filters["priority"].is_all());
        assert_eq!(q.field_filters["assignee"], FilterValue::parse("John Doe"));
        assert_eq!(q.field_filters["project"], FilterValue::parse("Website Redesign"));
        assert_eq!(q.sort_key.as_deref(), Some("priority"));
        assert_eq!(q.group_key.as_deref(), Some("status"));
    }

    #[test]
    fn test_execute_default_sorts_by_due_date() {
        let result = TasksCommand::default()
            .execute(&sample(), OutputFormat::Table)
            .unwrap();
        let rows = title_lines(&result);
        assert_eq!(rows.len(), 8);
        assert!(rows[0].starts_with("2 "));
        assert!(rows[7].starts_with("8 "));
    }

    #[test]
    fn test_execute_search_and_filter() {
        let cmd = TasksCommand {
            search: Some("DESIGN".to_string()),
            priority: Some("medium".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&sample(), OutputFormat::Table).unwrap();
        let rows = title_lines(&result);
        // One title match, one description match
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Create onboarding flow"));
        assert!(rows[1].contains("Design email templates"));
    }

    #[test]
    fn test_execute_assignee_filter() {
        let cmd = TasksCommand {
            assignee: Some("Bob Johnson".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&sample(), OutputFormat::Table).unwrap();
        let rows = title_lines(&result);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.contains("Bob Johnson")));
    }

    #[test]
    fn test_execute_no_matches() {
        let cmd = TasksCommand {
            search: Some("nothing like this".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&sample(), OutputFormat::Table).unwrap();
        assert_eq!(result, "No tasks found.");
    }

    #[test]
    fn test_execute_grouped_board() {
        let cmd = TasksCommand {
            priority: Some("low".to_string()),
            group_by: Some("status".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&sample(), OutputFormat::Table).unwrap();
        assert!(result.starts_with("to-do (0)\nNo tasks found."));
        assert!(result.contains("done (1)"));
        assert!(result.contains("Setup analytics tracking"));
    }

    #[test]
    fn test_execute_invalid_sort_key() {
        let cmd = TasksCommand {
            sort: Some("progress".to_string()),
            ..Default::default()
        };
        let err = cmd.execute(&sample(), OutputFormat::Table).unwrap_err();
        assert!(matches!(err, QueryError::InvalidQuery { .. }));
        assert!(err.to_string().contains("unknown sort key 'progress'"));
    }

    #[test]
    fn test_execute_group_by_open_field_rejected() {
        let cmd = TasksCommand {
            group_by: Some("assignee".to_string()),
            ..Default::default()
        };
        let err = cmd.execute(&sample(), OutputFormat::Table).unwrap_err();
        assert!(err.is_invalid_query());
    }

    #[test]
    fn test_execute_json() {
        let cmd = TasksCommand {
            status: Some("review".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["flat"].as_array().unwrap().len(), 1);
        assert_eq!(value["flat"][0]["title"], "Write API documentation");
    }
}
