//! Projects command for listing projects
//!
//! Implements `tbq projects`, the command-line form of the projects page.

use clap::Args;
use taskboard_query::{Dataset, Query, QueryResult, query};
use tracing::debug;

use crate::output::{OutputFormat, render_projects};

/// List projects with optional search, status filter, sort and grouping
#[derive(Debug, Default, Args)]
pub struct ProjectsCommand {
    /// Search text in title and description (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status: active, completed, on-hold or all
    #[arg(short, long)]
    pub status: Option<String>,

    /// Sort key: progress (default, highest first), dueDate or name
    #[arg(long)]
    pub sort: Option<String>,

    /// Group by status
    #[arg(short, long = "group-by")]
    pub group_by: Option<String>,
}

impl ProjectsCommand {
    /// Execute the projects command.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidQuery` for an unknown sort key or group
    /// field, and `QueryError::EncodeOutput` if JSON encoding fails.
    pub fn execute(&self, dataset: &Dataset, format: OutputFormat) -> QueryResult<String> {
        let q = self.build_query();
        debug!("projects query: {:?}", q);

        let output = query(&dataset.projects, &q)?;
        render_projects(&output, format)
    }

    /// Build a `Query` from the command options.
    pub fn build_query(&self) -> Query {
        let mut q = Query::new();

        if let Some(ref search) = self.search {
            q = q.with_search(search.as_str());
        }

        if let Some(ref status) = self.status {
            q = q.with_filter("status", status.as_str());
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

    fn titles(output: &str) -> Vec<String> {
        output
            .lines()
            .skip(2)
            .map(|line| {
                line.rsplit("  ")
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_build_query() {
        let cmd = ProjectsCommand {
            status: Some("active".to_string()),
            sort: Some("name".to_string()),
            ..Default::default()
        };
        let q = cmd.build_query();
        assert!(!q.field_filters["status"].is_all());
        assert_eq!(q.sort_key.as_deref(), Some("name"));
        assert!(q.group_key.is_none());
    }

    #[test]
    fn test_execute_default_sorts_by_progress_descending() {
        let result = ProjectsCommand::default()
            .execute(&Dataset::sample(), OutputFormat::Table)
            .unwrap();
        assert_eq!(
            titles(&result),
            vec![
                "API Integration",
                "Database Migration",
                "Website Redesign",
                "User Research",
                "Mobile App Development",
                "Marketing Campaign",
            ]
        );
    }

    #[test]
    fn test_execute_sort_by_name() {
        let cmd = ProjectsCommand {
            status: Some("active".to_string()),
            sort: Some("name".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap();
        assert_eq!(
            titles(&result),
            vec![
                "Database Migration",
                "Mobile App Development",
                "User Research",
                "Website Redesign",
            ]
        );
    }

    #[test]
    fn test_execute_sort_by_due_date() {
        let cmd = ProjectsCommand {
            sort: Some("dueDate".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap();
        let titles = titles(&result);
        assert_eq!(titles.first().map(String::as_str), Some("API Integration"));
        assert_eq!(titles.last().map(String::as_str), Some("Marketing Campaign"));
    }

    #[test]
    fn test_execute_search_matches_description() {
        let cmd = ProjectsCommand {
            search: Some("CLOUD".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap();
        assert_eq!(titles(&result), vec!["Database Migration"]);
    }

    #[test]
    fn test_execute_grouped_by_status() {
        let cmd = ProjectsCommand {
            group_by: Some("status".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap();
        let headers: Vec<&str> = result
            .lines()
            .filter(|l| l.ends_with(')'))
            .collect();
        assert_eq!(headers, vec!["active (4)", "completed (1)", "on-hold (1)"]);
    }

    #[test]
    fn test_execute_no_matches() {
        let cmd = ProjectsCommand {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap();
        assert_eq!(result, "No projects found.");
    }

    #[test]
    fn test_execute_task_only_field_rejected() {
        let cmd = ProjectsCommand {
            group_by: Some("priority".to_string()),
            ..Default::default()
        };
        let err = cmd.execute(&Dataset::sample(), OutputFormat::Table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid project query: unknown group field 'priority'. Valid fields: status"
        );
    }

    #[test]
    fn test_execute_json_grouped() {
        let cmd = ProjectsCommand {
            group_by: Some("status".to_string()),
            ..Default::default()
        };
        let result = cmd.execute(&Dataset::sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["grouped"][2]["value"], "on-hold");
        assert_eq!(value["grouped"][2]["records"][0]["title"], "Marketing Campaign");
    }
}
