//! Dashboard statistics derived from a dataset

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::engine::group;
use crate::models::{DeclaredOrder, ProjectStatus, TaskStatus};
use crate::record::{ProjectField, TaskField};

/// Number of records sharing one status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Figures shown on the dashboard stat cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_projects: usize,
    /// Per project status, in declared status order
    pub projects_by_status: Vec<StatusCount>,
    pub total_tasks: usize,
    /// Tasks that are not done
    pub pending_tasks: usize,
    /// Per task status, in board column order
    pub tasks_by_status: Vec<StatusCount>,
    /// Distinct project members and task assignees, sorted
    pub team_members: Vec<String>,
    /// Done tasks as a rounded percentage of all tasks
    pub completion_rate: u8,
    /// Mean project progress, rounded
    pub average_progress: u8,
}

impl DashboardSummary {
    /// Compute the summary for a dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let tasks_by_status: Vec<StatusCount> =
            group(&dataset.tasks, TaskField::Status, &TaskStatus::names())
                .into_iter()
                .map(|b| StatusCount {
                    count: b.len(),
                    status: b.value,
                })
                .collect();

        let projects_by_status: Vec<StatusCount> =
            group(&dataset.projects, ProjectField::Status, &ProjectStatus::names())
                .into_iter()
                .map(|b| StatusCount {
                    count: b.len(),
                    status: b.value,
                })
                .collect();

        let total_tasks = dataset.tasks.len();
        let done = dataset
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count();

        let team_members: BTreeSet<&str> = dataset
            .projects
            .iter()
            .flat_map(|p| p.member_names.iter().map(String::as_str))
            .chain(
                dataset
                    .tasks
                    .iter()
                    .filter_map(|t| t.assignee_name.as_deref()),
            )
            .collect();

        let progress_total: usize = dataset.projects.iter().map(|p| usize::from(p.progress)).sum();

        Self {
            total_projects: dataset.projects.len(),
            projects_by_status,
            total_tasks,
            pending_tasks: total_tasks - done,
            tasks_by_status,
            team_members: team_members.into_iter().map(str::to_string).collect(),
            completion_rate: rounded_percent(done * 100, total_tasks),
            average_progress: rounded_percent(progress_total, dataset.projects.len()),
        }
    }

    /// Count for one task status
    pub fn task_count(&self, status: TaskStatus) -> usize {
        count_for(&self.tasks_by_status, status.as_str())
    }

    /// Count for one project status
    pub fn project_count(&self, status: ProjectStatus) -> usize {
        count_for(&self.projects_by_status, status.as_str())
    }
}

fn count_for(counts: &[StatusCount], status: &str) -> usize {
    counts
        .iter()
        .find(|c| c.status == status)
        .map_or(0, |c| c.count)
}

/// `numerator / denominator` rounded half up, 0 for an empty denominator.
/// Callers pass values whose quotient is at most 100.
fn rounded_percent(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let value = (numerator + denominator / 2) / denominator;
    u8::try_from(value.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Task, TaskPriority};

    #[test]
    fn test_sample_summary() {
        let summary = DashboardSummary::from_dataset(&Dataset::sample());

        assert_eq!(summary.total_projects, 6);
        assert_eq!(summary.project_count(ProjectStatus::Active), 4);
        assert_eq!(summary.project_count(ProjectStatus::Completed), 1);
        assert_eq!(summary.project_count(ProjectStatus::OnHold), 1);

        assert_eq!(summary.total_tasks, 8);
        assert_eq!(summary.pending_tasks, 7);
        assert_eq!(summary.task_count(TaskStatus::ToDo), 3);
        assert_eq!(summary.task_count(TaskStatus::InProgress), 3);
        assert_eq!(summary.task_count(TaskStatus::Review), 1);
        assert_eq!(summary.task_count(TaskStatus::Done), 1);

        // 1 of 8 done = 12.5%
        assert_eq!(summary.completion_rate, 13);
        // (68 + 42 + 95 + 25 + 50 + 80) / 6 = 60
        assert_eq!(summary.average_progress, 60);

        assert_eq!(
            summary.team_members,
            vec![
                "Alice Smith",
                "Bob Johnson",
                "Charlie Brown",
                "Diana Prince",
                "Emily Davis",
                "Frank Castle",
                "John Doe",
            ]
        );
    }

    #[test]
    fn test_status_counts_in_declared_order() {
        let summary = DashboardSummary::from_dataset(&Dataset::sample());
        let statuses: Vec<&str> = summary
            .tasks_by_status
            .iter()
            .map(|c| c.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["to-do", "in-progress", "review", "done"]);
    }

    #[test]
    fn test_empty_dataset_summary() {
        let summary = DashboardSummary::from_dataset(&Dataset::default());
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.pending_tasks, 0);
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.average_progress, 0);
        assert!(summary.team_members.is_empty());
        assert_eq!(summary.tasks_by_status.len(), 4);
        assert!(summary.tasks_by_status.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_all_done_is_full_completion() {
        let tasks = vec![
            Task::new("1", "a", TaskPriority::Low, "May 1, 2025", TaskStatus::Done),
            Task::new("2", "b", TaskPriority::Low, "May 2, 2025", TaskStatus::Done),
        ];
        let projects = vec![Project::new("1", "p", 100, "May 1, 2025", ProjectStatus::Completed)];
        let summary = DashboardSummary::from_dataset(&Dataset::new(tasks, projects));
        assert_eq!(summary.completion_rate, 100);
        assert_eq!(summary.average_progress, 100);
        assert_eq!(summary.pending_tasks, 0);
    }

    #[test]
    fn test_rounded_percent() {
        assert_eq!(rounded_percent(100, 3), 33);
        assert_eq!(rounded_percent(200, 3), 67);
        assert_eq!(rounded_percent(50, 0), 0);
    }
}
