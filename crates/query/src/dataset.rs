//! Record source for the engine
//!
//! A `Dataset` holds the task and project collections the dashboard views
//! query. It is either the built-in sample board or a JSON file; either way
//! it is read-only.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::models::{Project, ProjectStatus, Task, TaskPriority, TaskStatus};
use crate::record::Record;

/// Highest legal project progress value
pub const MAX_PROGRESS: u8 = 100;

/// Tasks and projects shown by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Dataset {
    /// Create a dataset from record collections
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Self { tasks, projects }
    }

    /// Load and validate a dataset from a JSON file.
    ///
    /// The file holds an object with optional `tasks` and `projects` arrays.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::ReadDataset` if the file cannot be read,
    /// `QueryError::ParseDataset` if it is not a valid dataset document, and
    /// `QueryError::ValidationError` if the records break an invariant.
    pub fn from_path(path: &Path) -> QueryResult<Self> {
        debug!("Loading dataset from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| QueryError::ReadDataset {
            path: path.to_path_buf(),
            source: e,
        })?;

        let dataset: Dataset =
            serde_json::from_str(&contents).map_err(|e| QueryError::ParseDataset {
                path: path.to_path_buf(),
                source: e,
            })?;

        dataset.validate()?;

        debug!(
            "Loaded {} tasks and {} projects",
            dataset.tasks.len(),
            dataset.projects.len()
        );
        Ok(dataset)
    }

    /// Check record invariants: unique ids per shape and progress within 0..=100.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::ValidationError` describing the first violation.
    pub fn validate(&self) -> QueryResult<()> {
        ensure_unique_ids(&self.tasks)?;
        ensure_unique_ids(&self.projects)?;

        if let Some(project) = self.projects.iter().find(|p| p.progress > MAX_PROGRESS) {
            return Err(QueryError::ValidationError {
                message: format!(
                    "Project '{}' has progress {}, expected 0 to {}",
                    project.id, project.progress, MAX_PROGRESS
                ),
            });
        }

        Ok(())
    }

    /// The sample board the dashboard ships with
    pub fn sample() -> Self {
        Self::new(sample_tasks(), sample_projects())
    }
}

fn ensure_unique_ids<R: Record>(records: &[R]) -> QueryResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(QueryError::ValidationError {
                message: format!("Duplicate {} id '{}'", R::KIND, record.id()),
            });
        }
    }
    Ok(())
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "1",
            "Update landing page design",
            TaskPriority::High,
            "May 24, 2025",
            TaskStatus::InProgress,
        )
        .with_description(
            "Make the hero section more appealing with better visuals and clearer call-to-action buttons.",
        )
        .with_assignee("John Doe")
        .with_project("1", "Website Redesign"),
        Task::new(
            "2",
            "Fix payment integration",
            TaskPriority::High,
            "May 23, 2025",
            TaskStatus::ToDo,
        )
        .with_description("Debug the issue with Stripe payment processing in the checkout flow.")
        .with_assignee("Alice Smith")
        .with_project("2", "Mobile App Development"),
        Task::new(
            "3",
            "Write API documentation",
            TaskPriority::Medium,
            "May 25, 2025",
            TaskStatus::Review,
        )
        .with_description(
            "Document all API endpoints for the developer portal with examples and use cases.",
        )
        .with_assignee("Bob Johnson")
        .with_project("3", "API Integration"),
        Task::new(
            "4",
            "Create onboarding flow",
            TaskPriority::Medium,
            "May 27, 2025",
            TaskStatus::ToDo,
        )
        .with_description("Design and implement user onboarding sequence for new sign-ups.")
        .with_assignee("Emily Davis")
        .with_project("1", "Website Redesign"),
        Task::new(
            "5",
            "Setup analytics tracking",
            TaskPriority::Low,
            "May 26, 2025",
            TaskStatus::Done,
        )
        .with_description(
            "Integrate Google Analytics and set up custom events for key user actions.",
        )
        .with_assignee("Charlie Brown")
        .with_project("4", "Marketing Campaign"),
        Task::new(
            "6",
            "Design email templates",
            TaskPriority::Medium,
            "May 29, 2025",
            TaskStatus::InProgress,
        )
        .with_description("Create responsive email templates for the marketing automation system.")
        .with_assignee("Diana Prince")
        .with_project("4", "Marketing Campaign"),
        Task::new(
            "7",
            "User testing sessions",
            TaskPriority::High,
            "May 30, 2025",
            TaskStatus::ToDo,
        )
        .with_description("Conduct user testing sessions with the beta testers to gather feedback.")
        .with_assignee("Emily Davis")
        .with_project("5", "User Research"),
        Task::new(
            "8",
            "Data migration script",
            TaskPriority::High,
            "May 31, 2025",
            TaskStatus::InProgress,
        )
        .with_description("Write the data migration script to transfer data to the new database.")
        .with_assignee("Bob Johnson")
        .with_project("6", "Database Migration"),
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("1", "Website Redesign", 68, "Jun 15, 2025", ProjectStatus::Active)
            .with_description(
                "Complete overhaul of the company website with modern design and improved user experience based on customer feedback.",
            )
            .with_members(["John Doe", "Alice Smith", "Bob Johnson", "Emily Davis"]),
        Project::new("2", "Mobile App Development", 42, "Jul 30, 2025", ProjectStatus::Active)
            .with_description(
                "Creating a cross-platform mobile application with React Native to complement our web services.",
            )
            .with_members(["John Doe", "Charlie Brown", "Diana Prince"]),
        Project::new("3", "API Integration", 95, "May 28, 2025", ProjectStatus::Completed)
            .with_description(
                "Integrate third-party APIs to expand platform functionality and data sources.",
            )
            .with_members(["Bob Johnson", "Emily Davis"]),
        Project::new("4", "Marketing Campaign", 25, "Aug 10, 2025", ProjectStatus::OnHold)
            .with_description(
                "Q2 marketing campaign to increase user acquisition through targeted ads and content marketing.",
            )
            .with_members(["Alice Smith", "Diana Prince", "Frank Castle"]),
        Project::new("5", "User Research", 50, "Jun 22, 2025", ProjectStatus::Active)
            .with_description(
                "Conduct user interviews and surveys to gather feedback on the beta product.",
            )
            .with_members(["Emily Davis", "Charlie Brown"]),
        Project::new("6", "Database Migration", 80, "Jun 05, 2025", ProjectStatus::Active)
            .with_description(
                "Migrate legacy database to a new cloud infrastructure with improved performance.",
            )
            .with_members(["John Doe", "Bob Johnson"]),
    ]
}
