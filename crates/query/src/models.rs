//! Data models for taskboard records
//!
//! Defines the two record shapes the engine works on (tasks and projects),
//! their closed enums, and the due date type used for chronological sorting.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// The shape a record or query belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Task,
    Project,
}

impl RecordKind {
    /// Returns the lowercase name of this shape
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Task => "task",
            RecordKind::Project => "project",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A closed enumeration with a declared order.
///
/// `ALL` lists every variant in the order it ranks when sorting and the order
/// its buckets appear in when grouping.
pub trait DeclaredOrder: Copy + Eq + 'static {
    /// Every variant, in declared order
    const ALL: &'static [Self];

    /// Returns the string representation used in records and queries
    fn as_str(&self) -> &'static str;

    /// Position of this variant in `ALL`
    fn rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|v| v == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Parse an exact string representation
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// String representations of every variant, in declared order
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl DeclaredOrder for TaskPriority {
    // Most urgent first
    const ALL: &'static [Self] = &[TaskPriority::High, TaskPriority::Medium, TaskPriority::Low];

    fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task status
///
/// The declared order is the left-to-right column order of the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Review,
    Done,
}

impl DeclaredOrder for TaskStatus {
    const ALL: &'static [Self] = &[
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to-do",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl DeclaredOrder for ProjectStatus {
    const ALL: &'static [Self] = &[
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats tried, in order, when parsing a due date.
///
/// `%b` only matches abbreviated month names, so full names need their own
/// `%B` entries. `%d` accepts unpadded days.
const DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// A due date as written in the source record.
///
/// The raw text is kept for display; the parsed calendar date (if any) drives
/// ordering. Dates that fail to parse order after every valid date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DueDate {
    raw: String,
    date: Option<NaiveDate>,
}

impl DueDate {
    /// Parse a due date, keeping the raw text even when it is not a valid date
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let date = parse_calendar_date(&raw);
        Self { raw, date }
    }

    /// The text the date was created from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The calendar date, or `None` if the text did not parse
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_valid(&self) -> bool {
        self.date.is_some()
    }

    /// Chronological comparison with unparseable dates ordered last.
    ///
    /// Two unparseable dates compare equal, so a stable sort keeps their
    /// original relative order.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

impl From<String> for DueDate {
    fn from(raw: String) -> Self {
        DueDate::parse(raw)
    }
}

impl From<&str> for DueDate {
    fn from(raw: &str) -> Self {
        DueDate::parse(raw)
    }
}

impl From<DueDate> for String {
    fn from(due: DueDate) -> Self {
        due.raw
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the dataset
    pub id: String,

    /// Task title
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub priority: TaskPriority,

    #[serde(alias = "dueDate")]
    pub due_date: DueDate,

    /// Name of the person the task is assigned to
    #[serde(default, alias = "assigneeName", skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,

    pub status: TaskStatus,

    /// Identifier of the owning project
    #[serde(default, alias = "projectId", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Display name of the owning project
    #[serde(default, alias = "projectName", skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl Task {
    /// Create a new task with required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: TaskPriority,
        due_date: impl Into<DueDate>,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            priority,
            due_date: due_date.into(),
            assignee_name: None,
            status,
            project_id: None,
            project_name: None,
        }
    }

    /// Set the description of this task
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assign this task to someone
    pub fn with_assignee(mut self, name: impl Into<String>) -> Self {
        self.assignee_name = Some(name.into());
        self
    }

    /// Attach this task to a project
    pub fn with_project(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.project_id = Some(id.into());
        self.project_name = Some(name.into());
        self
    }
}

/// A project with its team and completion progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the dataset
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion percentage, 0 to 100
    pub progress: u8,

    #[serde(alias = "dueDate")]
    pub due_date: DueDate,

    /// Team member names, in display order
    #[serde(default, alias = "memberNames")]
    pub member_names: Vec<String>,

    pub status: ProjectStatus,
}

impl Project {
    /// Create a new project with required fields and no members
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        progress: u8,
        due_date: impl Into<DueDate>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            progress,
            due_date: due_date.into(),
            member_names: Vec::new(),
            status,
        }
    }

    /// Set the description of this project
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a team member to this project
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.member_names.push(name.into());
        self
    }

    /// Add multiple team members to this project
    pub fn with_members(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.member_names.extend(names.into_iter().map(|n| n.into()));
        self
    }
}
