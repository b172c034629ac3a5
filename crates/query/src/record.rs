//! Record shapes as seen by the query engine
//!
//! Each record type names its filterable fields and its sort keys as closed
//! enums. Query strings are resolved to these at the call boundary, so the
//! engine itself never sees an unknown field.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::engine::compare_titles;
use crate::models::{
    DeclaredOrder, Project, ProjectStatus, RecordKind, Task, TaskPriority, TaskStatus,
};

/// A categorical field a query can filter or group by
pub trait RecordField: Copy + Eq + Debug + 'static {
    /// Resolve a field name (including accepted aliases)
    fn parse(name: &str) -> Option<Self>;

    /// Canonical field name
    fn as_str(&self) -> &'static str;

    /// Every legal value in declared order, or `None` for open-ended fields
    /// that cannot be grouped.
    fn bucket_order(&self) -> Option<Vec<&'static str>>;

    /// Canonical names of every field of this shape
    fn names() -> &'static [&'static str];
}

/// A key a query can sort by
pub trait RecordSortKey: Copy + Eq + Debug + Default + 'static {
    /// Resolve a sort key name (including accepted aliases)
    fn parse(name: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;

    /// Canonical names of every sort key of this shape
    fn names() -> &'static [&'static str];
}

/// A record the engine can filter, sort and group
pub trait Record: Debug {
    type Field: RecordField;
    type SortKey: RecordSortKey;

    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> Option<&str>;

    /// Value of a categorical field, `None` when the record leaves it unset
    fn field_value(&self, field: Self::Field) -> Option<&str>;

    /// Compare two records under a sort key. Must be a total order.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Filterable fields of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Status,
    Priority,
    Assignee,
    Project,
}

impl RecordField for TaskField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "status" => Some(TaskField::Status),
            "priority" => Some(TaskField::Priority),
            "assignee" | "assigneeName" | "assignee_name" => Some(TaskField::Assignee),
            "project" | "projectName" | "project_name" => Some(TaskField::Project),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            TaskField::Status => "status",
            TaskField::Priority => "priority",
            TaskField::Assignee => "assignee",
            TaskField::Project => "project",
        }
    }

    fn bucket_order(&self) -> Option<Vec<&'static str>> {
        match self {
            TaskField::Status => Some(TaskStatus::names()),
            TaskField::Priority => Some(TaskPriority::names()),
            TaskField::Assignee | TaskField::Project => None,
        }
    }

    fn names() -> &'static [&'static str] {
        &["status", "priority", "assignee", "project"]
    }
}

/// Sort keys for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskSortKey {
    #[default]
    DueDate,
    Priority,
    Title,
}

impl RecordSortKey for TaskSortKey {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "dueDate" | "due_date" | "due-date" => Some(TaskSortKey::DueDate),
            "priority" => Some(TaskSortKey::Priority),
            "title" => Some(TaskSortKey::Title),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            TaskSortKey::DueDate => "dueDate",
            TaskSortKey::Priority => "priority",
            TaskSortKey::Title => "title",
        }
    }

    fn names() -> &'static [&'static str] {
        &["dueDate", "priority", "title"]
    }
}

impl Record for Task {
    type Field = TaskField;
    type SortKey = TaskSortKey;

    const KIND: RecordKind = RecordKind::Task;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn field_value(&self, field: TaskField) -> Option<&str> {
        match field {
            TaskField::Status => Some(self.status.as_str()),
            TaskField::Priority => Some(self.priority.as_str()),
            TaskField::Assignee => self.assignee_name.as_deref(),
            TaskField::Project => self.project_name.as_deref(),
        }
    }

    fn compare_by(&self, other: &Self, key: TaskSortKey) -> Ordering {
        match key {
            TaskSortKey::DueDate => self.due_date.cmp_chronological(&other.due_date),
            TaskSortKey::Priority => self.priority.rank().cmp(&other.priority.rank()),
            TaskSortKey::Title => compare_titles(&self.title, &other.title),
        }
    }
}

/// Filterable fields of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Status,
}

impl RecordField for ProjectField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "status" => Some(ProjectField::Status),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Status => "status",
        }
    }

    fn bucket_order(&self) -> Option<Vec<&'static str>> {
        match self {
            ProjectField::Status => Some(ProjectStatus::names()),
        }
    }

    fn names() -> &'static [&'static str] {
        &["status"]
    }
}

/// Sort keys for projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectSortKey {
    #[default]
    Progress,
    DueDate,
    Title,
}

impl RecordSortKey for ProjectSortKey {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "progress" => Some(ProjectSortKey::Progress),
            "dueDate" | "due_date" | "due-date" => Some(ProjectSortKey::DueDate),
            "title" | "name" => Some(ProjectSortKey::Title),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProjectSortKey::Progress => "progress",
            ProjectSortKey::DueDate => "dueDate",
            ProjectSortKey::Title => "title",
        }
    }

    fn names() -> &'static [&'static str] {
        &["progress", "dueDate", "title"]
    }
}

impl Record for Project {
    type Field = ProjectField;
    type SortKey = ProjectSortKey;

    const KIND: RecordKind = RecordKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn field_value(&self, field: ProjectField) -> Option<&str> {
        match field {
            ProjectField::Status => Some(self.status.as_str()),
        }
    }

    fn compare_by(&self, other: &Self, key: ProjectSortKey) -> Ordering {
        match key {
            // Highest completion first
            ProjectSortKey::Progress => other.progress.cmp(&self.progress),
            ProjectSortKey::DueDate => self.due_date.cmp_chronological(&other.due_date),
            ProjectSortKey::Title => compare_titles(&self.title, &other.title),
        }
    }
}
