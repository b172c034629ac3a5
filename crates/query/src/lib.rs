//! Query engine for taskboard
//!
//! Filters, sorts and groups in-memory task and project collections for the
//! dashboard views. The engine is pure: it borrows its input, returns new
//! vectors of references, and keeps no state between calls.
//!
//! ```rust
//! use taskboard_query::{Dataset, Query, query};
//!
//! let dataset = Dataset::sample();
//! let board = query(
//!     &dataset.tasks,
//!     &Query::new().with_filter("priority", "high").group_by("status"),
//! )
//! .unwrap();
//!
//! let columns: Vec<&str> = board
//!     .buckets()
//!     .unwrap()
//!     .iter()
//!     .map(|b| b.value.as_str())
//!     .collect();
//! assert_eq!(columns, ["to-do", "in-progress", "review", "done"]);
//! ```

pub mod dataset;
pub mod engine;
pub mod error;
pub mod models;
pub mod query;
pub mod record;
pub mod summary;

pub use dataset::Dataset;
pub use engine::{
    Bucket, ListQueryEngine, QueryOutput, filter, group, matches_search, query, run_resolved,
    sort,
};
pub use error::{QueryError, QueryResult};
pub use models::{
    DeclaredOrder, DueDate, Project, ProjectStatus, RecordKind, Task, TaskPriority, TaskStatus,
};
pub use query::{ALL_SENTINEL, FieldFilters, FilterValue, Query, ResolvedQuery};
pub use record::{
    ProjectField, ProjectSortKey, Record, RecordField, RecordSortKey, TaskField, TaskSortKey,
};
pub use summary::{DashboardSummary, StatusCount};

// Records and queries are shared freely across concurrent callers
static_assertions::assert_impl_all!(Task: Send, Sync);
static_assertions::assert_impl_all!(Project: Send, Sync);
static_assertions::assert_impl_all!(Query: Send, Sync);
static_assertions::assert_impl_all!(ListQueryEngine<'static, Task>: Send, Sync, Copy);
static_assertions::assert_impl_all!(QueryOutput<'static, Project>: Send, Sync);
