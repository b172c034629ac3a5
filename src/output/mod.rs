//! Output formatting for tbq
//!
//! Renders query results as aligned tables, board sections or JSON.

use clap::ValueEnum;
use serde::Serialize;
use taskboard_query::{
    Bucket, DashboardSummary, Project, QueryError, QueryOutput, QueryResult, Task,
};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 30;

/// Maximum width for name columns (assignee, members) before truncation
const MAX_NAME_WIDTH: usize = 24;

/// Width of the label column in the summary view
const SUMMARY_LABEL_WIDTH: usize = 20;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Truncate a string to at most `max_width` characters, adding an ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Lay out rows under headers with two-space gutters and a dashed separator.
fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID  Status       Priority  Due           Assignee    Title
/// --  -----------  --------  ------------  ----------  -----------------------
/// 2   to-do        high      May 23, 2025  Alice Smith Fix payment integration
/// ```
pub fn format_task_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.status.to_string(),
                t.priority.to_string(),
                t.due_date.to_string(),
                truncate(t.assignee_name.as_deref().unwrap_or("-"), MAX_NAME_WIDTH),
                truncate(&t.title, MAX_TITLE_WIDTH),
            ]
        })
        .collect();

    format_table(
        &["ID", "Status", "Priority", "Due", "Assignee", "Title"],
        &rows,
    )
}

/// Format projects into an aligned table string.
pub fn format_project_table(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.status.to_string(),
                format!("{}%", p.progress),
                p.due_date.to_string(),
                truncate(&format_members(&p.member_names), MAX_NAME_WIDTH),
                truncate(&p.title, MAX_TITLE_WIDTH),
            ]
        })
        .collect();

    format_table(
        &["ID", "Status", "Progress", "Due", "Members", "Title"],
        &rows,
    )
}

/// Format members as a comma-separated string.
fn format_members(members: &[String]) -> String {
    if members.is_empty() {
        "-".to_string()
    } else {
        members.join(", ")
    }
}

/// Format grouped records as one titled section per bucket.
///
/// Every bucket is printed, empty ones included, headed by its value and
/// record count.
pub fn format_board<R>(buckets: &[Bucket<'_, R>], table: fn(&[&R]) -> String) -> String {
    buckets
        .iter()
        .map(|bucket| {
            format!(
                "{} ({})\n{}",
                bucket.value,
                bucket.len(),
                table(&bucket.records)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format dashboard figures as a label/value listing.
pub fn format_summary(summary: &DashboardSummary) -> String {
    let line = |label: &str, value: String| {
        format!("{:<w$}{}", label, value, w = SUMMARY_LABEL_WIDTH)
    };

    let mut lines = vec![line("Total projects", summary.total_projects.to_string())];
    for count in &summary.projects_by_status {
        lines.push(line(&format!("  {}", count.status), count.count.to_string()));
    }
    lines.push(line("Average progress", format!("{}%", summary.average_progress)));

    lines.push(line("Total tasks", summary.total_tasks.to_string()));
    for count in &summary.tasks_by_status {
        lines.push(line(&format!("  {}", count.status), count.count.to_string()));
    }
    lines.push(line("Pending tasks", summary.pending_tasks.to_string()));
    lines.push(line("Completion rate", format!("{}%", summary.completion_rate)));

    lines.push(line("Team members", summary.team_members.len().to_string()));
    for member in &summary.team_members {
        lines.push(format!("  {}", member));
    }

    lines.join("\n")
}

/// Serialize any output value as pretty JSON.
///
/// # Errors
///
/// Returns `QueryError::EncodeOutput` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> QueryResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| QueryError::EncodeOutput { source })
}

/// Render a task query result in the requested format.
///
/// # Errors
///
/// Returns `QueryError::EncodeOutput` if JSON serialization fails.
pub fn render_tasks(output: &QueryOutput<'_, Task>, format: OutputFormat) -> QueryResult<String> {
    match format {
        OutputFormat::Json => to_json(output),
        OutputFormat::Table => Ok(match output {
            QueryOutput::Flat(tasks) => format_task_table(tasks),
            QueryOutput::Grouped(buckets) => format_board(buckets, format_task_table),
        }),
    }
}

/// Render a project query result in the requested format.
///
/// # Errors
///
/// Returns `QueryError::EncodeOutput` if JSON serialization fails.
pub fn render_projects(
    output: &QueryOutput<'_, Project>,
    format: OutputFormat,
) -> QueryResult<String> {
    match format {
        OutputFormat::Json => to_json(output),
        OutputFormat::Table => Ok(match output {
            QueryOutput::Flat(projects) => format_project_table(projects),
            QueryOutput::Grouped(buckets) => format_board(buckets, format_project_table),
        }),
    }
}

/// Render dashboard figures in the requested format.
///
/// # Errors
///
/// Returns `QueryError::EncodeOutput` if JSON serialization fails.
pub fn render_summary(summary: &DashboardSummary, format: OutputFormat) -> QueryResult<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Table => Ok(format_summary(summary)),
    }
}
