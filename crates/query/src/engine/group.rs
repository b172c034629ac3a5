//! Partitioning records into ordered buckets

use serde::Serialize;

use crate::record::Record;

/// One partition of a grouped result, e.g. a board column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<'a, R> {
    /// The group field value shared by every record in this bucket
    pub value: String,
    /// Matching records, in input order
    pub records: Vec<&'a R>,
}

impl<R> Bucket<'_, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Group records by `field` into one bucket per value of `bucket_order`.
///
/// Buckets appear in `bucket_order` order, including empty ones. Records
/// whose value is missing from `bucket_order` are left out.
pub fn group<'a, R, I>(records: I, field: R::Field, bucket_order: &[&str]) -> Vec<Bucket<'a, R>>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut buckets: Vec<Bucket<'a, R>> = bucket_order
        .iter()
        .map(|value| Bucket {
            value: (*value).to_string(),
            records: Vec::new(),
        })
        .collect();

    for record in records {
        let Some(value) = record.field_value(field) else {
            continue;
        };
        if let Some(index) = bucket_order.iter().position(|b| *b == value) {
            buckets[index].records.push(record);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeclaredOrder, Task, TaskPriority, TaskStatus};
    use crate::record::TaskField;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::new(id, id, TaskPriority::Medium, "May 1, 2025", status)
    }

    fn board_tasks() -> Vec<Task> {
        vec![
            task("1", TaskStatus::InProgress),
            task("2", TaskStatus::ToDo),
            task("3", TaskStatus::Review),
            task("4", TaskStatus::ToDo),
            task("5", TaskStatus::Done),
            task("6", TaskStatus::InProgress),
            task("7", TaskStatus::Done),
            task("8", TaskStatus::InProgress),
        ]
    }

    #[test]
    fn test_group_by_status_is_complete_and_ordered() {
        let tasks = board_tasks();
        let order = TaskStatus::names();
        let buckets = group(&tasks, TaskField::Status, &order);

        let values: Vec<&str> = buckets.iter().map(|b| b.value.as_str()).collect();
        assert_eq!(values, vec!["to-do", "in-progress", "review", "done"]);

        let sizes: Vec<usize> = buckets.iter().map(Bucket::len).collect();
        assert_eq!(sizes, vec![2, 3, 1, 2]);
        assert_eq!(sizes.iter().sum::<usize>(), tasks.len());
    }

    #[test]
    fn test_group_keeps_input_order_within_bucket() {
        let tasks = board_tasks();
        let buckets = group(&tasks, TaskField::Status, &TaskStatus::names());
        let in_progress: Vec<&str> = buckets[1].records.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(in_progress, vec!["1", "6", "8"]);
    }

    #[test]
    fn test_group_keeps_empty_bucket() {
        let tasks: Vec<Task> = board_tasks()
            .into_iter()
            .filter(|t| t.status != TaskStatus::Review)
            .collect();
        let buckets = group(&tasks, TaskField::Status, &TaskStatus::names());
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[2].value, "review");
        assert!(buckets[2].is_empty());
    }

    #[test]
    fn test_group_empty_input_yields_all_empty_buckets() {
        let tasks: Vec<Task> = Vec::new();
        let buckets = group(&tasks, TaskField::Priority, &TaskPriority::names());
        let values: Vec<&str> = buckets.iter().map(|b| b.value.as_str()).collect();
        assert_eq!(values, vec!["high", "medium", "low"]);
        assert!(buckets.iter().all(Bucket::is_empty));
    }

    #[test]
    fn test_group_drops_values_outside_bucket_order() {
        let tasks = board_tasks();
        let buckets = group(&tasks, TaskField::Status, &["to-do", "done"]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].len() + buckets[1].len(), 4);
    }

    #[test]
    fn test_group_drops_unset_values() {
        let tasks = vec![
            task("1", TaskStatus::ToDo).with_assignee("Emily Davis"),
            task("2", TaskStatus::ToDo),
        ];
        let buckets = group(&tasks, TaskField::Assignee, &["Emily Davis"]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].len(), 1);
        assert_eq!(buckets[0].records[0].id, "1");
    }

    #[test]
    fn test_bucket_serializes_records() {
        let tasks = vec![task("1", TaskStatus::Done)];
        let buckets = group(&tasks, TaskField::Status, &["done"]);
        let json = serde_json::to_value(&buckets[0]).unwrap();
        assert_eq!(json["value"], "done");
        assert_eq!(json["records"][0]["id"], "1");
        assert_eq!(json["records"][0]["status"], "done");
    }
}
