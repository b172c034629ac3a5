//! Search and field filtering
//!
//! A record passes when it matches the search text and every concrete field
//! constraint. Input order is preserved.

use crate::error::QueryResult;
use crate::query::{FieldConstraint, FieldFilters, resolve_filters};
use crate::record::Record;

/// Filter records by search text and named field filters.
///
/// # Arguments
///
/// * `records` - Records to filter, in display order
/// * `search_text` - Case-insensitive substring matched against title and
///   description; empty matches everything
/// * `field_filters` - Field name to accepted value (`"all"` for none)
///
/// # Errors
///
/// Returns `QueryError::InvalidQuery` if a filter names a field the record
/// shape does not define. No record is examined in that case.
pub fn filter<'a, R, I>(
    records: I,
    search_text: &str,
    field_filters: &FieldFilters,
) -> QueryResult<Vec<&'a R>>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let constraints = resolve_filters::<R>(field_filters)?;
    Ok(apply_filter(records, search_text, &constraints))
}

/// Filter with constraints that are already resolved against `R`
pub(crate) fn apply_filter<'a, R, I>(
    records: I,
    search_text: &str,
    constraints: &[FieldConstraint<R::Field>],
) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = search_text.to_lowercase();
    records
        .into_iter()
        .filter(|record| contains_needle(*record, &needle))
        .filter(|record| {
            constraints
                .iter()
                .all(|(field, value)| value.accepts(record.field_value(*field)))
        })
        .collect()
}

/// Whether a record's title or description contains `search_text`, ignoring case.
///
/// Empty search text matches every record. A missing description counts as
/// empty text.
pub fn matches_search<R: Record>(record: &R, search_text: &str) -> bool {
    contains_needle(record, &search_text.to_lowercase())
}

/// `needle` must already be lowercase
fn contains_needle<R: Record>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title().to_lowercase().contains(needle)
        || record
            .description()
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
}
