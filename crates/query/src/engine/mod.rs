//! The list query engine
//!
//! Pure filter → sort → group pipeline over borrowed record slices. Nothing
//! here mutates its input or keeps state between calls; every stage returns
//! a new vector of references into the caller's records.

mod filter;
mod group;
mod sort;

pub use filter::{filter, matches_search};
pub use group::{Bucket, group};
pub use sort::{compare_titles, sort};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::QueryResult;
use crate::query::{Query, ResolvedQuery};
use crate::record::{Record, RecordField, RecordSortKey};

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutput<'a, R> {
    /// Filtered and sorted records
    Flat(Vec<&'a R>),
    /// Filtered and sorted records partitioned into ordered buckets
    Grouped(Vec<Bucket<'a, R>>),
}

impl<'a, R> QueryOutput<'a, R> {
    /// Total number of records across the output
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::Flat(records) => records.len(),
            QueryOutput::Grouped(buckets) => buckets.iter().map(Bucket::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records in output order (bucket by bucket when grouped)
    pub fn records(&self) -> Vec<&'a R> {
        match self {
            QueryOutput::Flat(records) => records.clone(),
            QueryOutput::Grouped(buckets) => buckets
                .iter()
                .flat_map(|b| b.records.iter().copied())
                .collect(),
        }
    }

    /// The buckets, if the query was grouped
    pub fn buckets(&self) -> Option<&[Bucket<'a, R>]> {
        match self {
            QueryOutput::Flat(_) => None,
            QueryOutput::Grouped(buckets) => Some(buckets),
        }
    }
}

/// Run a query over a record collection.
///
/// Validates the whole query first, then filters, sorts and (if a group key
/// is set) groups. Grouping after the global sort keeps each bucket in sort
/// order.
///
/// # Errors
///
/// Returns `QueryError::InvalidQuery` if the query references a field or key
/// the record shape does not define. Nothing is produced in that case.
pub fn query<'a, R: Record>(records: &'a [R], query: &Query) -> QueryResult<QueryOutput<'a, R>> {
    let resolved = query.resolve::<R>()?;
    Ok(run_resolved(records, &resolved))
}

/// Run a query that has already been validated against `R`
pub fn run_resolved<'a, R: Record>(
    records: &'a [R],
    resolved: &ResolvedQuery<R>,
) -> QueryOutput<'a, R> {
    debug!("Running {} query over {} records", R::KIND, records.len());
    trace!("Resolved query: {:?}", resolved);

    let filtered = filter::apply_filter(records, &resolved.search_text, &resolved.filters);
    debug!("Filter kept {} of {} records", filtered.len(), records.len());

    let sorted = sort(filtered, resolved.sort_key);
    debug!("Sorted by {}", resolved.sort_key.as_str());

    match &resolved.group {
        Some(spec) => {
            let buckets = group(sorted, spec.field, &spec.bucket_order);
            debug!(
                "Grouped by {} into {} buckets",
                spec.field.as_str(),
                buckets.len()
            );
            QueryOutput::Grouped(buckets)
        }
        None => QueryOutput::Flat(sorted),
    }
}

/// Query view over a borrowed record collection
///
/// Holds no state beyond the borrowed slice, so one engine can serve any
/// number of queries, from any number of threads.
#[derive(Debug)]
pub struct ListQueryEngine<'a, R> {
    records: &'a [R],
}

// Manual impls: a derive would demand `R: Copy`
impl<R> Clone for ListQueryEngine<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ListQueryEngine<'_, R> {}

impl<'a, R: Record> ListQueryEngine<'a, R> {
    /// Create an engine over the given records
    pub fn new(records: &'a [R]) -> Self {
        Self { records }
    }

    /// The records this engine reads from
    pub fn records(&self) -> &'a [R] {
        self.records
    }

    /// Filter by search text and named field filters
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidQuery` for an unknown filter field.
    pub fn filter(
        &self,
        search_text: &str,
        field_filters: &crate::query::FieldFilters,
    ) -> QueryResult<Vec<&'a R>> {
        filter(self.records, search_text, field_filters)
    }

    /// Sort every record by `key`
    pub fn sort(&self, key: R::SortKey) -> Vec<&'a R> {
        sort(self.records, key)
    }

    /// Group every record by `field` into `bucket_order` buckets
    pub fn group(&self, field: R::Field, bucket_order: &[&str]) -> Vec<Bucket<'a, R>> {
        group(self.records, field, bucket_order)
    }

    /// Run a full query
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidQuery` if the query does not fit `R`.
    pub fn run(&self, q: &Query) -> QueryResult<QueryOutput<'a, R>> {
        query(self.records, q)
    }
}
