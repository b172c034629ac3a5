//! Query description and validation
//!
//! A `Query` is the untyped description of a view the presentation layer
//! wants: search text, field filters, sort key and group key, all by name.
//! `Query::resolve` checks it against one record shape and produces a
//! `ResolvedQuery` the engine can run without further validation.

use std::collections::BTreeMap;

use crate::error::{QueryError, QueryResult};
use crate::record::{Record, RecordField, RecordSortKey};

/// Filter value that imposes no constraint
pub const ALL_SENTINEL: &str = "all";

/// Accepted value for one field filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// No constraint on the field
    #[default]
    All,
    /// The field must equal this value exactly
    Exactly(String),
}

impl FilterValue {
    /// Parse a filter value, treating the `"all"` sentinel as no constraint
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Exactly(value)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Whether a record's field value passes this filter.
    ///
    /// An unset field never equals a concrete value.
    pub fn accepts(&self, field_value: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Exactly(expected) => field_value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::parse(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::parse(value)
    }
}

/// Field filters keyed by field name
pub type FieldFilters = BTreeMap<String, FilterValue>;

/// A requested view of a record collection
///
/// Field filters use AND semantics across fields. A missing sort key means
/// the shape's default key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Case-insensitive text matched against title and description
    pub search_text: String,
    /// Field name to accepted value
    pub field_filters: FieldFilters,
    /// Sort key name, `None` for the shape default
    pub sort_key: Option<String>,
    /// Field name to group by
    pub group_key: Option<String>,
}

impl Query {
    /// Create a query that matches everything in default order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Add a field filter; `"all"` leaves the field unconstrained
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field_filters.insert(field.into(), value.into());
        self
    }

    /// Sort by the named key
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Group the result by the named field
    pub fn group_by(mut self, field: impl Into<String>) -> Self {
        self.group_key = Some(field.into());
        self
    }

    /// Validate this query against a record shape.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidQuery` if a filter field, the sort key or
    /// the group key is not defined for `R`, or if the group field is
    /// open-ended.
    pub fn resolve<R: Record>(&self) -> QueryResult<ResolvedQuery<R>> {
        let filters = resolve_filters::<R>(&self.field_filters)?;

        let sort_key = match &self.sort_key {
            Some(name) => R::SortKey::parse(name).ok_or_else(|| {
                QueryError::invalid_query(
                    R::KIND,
                    format!(
                        "unknown sort key '{}'. Valid keys: {}",
                        name,
                        R::SortKey::names().join(", ")
                    ),
                )
            })?,
            None => R::SortKey::default(),
        };

        let group = match &self.group_key {
            Some(name) => Some(resolve_group::<R>(name)?),
            None => None,
        };

        Ok(ResolvedQuery {
            search_text: self.search_text.clone(),
            filters,
            sort_key,
            group,
        })
    }
}

/// A field filter constraint resolved against a record shape
pub type FieldConstraint<F> = (F, FilterValue);

/// Resolve named field filters, dropping the ones set to `"all"`.
///
/// Every name is checked, including those set to `"all"`, so a misspelled
/// field is reported even when it would not constrain anything.
pub(crate) fn resolve_filters<R: Record>(
    field_filters: &FieldFilters,
) -> QueryResult<Vec<FieldConstraint<R::Field>>> {
    let mut constraints = Vec::new();
    for (name, value) in field_filters {
        let field = R::Field::parse(name).ok_or_else(|| {
            QueryError::invalid_query(
                R::KIND,
                format!(
                    "unknown field '{}'. Valid fields: {}",
                    name,
                    R::Field::names().join(", ")
                ),
            )
        })?;
        if !value.is_all() {
            constraints.push((field, value.clone()));
        }
    }
    Ok(constraints)
}

fn resolve_group<R: Record>(name: &str) -> QueryResult<GroupSpec<R::Field>> {
    let field = R::Field::parse(name).ok_or_else(|| {
        QueryError::invalid_query(
            R::KIND,
            format!(
                "unknown group field '{}'. Valid fields: {}",
                name,
                R::Field::names().join(", ")
            ),
        )
    })?;
    let bucket_order = field.bucket_order().ok_or_else(|| {
        QueryError::invalid_query(
            R::KIND,
            format!("field '{}' has no fixed set of values to group by", field.as_str()),
        )
    })?;
    Ok(GroupSpec {
        field,
        bucket_order,
    })
}

/// Grouping request resolved against a record shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec<F> {
    pub field: F,
    /// Every legal value of `field`, in declared order
    pub bucket_order: Vec<&'static str>,
}

/// A query validated against record shape `R`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery<R: Record> {
    pub search_text: String,
    /// Concrete field constraints (the `"all"` entries are gone)
    pub filters: Vec<FieldConstraint<R::Field>>,
    pub sort_key: R::SortKey,
    pub group: Option<GroupSpec<R::Field>>,
}
