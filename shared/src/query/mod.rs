//! Collection query engine: filter an ordered record collection, then cut
//! one page out of the result.
//!
//! Both steps are pure. Records are borrowed, never cloned or reordered, so
//! the caller's snapshot stays untouched no matter how often a table is
//! re-queried.

use std::borrow::Cow;

pub mod filter;
pub mod page;
pub mod state;

pub use filter::{filter, Constraint, FilterField, FilterInput, FilterSpec, FilterValues, MatchRule};
pub use page::{paginate, Page, PageInfo, PageRequest, PageSize};
pub use state::{TableAction, TableQuery};

/// A row of domain data that the query engine can match against.
pub trait Record {
    /// Every field name a row of this type may expose.
    const FIELDS: &'static [&'static str];

    /// Unique identifier of the row.
    fn id(&self) -> &str;

    /// Match/display value of a field, `None` when the row lacks it.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Whether `name` is a declared field of this record type.
    fn declares(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

impl<R: Record> Record for &R {
    const FIELDS: &'static [&'static str] = R::FIELDS;

    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}
