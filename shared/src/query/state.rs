use log::debug;
use serde::{Deserialize, Serialize};

use super::filter::{filter, FilterField, FilterValues};
use super::page::{paginate, Page, PageRequest, PageSize};
use super::Record;

/// Interactions a data-table page can perform on its query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    SetFilter { key: String, value: String },
    ResetFilters,
    SetPage(usize),
    SetPageSize(PageSize),
}

/// The mutable filter and page position a table page owns across
/// interactions.
///
/// Any change to the filters moves the table back to page 1. Changing the
/// page size keeps the current page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    filters: FilterValues,
    page: usize,
    pub page_size: PageSize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

impl TableQuery {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            filters: FilterValues::new(),
            page: 1,
            page_size,
        }
    }

    /// Current filter values. They change only through [`TableAction`]s so
    /// that every change lands back on page 1.
    pub fn filters(&self) -> &FilterValues {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
            .unwrap_or_else(|_| PageRequest::first(self.page_size))
    }

    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::SetFilter { key, value } => {
                self.filters.set(key, value);
                self.page = 1;
            }
            TableAction::ResetFilters => {
                self.filters.clear();
                self.page = 1;
            }
            TableAction::SetPage(page) => {
                if page >= 1 {
                    self.page = page;
                }
            }
            TableAction::SetPageSize(page_size) => {
                self.page_size = page_size;
            }
        }
    }

    /// Returns the query after `action`, leaving `self` untouched.
    pub fn reduced(&self, action: TableAction) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Filters `records` through `fields`, then cuts out the current page.
    pub fn run<'a, R: Record>(&self, records: &'a [R], fields: &[FilterField]) -> Page<&'a R> {
        let spec = self.filters.to_spec(fields);
        let matched = filter(records, &spec);
        let page = paginate(&matched, self.request());
        debug!(
            "table query: {} of {} rows matched, page {} holds {}",
            page.total_count,
            records.len(),
            page.page,
            page.items.len()
        );
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set_filter(key: &str, value: &str) -> TableAction {
        TableAction::SetFilter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = TableQuery::default();
        query.apply(TableAction::SetPage(3));
        assert_eq!(query.page(), 3);

        query.apply(set_filter("status", "completed"));
        assert_eq!(query.page(), 1);
        assert_eq!(query.filters().get("status"), "completed");
    }

    #[test]
    fn test_repeated_filter_change_from_later_page_resets_page() {
        let mut query = TableQuery::default().reduced(set_filter("status", "pending"));
        query.apply(TableAction::SetPage(3));
        query.apply(set_filter("status", "completed"));
        assert_eq!(query.page(), 1);
        assert_eq!(query.request().page(), 1);
        assert_eq!(query.filters().get("status"), "completed");
    }

    #[test]
    fn test_reset_filters_resets_page() {
        let mut query = TableQuery::default().reduced(set_filter("type", "deposit"));
        query.apply(TableAction::SetPage(2));
        query.apply(TableAction::ResetFilters);
        assert!(query.filters().is_empty());
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_page_size_change_keeps_page() {
        let mut query = TableQuery::default();
        query.apply(TableAction::SetPage(2));
        query.apply(TableAction::SetPageSize(PageSize::try_from(25).unwrap()));
        assert_eq!(query.page(), 2);
        assert_eq!(query.page_size.get(), 25);
    }

    #[test]
    fn test_page_zero_is_ignored() {
        let mut query = TableQuery::default().reduced(TableAction::SetPage(4));
        query.apply(TableAction::SetPage(0));
        assert_eq!(query.page(), 4);
    }

    #[test]
    fn test_reduced_leaves_original_untouched() {
        let query = TableQuery::default();
        let next = query.reduced(TableAction::SetPage(2));
        assert_eq!(query.page(), 1);
        assert_eq!(next.page(), 2);
    }
}
