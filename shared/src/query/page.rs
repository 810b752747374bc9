//! Fixed page sizes, page requests and `paginate`.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

/// Largest number of numbered page buttons a pagination bar shows.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Number of rows per page, restricted to the sizes the table offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const ALLOWED: [PageSize; 4] = [PageSize(5), PageSize(10), PageSize(25), PageSize(50)];
    pub const DEFAULT: PageSize = PageSize(10);

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = SharedError;

    fn try_from(size: usize) -> Result<Self> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|allowed| allowed.0 == size)
            .ok_or_else(|| {
                SharedError::Validation(format!(
                    "page size {} is not one of 5, 10, 25, 50",
                    size
                ))
            })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which slice of a filtered collection to display. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: PageSize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: PageSize) -> Result<Self> {
        if page == 0 {
            return Err(SharedError::Validation(
                "page numbers start at 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn first(page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size.get())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(PageSize::DEFAULT)
    }
}

/// One page of results plus the size of the collection it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: PageSize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of this page, without its items.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.info().total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.info().has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.info().has_next()
    }

    pub fn range_label(&self) -> String {
        self.info().range_label()
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.info().page_numbers()
    }
}

/// What a pagination bar needs to know about a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_count: usize,
    pub page: usize,
    pub page_size: PageSize,
}

impl PageInfo {
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.get())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Pagination bar summary, e.g. `"6 to 8 of 8"`.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "No items".to_string();
        }
        let size = self.page_size.get();
        let from = (self.page.saturating_sub(1).saturating_mul(size) + 1).min(self.total_count);
        let to = self.page.saturating_mul(size).min(self.total_count);
        format!("{} to {} of {}", from, to, self.total_count)
    }

    /// Numbered buttons shown in the pagination bar.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages().min(MAX_PAGE_BUTTONS)
    }
}

/// Cuts the requested page out of `records`. A page past the end yields no
/// items; the request is never clamped.
pub fn paginate<T: Clone>(records: &[T], request: PageRequest) -> Page<T> {
    let items = records
        .iter()
        .skip(request.offset())
        .take(request.page_size.get())
        .cloned()
        .collect();

    Page {
        items,
        total_count: records.len(),
        page: request.page,
        page_size: request.page_size,
    }
}
