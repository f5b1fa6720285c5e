use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Postings shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Already on the first page")]
    BeforeFirstPage,

    #[error("Page {page} is the last page for {total} results")]
    PastLastPage { page: u32, total: usize },

    #[error("Pages are numbered from 1")]
    ZeroPage,
}

/// Which way to move through the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Previous,
}

/// The page the user is looking at. Always 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageState {
    current_page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

impl PageState {
    pub fn first() -> Self {
        Self { current_page: 1 }
    }

    pub fn new(current_page: u32) -> Result<Self, PageError> {
        if current_page == 0 {
            return Err(PageError::ZeroPage);
        }
        Ok(Self { current_page })
    }

    pub fn current(self) -> u32 {
        self.current_page
    }

    pub fn has_previous(self) -> bool {
        self.current_page > 1
    }

    /// True while the end of the current page lies before `total`.
    pub fn has_next(self, total: usize) -> bool {
        (self.current_page as usize).saturating_mul(PAGE_SIZE) < total
    }

    pub fn previous(self) -> Result<Self, PageError> {
        if !self.has_previous() {
            return Err(PageError::BeforeFirstPage);
        }
        Ok(Self {
            current_page: self.current_page - 1,
        })
    }

    pub fn next(self, total: usize) -> Result<Self, PageError> {
        if !self.has_next(total) {
            return Err(PageError::PastLastPage {
                page: self.current_page,
                total,
            });
        }
        Ok(Self {
            current_page: self.current_page + 1,
        })
    }

    pub fn step(self, direction: Direction, total: usize) -> Result<Self, PageError> {
        match direction {
            Direction::Next => self.next(total),
            Direction::Previous => self.previous(),
        }
    }

    /// The slice of `items` this page covers.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        paginate(items, self.current_page, PAGE_SIZE)
    }
}

impl TryFrom<u32> for PageState {
    type Error = PageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageState::new(value)
    }
}

impl From<PageState> for u32 {
    fn from(page: PageState) -> Self {
        page.current_page
    }
}

/// Returns `items[(page - 1) * page_size .. page * page_size]`, clamped to the
/// collection. Pages past the end (and page 0) are empty.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
