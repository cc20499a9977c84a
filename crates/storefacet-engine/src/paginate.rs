use std::num::NonZeroUsize;

use serde::Serialize;
use storefacet_core::config::DEFAULT_PAGE_SIZE;
use storefacet_core::{Error, Result};

/// Fixed-size, 1-indexed pages over a filtered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

/// One page of results plus what a pager control needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1 && self.number <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self { page_size: NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1) }
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    pub fn with_page_size(page_size: usize) -> Result<Self> {
        NonZeroUsize::new(page_size)
            .map(Self::new)
            .ok_or_else(|| Error::InvalidArgument("page size must be at least 1".to_string()))
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `ceil(total / page_size)`; zero means "no results".
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size.get())
    }

    /// Items `(n-1)*size .. n*size`. Page 0 and pages past the end are empty.
    pub fn page<'a, T>(&self, items: &'a [T], page_number: usize) -> &'a [T] {
        let size = self.page_size.get();
        let Some(start) = page_number.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }

    pub fn paginate<T: Clone>(&self, items: &[T], page_number: usize) -> Page<T> {
        Page {
            number: page_number,
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
            items: self.page(items, page_number).to_vec(),
        }
    }
}
