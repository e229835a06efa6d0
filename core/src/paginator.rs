use crate::error::{PaginatorError, Result};
use std::ops::RangeInclusive;

pub const DEFAULT_ENTRIES_PER_PAGE: u64 = 10;

/// Pagination state over a set of `total_entries` items split into pages of
/// `entries_per_page`. Pages are numbered from 1, indices from 0.
///
/// `current_page` is kept inside `[1, last_page]` after every mutation. With
/// zero entries `last_page` is 0 and the current page collapses to 0 as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paginator {
    total_entries: u64,
    entries_per_page: u64,
    current_page: u64,
}

fn check_total_entries(value: i64) -> Result<u64> {
    if value < 0 {
        log::warn!("rejected totalEntries = {}", value);
        return Err(PaginatorError::invalid("totalEntries", value));
    }
    Ok(value as u64)
}

fn check_entries_per_page(value: i64) -> Result<u64> {
    if value < 1 {
        log::warn!("rejected entriesPerPage = {}", value);
        return Err(PaginatorError::invalid("entriesPerPage", value));
    }
    Ok(value as u64)
}

impl Paginator {
    /// `current_page` defaults to 1 and is clamped like [`Paginator::set_current_page`].
    pub fn new(total_entries: i64, entries_per_page: i64, current_page: Option<i64>) -> Result<Self> {
        let mut paginator = Paginator {
            total_entries: check_total_entries(total_entries)?,
            entries_per_page: check_entries_per_page(entries_per_page)?,
            current_page: 0,
        };
        paginator.set_current_page(current_page.unwrap_or(1));
        Ok(paginator)
    }

    pub fn total_entries(&self) -> u64 {
        self.total_entries
    }

    pub fn entries_per_page(&self) -> u64 {
        self.entries_per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// On error the paginator is left unchanged.
    pub fn set_total_entries(&mut self, total_entries: i64) -> Result<u64> {
        self.total_entries = check_total_entries(total_entries)?;
        self.reclamp_current_page();
        Ok(self.total_entries)
    }

    /// On error the paginator is left unchanged.
    pub fn set_entries_per_page(&mut self, entries_per_page: i64) -> Result<u64> {
        self.entries_per_page = check_entries_per_page(entries_per_page)?;
        self.reclamp_current_page();
        Ok(self.entries_per_page)
    }

    /// Moves to `page_no`, clamped into `[1, last_page]`. Never fails.
    pub fn set_current_page(&mut self, page_no: i64) -> u64 {
        let page = self.clamp_page(page_no);
        if page as i64 != page_no {
            log::debug!(
                "page {} out of range, clamped to {} (last page {})",
                page_no,
                page,
                self.last_page()
            );
        }
        self.current_page = page;
        page
    }

    fn clamp_page(&self, page_no: i64) -> u64 {
        let last = self.last_page();
        if last == 0 {
            return 0;
        }
        if page_no < 1 {
            1
        } else {
            (page_no as u64).min(last)
        }
    }

    fn reclamp_current_page(&mut self) {
        let before = self.current_page;
        self.current_page = self.clamp_page(before as i64);
        if before != self.current_page {
            log::trace!("current page re-clamped {} -> {}", before, self.current_page);
        }
    }

    pub fn last_page(&self) -> u64 {
        self.total_entries.div_ceil(self.entries_per_page)
    }

    /// Entries on the current page. On the last page this is the remainder
    /// `total_entries % entries_per_page`, which is 0 when the total is an
    /// exact multiple of the page size.
    pub fn entries_on_this_page(&self) -> u64 {
        if self.current_page != self.last_page() {
            self.entries_per_page
        } else {
            self.total_entries % self.entries_per_page
        }
    }

    pub fn previous_page(&self) -> Option<u64> {
        self.current_page.checked_sub(1).filter(|page| *page > 0)
    }

    pub fn next_page(&self) -> Option<u64> {
        let next = self.current_page + 1;
        (next <= self.last_page()).then_some(next)
    }

    pub fn is_first_page(&self) -> bool {
        self.previous_page().is_none()
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page().is_none()
    }

    /// Zero-based index of the first entry on this page.
    pub fn first_index(&self) -> i64 {
        (self.current_page as i64 - 1) * self.entries_per_page as i64
    }

    /// Zero-based index of the last entry on this page.
    pub fn last_index(&self) -> i64 {
        let end = self
            .first_index()
            .saturating_add(self.entries_per_page as i64 - 1);
        end.min(self.total_entries as i64 - 1)
    }

    pub fn first_item(&self) -> i64 {
        self.first_index() + 1
    }

    pub fn last_item(&self) -> i64 {
        self.last_index() + 1
    }

    pub fn pages(&self) -> RangeInclusive<u64> {
        1..=self.last_page()
    }

    pub fn at_page(&self, page_no: i64) -> Self {
        let mut paginator = *self;
        paginator.set_current_page(page_no);
        paginator
    }

    /// Borrows `entries_on_this_page` items starting at `first_index`.
    /// A collection shorter than `total_entries` yields a truncated slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let first = self.first_index();
        let len = self.entries_on_this_page() as usize;
        if first < 0 || len == 0 {
            return &[];
        }
        let start = (first as usize).min(items.len());
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }

    pub fn slice_to_vec<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.slice(items).to_vec()
    }
}
