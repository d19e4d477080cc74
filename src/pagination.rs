//! Page-number validation and page windows for paginated list pages.

use crate::compat::String;
use crate::error::{Error, Result};
use crate::query_params::QueryParams;
use core::num::NonZeroUsize;
use core::ops::{Range, RangeInclusive};

/// Query parameter holding the current page number.
pub const PAGE_PARAM: &str = "page";

/// Page number that always resolves to the final page.
pub const LAST_PAGE: &str = "last";

/// Splits `count` items into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: usize,
    per_page: NonZeroUsize,
    orphans: usize,
    allow_empty_first_page: bool,
}

impl Paginator {
    pub fn new(count: usize, per_page: NonZeroUsize) -> Self {
        Self {
            count,
            per_page,
            orphans: 0,
            allow_empty_first_page: true,
        }
    }

    /// Fold up to `orphans` trailing items into the previous page instead of
    /// giving them a page of their own.
    #[must_use]
    pub fn with_orphans(mut self, orphans: usize) -> Self {
        self.orphans = orphans;
        self
    }

    /// Whether page 1 is valid when there are no items (default `true`).
    #[must_use]
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn per_page(&self) -> usize {
        self.per_page.get()
    }

    pub fn num_pages(&self) -> usize {
        if self.count == 0 && !self.allow_empty_first_page {
            return 0;
        }
        let hits = self.count.saturating_sub(self.orphans).max(1);
        hits.div_ceil(self.per_page.get())
    }

    pub fn is_paginated(&self) -> bool {
        self.num_pages() > 1
    }

    /// 1-based page numbers.
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    /// Resolve a page number as received in a request.
    ///
    /// # Errors
    ///
    /// [`Error::PageNotAnInteger`] for anything but an integer or `last`,
    /// [`Error::PageLessThanOne`] below 1 and [`Error::EmptyPage`] past the
    /// last page.
    pub fn validate_number(&self, number: &str) -> Result<usize> {
        let number = number.trim();
        if number == LAST_PAGE {
            return self.validate(self.num_pages());
        }

        match number.parse::<i64>() {
            Ok(n) if n < 1 => Err(Error::PageLessThanOne),
            Ok(n) => self.validate(usize::try_from(n).unwrap_or(usize::MAX)),
            Err(_) => Err(overflow_or_not_an_integer(number)),
        }
    }

    fn validate(&self, number: usize) -> Result<usize> {
        if number < 1 {
            return Err(Error::PageLessThanOne);
        }
        if number > self.num_pages() && !(number == 1 && self.allow_empty_first_page) {
            return Err(Error::EmptyPage);
        }
        Ok(number)
    }

    /// # Errors
    ///
    /// See [`Paginator::validate_number`].
    pub fn page(&self, number: &str) -> Result<Page> {
        let number = self.validate_number(number)?;
        Ok(Page {
            number,
            paginator: *self,
        })
    }

    /// # Errors
    ///
    /// [`Error::PageLessThanOne`] for 0, [`Error::EmptyPage`] past the last page.
    pub fn page_number(&self, number: usize) -> Result<Page> {
        let number = self.validate(number)?;
        Ok(Page {
            number,
            paginator: *self,
        })
    }

    /// Page named by the last `page` parameter, page 1 when it is missing or empty.
    ///
    /// # Errors
    ///
    /// See [`Paginator::validate_number`].
    pub fn page_from_query(&self, query: &QueryParams) -> Result<Page> {
        let number = query
            .get_last(PAGE_PARAM)
            .filter(|number| !number.is_empty())
            .unwrap_or("1");
        self.page(number)
    }
}

/// Integers too large for `i64` are still integers: huge positive numbers
/// are past the end, huge negative ones are below 1.
fn overflow_or_not_an_integer(number: &str) -> Error {
    let (negative, digits) = match number.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        Error::PageNotAnInteger
    } else if negative {
        Error::PageLessThanOne
    } else {
        Error::EmptyPage
    }
}

/// One validated page of a [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    paginator: Paginator,
}

impl Page {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// 0-based item window of this page. The last page absorbs orphans.
    pub fn range(&self) -> Range<usize> {
        let per_page = self.paginator.per_page();
        let bottom = (self.number - 1) * per_page;
        let mut top = bottom.saturating_add(per_page);
        if top.saturating_add(self.paginator.orphans) >= self.paginator.count {
            top = self.paginator.count;
        }
        bottom..top
    }

    /// Items of this page out of the full list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        items.get(start..end).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.range().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_next(&self) -> bool {
        self.number < self.paginator.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then_some(self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then_some(self.number - 1)
    }

    /// 1-based index of the first item on this page, 0 for an empty list.
    pub fn start_index(&self) -> usize {
        if self.paginator.count == 0 {
            return 0;
        }
        self.paginator.per_page() * (self.number - 1) + 1
    }

    /// 1-based index of the last item on this page.
    pub fn end_index(&self) -> usize {
        if self.number == self.paginator.num_pages() {
            return self.paginator.count;
        }
        self.number * self.paginator.per_page()
    }

    /// `?query` linking to the next page, keeping every other parameter.
    pub fn next_link(&self, query: &QueryParams) -> Option<String> {
        self.next_page_number()
            .map(|number| page_link(query, number))
    }

    /// `?query` linking to the previous page, keeping every other parameter.
    pub fn previous_link(&self, query: &QueryParams) -> Option<String> {
        self.previous_page_number()
            .map(|number| page_link(query, number))
    }
}

impl core::fmt::Display for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "<Page {} of {}>",
            self.number,
            self.paginator.num_pages()
        )
    }
}

/// `?query` for `number` with the rest of `query` preserved.
pub fn page_link(query: &QueryParams, number: usize) -> String {
    query.transform([(PAGE_PARAM, number)]).serialize()
}
