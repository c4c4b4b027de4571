//! Page indexing and the pagination control model

use std::fmt;

/// 0-based page index used throughout the client.
///
/// The gateway counts pages from 1; [`PageIndex::api_page`] is the only
/// place the two conventions meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PageIndex(u32);

impl PageIndex {
    /// The first page
    pub const FIRST: Self = Self(0);

    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Page number as the gateway expects it
    #[must_use]
    pub const fn api_page(self) -> u32 {
        self.0.saturating_add(1)
    }

    /// Previous page, if any
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// Next page, if it exists within `total_pages`
    #[must_use]
    pub const fn next(self, total_pages: u32) -> Option<Self> {
        if self.0.saturating_add(1) < total_pages {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_page())
    }
}

/// Up to this many pages every page gets an indicator
pub const MAX_INDICATORS: u32 = 9;
/// Neighbours shown on each side of the current page once windowed
const WINDOW_RADIUS: u32 = 2;

/// One clickable page indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub index: PageIndex,
    pub active: bool,
    /// Pages between the previous indicator and this one are hidden
    pub gap_before: bool,
}

/// The pagination control is only shown when there is more than one page.
#[must_use]
pub const fn should_paginate(total_pages: u32) -> bool {
    total_pages > 1
}

/// Indicators for the pagination control, with exactly one active entry when
/// `current` is in range.
///
/// Every page is listed up to [`MAX_INDICATORS`] pages. Beyond that the list
/// is the first page, the last page and a window around `current`, so its
/// length stays bounded whatever total the server reports.
#[must_use]
pub fn page_indicators(total_pages: u32, current: PageIndex) -> Vec<PageIndicator> {
    let Some(last) = total_pages.checked_sub(1) else {
        return Vec::new();
    };

    let pages: Vec<u32> = if total_pages <= MAX_INDICATORS {
        (0..total_pages).collect()
    } else {
        let center = current.get().min(last);
        let start = center.saturating_sub(WINDOW_RADIUS);
        let end = center.saturating_add(WINDOW_RADIUS).min(last);

        let mut pages = Vec::with_capacity(2 * WINDOW_RADIUS as usize + 3);
        if start > 0 {
            pages.push(0);
        }
        pages.extend(start..=end);
        if end < last {
            pages.push(last);
        }
        pages
    };

    let mut previous: Option<u32> = None;
    pages
        .into_iter()
        .map(|page| {
            let gap_before = previous.is_some_and(|prev| page > prev + 1);
            previous = Some(page);
            let index = PageIndex::new(page);
            PageIndicator {
                index,
                active: index == current,
                gap_before,
            }
        })
        .collect()
}
