//! Filtering, sorting and pagination over the two table collections.
//!
//! Two last-page behaviors coexist on purpose: the name-by-year table
//! back-fills a short last page from the preceding rows so its window always
//! holds `PAGE_SIZE` items, while the search-results list simply shows
//! whatever remains. See `page_slice_backfilled` vs `page_slice`.

use indexmap::IndexMap;

use crate::dataset::{NameRecord, NameYearRecord};

pub const PAGE_SIZE: usize = 10;
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Year,
    Count,
    Name,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Year, SortField::Count, SortField::Name];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Year => "Year",
            SortField::Count => "Count",
            SortField::Name => "Name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Case-insensitive substring filter over the name index. An empty query
/// returns every entry in the index's own (file) order. Callers reset their
/// page to 1 whenever the query changes.
pub fn filter_names<'a>(
    names: &'a IndexMap<String, NameRecord>,
    query: &str,
) -> Vec<(&'a str, &'a NameRecord)> {
    if query.is_empty() {
        return names.iter().map(|(k, v)| (k.as_str(), v)).collect();
    }
    let needle = query.to_lowercase();
    names
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(k, v)| (k.as_str(), v))
        .collect()
}

/// Sort table rows in place. Year and Count compare numerically under
/// `order`. Name compares lexicographically ascending, with `order` applied
/// only to the year tie-break between equal names. The sort is stable, so
/// otherwise-equal rows keep their relative order.
pub fn sort_records(rows: &mut [NameYearRecord], field: SortField, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = match field {
            SortField::Year => a.year.cmp(&b.year),
            SortField::Count => a.count.cmp(&b.count),
            SortField::Name => {
                return match order {
                    SortOrder::Asc => a.name.cmp(&b.name).then(a.year.cmp(&b.year)),
                    SortOrder::Desc => a.name.cmp(&b.name).then(b.year.cmp(&a.year)),
                };
            }
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Out-of-range pages are clamped, never rejected.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        page.clamp(1, total_pages)
    }
}

/// Plain page window: the last page may be short. Used by the search
/// results list.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page = clamp_page(page, total_pages(rows.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    if start >= rows.len() {
        return &[];
    }
    &rows[start..end]
}

/// Name-by-year page window: a short last page borrows the immediately
/// preceding rows, so the result always holds `page_size` items whenever
/// `rows.len() >= page_size`.
pub fn page_slice_backfilled<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page = clamp_page(page, total_pages(rows.len(), page_size));
    let mut start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    if start >= rows.len() {
        return &[];
    }
    if end - start < page_size {
        start = start.saturating_sub(page_size - (end - start));
    }
    &rows[start..end]
}

/// Up to `window` consecutive page numbers centered on `current`, clamped so
/// the window never runs outside `[1, total_pages]`.
pub fn pagination_window(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return Vec::new();
    }
    if total_pages <= window {
        return (1..=total_pages).collect();
    }
    let start = current
        .saturating_sub(window / 2)
        .min(total_pages - window + 1)
        .max(1);
    (start..start + window).collect()
}
