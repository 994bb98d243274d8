//! Property tests for the query engine: filtering, sorting and both
//! pagination variants.

use indexmap::IndexMap;
use proptest::prelude::*;

use ui::dataset::{Gender, NameRecord, NameYearRecord};
use ui::query::{
    clamp_page, filter_names, page_slice, page_slice_backfilled, pagination_window, sort_records,
    total_pages, SortField, SortOrder, PAGE_WINDOW,
};

fn rows_strategy() -> impl Strategy<Value = Vec<NameYearRecord>> {
    let row = (
        1900i32..2030,
        prop::sample::select(vec!["Emma", "Noah", "Olivia", "Liam", "Ava"]),
        any::<bool>(),
        0u32..100_000,
    )
        .prop_map(|(year, name, male, count)| NameYearRecord {
            year,
            name: name.to_string(),
            gender: if male { Gender::M } else { Gender::F },
            count,
        });
    prop::collection::vec(row, 0..40)
}

fn field(index: usize) -> SortField {
    SortField::ALL[index % SortField::ALL.len()]
}

proptest! {
    #[test]
    fn window_stays_in_bounds_and_consecutive(current in 0usize..500, total in 0usize..500) {
        let window = pagination_window(current, total, PAGE_WINDOW);
        prop_assert_eq!(window.len(), total.min(PAGE_WINDOW));
        prop_assert!(window.iter().all(|p| *p >= 1 && *p <= total));
        prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn backfilled_pages_are_full_whenever_possible(len in 0usize..200, page in 0usize..40) {
        let rows: Vec<usize> = (0..len).collect();
        let slice = page_slice_backfilled(&rows, page, 10);
        prop_assert_eq!(slice.len(), len.min(10));
        // The window is always a contiguous run of the source rows.
        prop_assert!(slice.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn plain_pages_never_overlap_or_exceed_page_size(len in 0usize..200, page in 0usize..40) {
        let rows: Vec<usize> = (0..len).collect();
        let slice = page_slice(&rows, page, 10);
        prop_assert!(slice.len() <= 10);
        let clamped = clamp_page(page, total_pages(len, 10));
        if let Some(first) = slice.first() {
            prop_assert_eq!(*first, (clamped - 1) * 10);
        }
    }

    #[test]
    fn sorting_is_idempotent(rows in rows_strategy(), field_i in 0usize..3, asc in any::<bool>()) {
        let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
        let mut once = rows;
        sort_records(&mut once, field(field_i), order);
        let mut twice = once.clone();
        sort_records(&mut twice, field(field_i), order);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn name_sort_orders_equal_names_by_year(rows in rows_strategy(), asc in any::<bool>()) {
        let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
        let mut rows = rows;
        sort_records(&mut rows, SortField::Name, order);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].name <= pair[1].name);
            if pair[0].name == pair[1].name {
                match order {
                    SortOrder::Asc => prop_assert!(pair[0].year <= pair[1].year),
                    SortOrder::Desc => prop_assert!(pair[0].year >= pair[1].year),
                }
            }
        }
    }

    #[test]
    fn filter_hits_contain_the_query(
        names in prop::collection::hash_set("[A-Za-z]{2,8}", 1..20),
        query in "[A-Za-z]{0,3}",
    ) {
        let index: IndexMap<String, NameRecord> = names
            .into_iter()
            .map(|name| {
                (
                    name,
                    NameRecord {
                        male: Some(Default::default()),
                        female: None,
                    },
                )
            })
            .collect();

        let hits = filter_names(&index, &query);
        let needle = query.to_lowercase();
        prop_assert!(hits.iter().all(|(name, _)| name.to_lowercase().contains(&needle)));

        // Every skipped name really does not match.
        let hit_names: std::collections::HashSet<&str> =
            hits.iter().map(|(name, _)| *name).collect();
        for name in index.keys() {
            if !hit_names.contains(name.as_str()) {
                prop_assert!(!name.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn empty_query_returns_the_whole_index(
        names in prop::collection::hash_set("[A-Za-z]{2,8}", 0..20),
    ) {
        let index: IndexMap<String, NameRecord> = names
            .into_iter()
            .map(|name| {
                (
                    name,
                    NameRecord {
                        male: None,
                        female: Some(Default::default()),
                    },
                )
            })
            .collect();
        prop_assert_eq!(filter_names(&index, "").len(), index.len());
    }
}
