//! The embedded datasets must load and hold the invariants the engines
//! lean on: gapless years, cross-file name consistency, ascending series.

use ui::dataset;

#[test]
fn embedded_datasets_load() {
    let index = dataset::index().expect("embedded dataset should load");
    assert!(!index.name_by_year().is_empty());
    assert!(!index.names().is_empty());
    assert!(index.year_count() > 0);
}

#[test]
fn year_axis_is_gapless_and_indexable() {
    let index = dataset::index().expect("embedded dataset should load");
    for i in 0..index.year_count() {
        assert_eq!(index.year_at(i), Some(index.first_year() + i as i32));
        assert!(index.word_counts_at(i).is_some());
    }
    assert_eq!(index.year_at(index.year_count()), None);
}

#[test]
fn name_by_year_rows_resolve_in_the_name_index() {
    let index = dataset::index().expect("embedded dataset should load");
    for record in index.name_by_year() {
        let name = index
            .name(&record.name)
            .unwrap_or_else(|| panic!("{} missing from names_data", record.name));
        let series = name
            .series(record.gender)
            .unwrap_or_else(|| panic!("{} lacks a {} series", record.name, record.gender));
        let point = series
            .points
            .iter()
            .find(|p| p.year == record.year)
            .unwrap_or_else(|| panic!("{} has no {} point", record.name, record.year));
        assert_eq!(point.count, record.count);
    }
}

#[test]
fn word_cloud_names_resolve_in_the_name_index() {
    let index = dataset::index().expect("embedded dataset should load");
    for i in 0..index.year_count() {
        let (year, counts) = index.word_counts_at(i).expect("snapshot in range");
        assert!(!counts.is_empty(), "empty snapshot for {year}");
        for name in counts.keys() {
            assert!(
                index.name(name).is_some(),
                "{name} ({year}) missing from names_data"
            );
        }
    }
}

#[test]
fn gender_series_are_strictly_ascending() {
    let index = dataset::index().expect("embedded dataset should load");
    for (name, record) in index.names() {
        for gender in record.genders() {
            let points = &record.series(gender).expect("series present").points;
            assert!(
                points.windows(2).all(|w| w[0].year < w[1].year),
                "{name} ({gender}) out of order"
            );
        }
    }
}
