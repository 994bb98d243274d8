//! Embedded dataset loading and the read-only index every view queries.
//!
//! The three documents are parsed and validated exactly once, behind a
//! process-wide `Lazy`. A malformed dataset is a startup precondition
//! violation: `index()` keeps returning the same error and the shell refuses
//! to render any view. There is no partial-data mode and no mutation API.

mod records;

pub use records::{Gender, GenderSeries, NameRecord, NameYearRecord, SeriesPoint};

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use thiserror::Error;

const NAME_BY_YEAR_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/name_by_year.json"));
const NAME_COUNTS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/name_counts_per_year.json"
));
const NAMES_DATA_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/names_data.json"));

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file} contains no entries")]
    Empty { file: &'static str },
    #[error("year key {key:?} in name_counts_per_year is not a number")]
    BadYearKey { key: String },
    #[error("word-count years are not contiguous: expected {expected}, found {found}")]
    YearGap { expected: i32, found: i32 },
    #[error("name-by-year has more than one record for {year} ({gender})")]
    DuplicateYearGender { year: i32, gender: Gender },
    #[error("name {0:?} carries no gender series")]
    EmptyNameRecord(String),
    #[error("series for {name:?} ({gender}) is not sorted ascending by year")]
    UnsortedSeries { name: String, gender: Gender },
}

/// In-memory, read-only views over the three datasets.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    name_by_year: Vec<NameYearRecord>,
    names: IndexMap<String, NameRecord>,
    first_year: i32,
    word_counts: Vec<IndexMap<String, u32>>,
}

impl DatasetIndex {
    /// Parse and validate the three JSON documents.
    pub fn from_json(
        name_by_year: &str,
        names_data: &str,
        name_counts: &str,
    ) -> Result<Self, DatasetError> {
        let name_by_year: Vec<NameYearRecord> =
            serde_json::from_str(name_by_year).map_err(|source| DatasetError::Parse {
                file: "name_by_year",
                source,
            })?;
        let names: IndexMap<String, NameRecord> =
            serde_json::from_str(names_data).map_err(|source| DatasetError::Parse {
                file: "names_data",
                source,
            })?;
        let raw_counts: IndexMap<String, IndexMap<String, u32>> =
            serde_json::from_str(name_counts).map_err(|source| DatasetError::Parse {
                file: "name_counts_per_year",
                source,
            })?;

        if name_by_year.is_empty() {
            return Err(DatasetError::Empty {
                file: "name_by_year",
            });
        }
        if names.is_empty() {
            return Err(DatasetError::Empty { file: "names_data" });
        }
        if raw_counts.is_empty() {
            return Err(DatasetError::Empty {
                file: "name_counts_per_year",
            });
        }

        let mut seen = HashSet::new();
        for record in &name_by_year {
            if !seen.insert((record.year, record.gender)) {
                return Err(DatasetError::DuplicateYearGender {
                    year: record.year,
                    gender: record.gender,
                });
            }
        }

        for (name, record) in &names {
            if record.male.is_none() && record.female.is_none() {
                return Err(DatasetError::EmptyNameRecord(name.clone()));
            }
            for gender in record.genders() {
                let points = record
                    .series(gender)
                    .map(|s| s.points.as_slice())
                    .unwrap_or(&[]);
                if points.windows(2).any(|w| w[0].year >= w[1].year) {
                    return Err(DatasetError::UnsortedSeries {
                        name: name.clone(),
                        gender,
                    });
                }
            }
        }

        // Sort snapshots by year and require a gapless range so playback can
        // navigate by index.
        let mut yearly: Vec<(i32, IndexMap<String, u32>)> = raw_counts
            .into_iter()
            .map(|(key, counts)| {
                key.parse::<i32>()
                    .map(|year| (year, counts))
                    .map_err(|_| DatasetError::BadYearKey { key })
            })
            .collect::<Result<_, _>>()?;
        yearly.sort_by_key(|(year, _)| *year);

        let first_year = yearly[0].0;
        for (offset, (year, _)) in yearly.iter().enumerate() {
            let expected = first_year + offset as i32;
            if *year != expected {
                return Err(DatasetError::YearGap {
                    expected,
                    found: *year,
                });
            }
        }

        Ok(Self {
            name_by_year,
            names,
            first_year,
            word_counts: yearly.into_iter().map(|(_, counts)| counts).collect(),
        })
    }

    fn load() -> Result<Self, DatasetError> {
        Self::from_json(NAME_BY_YEAR_JSON, NAMES_DATA_JSON, NAME_COUNTS_JSON)
    }

    /// One row per year x gender (the most popular name that year), in file
    /// order.
    pub fn name_by_year(&self) -> &[NameYearRecord] {
        &self.name_by_year
    }

    /// Every known name in file order, each mapped to its gender series.
    pub fn names(&self) -> &IndexMap<String, NameRecord> {
        &self.names
    }

    pub fn name(&self, name: &str) -> Option<&NameRecord> {
        self.names.get(name)
    }

    /// Number of word-count snapshots; the year axis of the cloud timeline.
    pub fn year_count(&self) -> usize {
        self.word_counts.len()
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn year_at(&self, index: usize) -> Option<i32> {
        (index < self.word_counts.len()).then(|| self.first_year + index as i32)
    }

    /// Snapshot for the index-th year of the range, with its year.
    pub fn word_counts_at(&self, index: usize) -> Option<(i32, &IndexMap<String, u32>)> {
        self.word_counts
            .get(index)
            .map(|counts| (self.first_year + index as i32, counts))
    }
}

static INDEX: Lazy<Result<DatasetIndex, DatasetError>> = Lazy::new(DatasetIndex::load);

/// The process-wide dataset. `Err` here is fatal for every view.
pub fn index() -> Result<&'static DatasetIndex, &'static DatasetError> {
    INDEX.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_BY_YEAR: &str = r#"[
        {"Year": 2000, "Name": "Emily", "Gender": "F", "Count": 500},
        {"Year": 2000, "Name": "Jacob", "Gender": "M", "Count": 600}
    ]"#;
    const NAMES_DATA: &str = r#"{
        "Emily": {"F": {"Data": [{"Year": 2000, "Count": 500}]}},
        "Jacob": {"M": {"Data": [{"Year": 2000, "Count": 600}]}}
    }"#;
    const NAME_COUNTS: &str = r#"{
        "2000": {"Emily": 500, "Jacob": 600},
        "2001": {"Emily": 450},
        "2002": {"Jacob": 410}
    }"#;

    #[test]
    fn valid_documents_load() {
        let index = DatasetIndex::from_json(NAME_BY_YEAR, NAMES_DATA, NAME_COUNTS)
            .expect("dataset should load");
        assert_eq!(index.name_by_year().len(), 2);
        assert_eq!(index.year_count(), 3);
        assert_eq!(index.first_year(), 2000);
        assert_eq!(index.year_at(2), Some(2002));
        assert_eq!(index.year_at(3), None);
        let (year, counts) = index.word_counts_at(1).expect("2001 snapshot");
        assert_eq!(year, 2001);
        assert_eq!(counts.get("Emily"), Some(&450));
    }

    #[test]
    fn year_gap_is_fatal() {
        let counts = r#"{"2000": {"Emily": 1}, "2002": {"Emily": 1}}"#;
        let err = DatasetIndex::from_json(NAME_BY_YEAR, NAMES_DATA, counts).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::YearGap {
                expected: 2001,
                found: 2002
            }
        ));
    }

    #[test]
    fn unordered_year_keys_are_accepted() {
        let counts = r#"{"2001": {"Emily": 1}, "2000": {"Emily": 2}}"#;
        let index = DatasetIndex::from_json(NAME_BY_YEAR, NAMES_DATA, counts)
            .expect("keys may arrive in any order");
        assert_eq!(index.first_year(), 2000);
        assert_eq!(index.word_counts_at(0).map(|(y, _)| y), Some(2000));
    }

    #[test]
    fn genderless_name_record_is_fatal() {
        let names = r#"{"Emily": {}}"#;
        let err = DatasetIndex::from_json(NAME_BY_YEAR, names, NAME_COUNTS).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyNameRecord(name) if name == "Emily"));
    }

    #[test]
    fn unsorted_series_is_fatal() {
        let names = r#"{
            "Emily": {"F": {"Data": [{"Year": 2001, "Count": 5}, {"Year": 2000, "Count": 6}]}}
        }"#;
        let err = DatasetIndex::from_json(NAME_BY_YEAR, names, NAME_COUNTS).unwrap_err();
        assert!(matches!(err, DatasetError::UnsortedSeries { .. }));
    }

    #[test]
    fn duplicate_year_gender_is_fatal() {
        let rows = r#"[
            {"Year": 2000, "Name": "Emily", "Gender": "F", "Count": 500},
            {"Year": 2000, "Name": "Emma", "Gender": "F", "Count": 400}
        ]"#;
        let err = DatasetIndex::from_json(rows, NAMES_DATA, NAME_COUNTS).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DuplicateYearGender {
                year: 2000,
                gender: Gender::F
            }
        ));
    }

    #[test]
    fn name_index_preserves_file_order() {
        let index = DatasetIndex::from_json(NAME_BY_YEAR, NAMES_DATA, NAME_COUNTS).unwrap();
        let names: Vec<&str> = index.names().keys().map(String::as_str).collect();
        assert_eq!(names, ["Emily", "Jacob"]);
    }
}
