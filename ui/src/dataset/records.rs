//! Record types mirroring the embedded dataset documents.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    /// Male first; this is also the preference order when a view has to pick
    /// a default gender.
    pub const ALL: [Gender; 2] = [Gender::M, Gender::F];

    pub fn label(self) -> &'static str {
        match self {
            Gender::M => "Male",
            Gender::F => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::M => f.write_str("M"),
            Gender::F => f.write_str("F"),
        }
    }
}

/// One row of the name-by-year table: the most popular name for a given
/// year and gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameYearRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Count")]
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Count")]
    pub count: u32,
}

/// Per-gender popularity series, sorted ascending by year with one point per
/// year the name appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderSeries {
    #[serde(rename = "Data")]
    pub points: Vec<SeriesPoint>,
}

impl GenderSeries {
    pub fn max_count(&self) -> u32 {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }
}

/// Everything known about one name. At least one of the two series is
/// present (validated at load).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub male: Option<GenderSeries>,
    #[serde(rename = "F", default, skip_serializing_if = "Option::is_none")]
    pub female: Option<GenderSeries>,
}

impl NameRecord {
    pub fn series(&self, gender: Gender) -> Option<&GenderSeries> {
        match gender {
            Gender::M => self.male.as_ref(),
            Gender::F => self.female.as_ref(),
        }
    }

    pub fn has(&self, gender: Gender) -> bool {
        self.series(gender).is_some()
    }

    /// Genders present on this record, male first.
    pub fn genders(&self) -> Vec<Gender> {
        Gender::ALL.into_iter().filter(|g| self.has(*g)).collect()
    }

    /// Default gender for a single-name view: M preferred when both exist.
    pub fn default_gender(&self) -> Option<Gender> {
        self.genders().first().copied()
    }
}
