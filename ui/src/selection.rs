//! Two-slot selection state for the name comparison panel.

use crate::dataset::{Gender, NameRecord};

/// Which comparison slot a series belongs to; drives the bar palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Secondary,
}

/// Ordered pair of selected names. A populated secondary never sits under an
/// empty primary: deselecting the primary promotes the secondary into its
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    primary: Option<String>,
    secondary: Option<String>,
}

impl Selection {
    /// Apply one click on `name`:
    /// - clicking the primary deselects it (the secondary, if any, is
    ///   promoted);
    /// - clicking the secondary deselects it;
    /// - clicking a new name fills the first free slot, or replaces the
    ///   secondary when both are taken.
    pub fn select(&mut self, name: &str) {
        if self.primary.as_deref() == Some(name) {
            self.primary = self.secondary.take();
        } else if self.secondary.as_deref() == Some(name) {
            self.secondary = None;
        } else if self.primary.is_none() {
            self.primary = Some(name.to_string());
        } else {
            self.secondary = Some(name.to_string());
        }
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.primary.as_deref() == Some(name) || self.secondary.as_deref() == Some(name)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    pub fn is_comparison(&self) -> bool {
        self.secondary.is_some()
    }
}

/// Gender availability for the comparison panel's toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderOverlap {
    pub male: bool,
    pub female: bool,
}

impl GenderOverlap {
    /// Genders present on a single record.
    pub fn single(record: &NameRecord) -> Self {
        Self {
            male: record.has(Gender::M),
            female: record.has(Gender::F),
        }
    }

    /// Genders present on *both* records; a two-name comparison only offers
    /// these. Empty overlap means "no shared gender data".
    pub fn of(a: &NameRecord, b: &NameRecord) -> Self {
        Self {
            male: a.has(Gender::M) && b.has(Gender::M),
            female: a.has(Gender::F) && b.has(Gender::F),
        }
    }

    pub fn any(self) -> bool {
        self.male || self.female
    }

    pub fn contains(self, gender: Gender) -> bool {
        match gender {
            Gender::M => self.male,
            Gender::F => self.female,
        }
    }

    pub fn genders(self) -> Vec<Gender> {
        Gender::ALL
            .into_iter()
            .filter(|g| self.contains(*g))
            .collect()
    }

    /// M preferred when both are available.
    pub fn default_gender(self) -> Option<Gender> {
        self.genders().first().copied()
    }
}
