//! Chart colors.

use crate::dataset::Gender;
use crate::selection::Slot;

/// Gender x slot palette for comparison bars.
pub const PRIMARY_MALE: &str = "#3b82f6";
pub const PRIMARY_FEMALE: &str = "#f9a8d4";
pub const SECONDARY_MALE: &str = "#1d4ed8";
pub const SECONDARY_FEMALE: &str = "#ec4899";

pub fn slot_fill(slot: Slot, gender: Gender) -> &'static str {
    match (slot, gender) {
        (Slot::Primary, Gender::M) => PRIMARY_MALE,
        (Slot::Primary, Gender::F) => PRIMARY_FEMALE,
        (Slot::Secondary, Gender::M) => SECONDARY_MALE,
        (Slot::Secondary, Gender::F) => SECONDARY_FEMALE,
    }
}

pub fn gender_fill(gender: Gender) -> &'static str {
    slot_fill(Slot::Primary, gender)
}

/// Categorical colors for the word cloud, assigned by word index.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub fn category_fill(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}
