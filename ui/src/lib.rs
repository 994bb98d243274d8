//! Shared UI crate for Namescope. The dataset index, query engines, chart
//! pipeline and views live here; platform shells only add routing.

pub mod charts;
pub mod cloud;
pub mod core;
pub mod dataset;
pub mod query;
pub mod selection;
pub mod views;

pub mod components {
    pub mod animation_controls;
    pub mod switch;

    pub use animation_controls::AnimationControls;
    pub use switch::Switch;
}
