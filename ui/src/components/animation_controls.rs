use dioxus::prelude::*;

use crate::components::Switch;
use crate::core::format;
use crate::core::settings::{AnimationSettings, SPEED_FACTORS};

/// Navbar widget writing the shared animation settings: an enable toggle
/// plus a speed-factor select. Renders nothing when no settings provider is
/// mounted.
#[component]
pub fn AnimationControls() -> Element {
    let Some(mut settings) = try_use_context::<Signal<AnimationSettings>>() else {
        return rsx! {};
    };

    let current = settings();

    rsx! {
        div { class: "anim-controls",
            Switch {
                is_on: current.enabled,
                on_label: "Animations",
                off_label: "Static",
                ontoggle: move |_| settings.with_mut(|s| s.enabled = !s.enabled),
            }
            select {
                class: "anim-controls__speed",
                disabled: !current.enabled,
                value: "{current.speed_factor}",
                oninput: move |evt| {
                    if let Ok(factor) = evt.value().parse::<f64>() {
                        settings.with_mut(|s| s.speed_factor = factor);
                    }
                },
                for factor in SPEED_FACTORS {
                    option {
                        value: "{factor}",
                        selected: factor == current.speed_factor,
                        "{format::format_speed(factor)}"
                    }
                }
            }
        }
    }
}
