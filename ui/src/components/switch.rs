use dioxus::prelude::*;

/// Labeled on/off toggle.
#[component]
pub fn Switch(
    is_on: bool,
    on_label: String,
    off_label: String,
    ontoggle: EventHandler<()>,
) -> Element {
    let track_class = if is_on {
        "switch__track switch__track--on"
    } else {
        "switch__track"
    };
    let off_class = if is_on {
        "switch__label switch__label--muted"
    } else {
        "switch__label"
    };
    let on_class = if is_on {
        "switch__label"
    } else {
        "switch__label switch__label--muted"
    };

    rsx! {
        div { class: "switch",
            span { class: "{off_class}", "{off_label}" }
            button {
                r#type: "button",
                class: "{track_class}",
                onclick: move |_| ontoggle.call(()),
                span { class: "switch__knob" }
            }
            span { class: "{on_class}", "{on_label}" }
        }
    }
}
