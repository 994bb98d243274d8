use dioxus::prelude::*;

#[component]
pub fn Info() -> Element {
    rsx! {
        section { class: "page page-info",
            h2 { "Info" }
            p {
                "Namescope visualizes the popularity of baby names in the "
                "United States from 2000 to 2019. Animations can be switched "
                "off (or sped up) from the controls in the navigation bar; "
                "the charts then jump straight to their final state."
            }
        }
    }
}
