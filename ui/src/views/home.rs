use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Welcome to Namescope" }
            p { class: "page-home__tagline",
                "Explore two decades of US baby names: who topped each year, "
                "how any name rose or fell, and what the whole field looked "
                "like year by year."
            }

            section { class: "page-home__section",
                h2 { "Getting started" }
                p {
                    "Pick a view from the navigation bar. Each one is an "
                    "interactive chart over the same dataset, so anything you "
                    "find in one view can be cross-checked in the others."
                }
                ul { class: "page-home__features",
                    li { "Name By Year — the most popular name per year, sortable and paginated, with an animated bar chart." }
                    li { "Search — find any name and compare two of them side by side." }
                    li { "Name Cloud — replay the yearly word clouds as an animated timeline." }
                }
            }

            section { class: "page-home__section",
                h2 { "About the dataset" }
                p {
                    "The charts are built from the public US Baby Names "
                    "dataset, covering 2000 through 2019: each name's yearly "
                    "counts, split by gender, plus the most popular name of "
                    "every year. Everything is loaded up front; nothing "
                    "leaves your browser."
                }
            }
        }
    }
}
