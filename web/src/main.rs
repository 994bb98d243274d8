use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use ui::components::AnimationControls;
use ui::core::settings::AnimationSettings;
use ui::dataset;
use ui::views::{Home, Info, NameByYear, NameCloud, NameSearch};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/search")]
    NameSearch {},
    #[route("/name-cloud")]
    NameCloud {},
    #[route("/name-by-year")]
    NameByYear {},
    #[route("/info")]
    Info {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // dioxus::launch brings up the logger before the first render.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The one cross-cutting setting: charts and the cloud player read it
    // through context every render.
    use_context_provider(|| Signal::new(AnimationSettings::default()));

    use_hook(|| match dataset::index() {
        Ok(index) => info!(
            rows = index.name_by_year().len(),
            names = index.names().len(),
            years = index.year_count(),
            "dataset loaded"
        ),
        Err(err) => error!("dataset failed to load: {err}"),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Navbar layout wrapping every route. A dataset that failed to load is a
/// startup precondition violation: the shell reports it and renders no view.
#[component]
fn WebShell() -> Element {
    match dataset::index() {
        Ok(_) => rsx! {
            AppNavbar {}
            Outlet::<Route> {}
        },
        Err(err) => rsx! {
            AppNavbar {}
            div { class: "fatal",
                h1 { "ERROR" }
                p { "The baby names dataset could not be loaded: {err}" }
            }
        },
    }
}

#[component]
fn AppNavbar() -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Namescope" }
                    span { class: "navbar__brand-subtitle", "US baby names, 2000–2019" }
                }
                nav { class: "navbar__links",
                    Link { class: "navbar__link", to: Route::Home {}, "Home" }
                    Link { class: "navbar__link", to: Route::NameSearch {}, "Search" }
                    Link { class: "navbar__link", to: Route::NameCloud {}, "Name Cloud" }
                    Link { class: "navbar__link", to: Route::NameByYear {}, "Name By Year" }
                    Link { class: "navbar__link", to: Route::Info {}, "Info" }
                }
                AnimationControls {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "ERROR" }
            p { "The page \"/{path}\" could not be found." }
        }
    }
}
