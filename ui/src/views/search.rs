use dioxus::prelude::*;

use crate::charts::bars::{BarChart, BarChartState, BarDatum};
use crate::charts::palette;
use crate::charts::transition::TransitionPolicy;
use crate::core::settings::use_animation_settings;
use crate::dataset::{self, Gender};
use crate::query::{self, PAGE_SIZE};
use crate::selection::{GenderOverlap, Selection, Slot};

/// Free-text name search with the two-slot comparison panel.
#[component]
pub fn NameSearch() -> Element {
    let settings = use_animation_settings();

    let mut query_text = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let selection = use_signal(Selection::default);
    let gender = use_signal(|| Option::<Gender>::None);
    let chart = use_signal(BarChartState::default);

    let Ok(index) = dataset::index() else {
        return rsx! {
            section { class: "page",
                p { class: "page__placeholder", "The dataset failed to load; nothing to show." }
            }
        };
    };

    let text = query_text();
    let results = query::filter_names(index.names(), &text);
    let total = results.len();
    let total_pages = query::total_pages(total, PAGE_SIZE);
    let current_page = query::clamp_page(page(), total_pages);
    let visible = query::page_slice(&results, current_page, PAGE_SIZE).to_vec();

    let selected = selection();
    let policy = TransitionPolicy::resolve(&settings);

    rsx! {
        section { class: "page page-search",
            div { class: "search__results-pane",
                input {
                    r#type: "text",
                    class: "search__input",
                    placeholder: "Search for a name",
                    value: "{text}",
                    oninput: move |evt| {
                        query_text.set(evt.value());
                        // Filtering always restarts from the first page.
                        page.set(1);
                    },
                }

                div { class: "search__results",
                    for (name, _record) in visible.into_iter() {
                        button {
                            key: "{name}",
                            r#type: "button",
                            class: format!(
                                "search__result {}",
                                if selected.contains(name) { "search__result--selected" } else { "" }
                            ),
                            onclick: move |_| select_name(selection, gender, chart, name),
                            "{name}"
                        }
                    }
                    if total == 0 {
                        p { class: "page__placeholder", "No names match." }
                    }
                }

                if total > PAGE_SIZE {
                    div { class: "search__pagination",
                        button {
                            r#type: "button",
                            disabled: current_page == 1,
                            onclick: move |_| page.set(current_page.saturating_sub(1).max(1)),
                            "Previous"
                        }
                        button {
                            r#type: "button",
                            disabled: current_page >= total_pages,
                            onclick: move |_| page.set(current_page + 1),
                            "Next"
                        }
                    }
                }
            }

            div { class: "search__compare-pane",
                {comparison_panel(selection, gender, chart, policy)}
            }
        }
    }
}

fn comparison_panel(
    selection: Signal<Selection>,
    gender: Signal<Option<Gender>>,
    chart: Signal<BarChartState>,
    policy: TransitionPolicy,
) -> Element {
    let selected = selection();
    let Some(primary) = selected.primary() else {
        return rsx! {
            p { class: "search__placeholder", "Please select a name." }
        };
    };

    let overlap = selection_overlap(&selected);
    let heading = match selected.secondary() {
        Some(secondary) => format!("{primary} vs {secondary}"),
        None => primary.to_string(),
    };

    if selected.is_comparison() && !overlap.any() {
        return rsx! {
            div { class: "search__compare",
                h2 { class: "search__compare-title", "{heading}" }
                p { class: "search__placeholder", "No shared gender data for these names." }
            }
        };
    }

    let current_gender = gender();
    let frame = chart().frame;

    rsx! {
        div { class: "search__compare",
            h2 { class: "search__compare-title", "{heading}" }

            div { class: "search__genders",
                for g in overlap.genders() {
                    button {
                        key: "{g}",
                        r#type: "button",
                        class: gender_button_class(g, current_gender),
                        onclick: move |_| set_gender(selection, gender, chart, g),
                        "{g.label()}"
                    }
                }
            }

            BarChart { frame, policy }
        }
    }
}

fn gender_button_class(gender: Gender, current: Option<Gender>) -> &'static str {
    let active = current == Some(gender);
    match (gender, active) {
        (Gender::M, true) => "search__gender search__gender--male-active",
        (Gender::F, true) => "search__gender search__gender--female-active",
        _ => "search__gender",
    }
}

/// Genders offered by the toggle: those present on a single selection, or
/// present on *both* records of a comparison.
fn selection_overlap(selected: &Selection) -> GenderOverlap {
    let Ok(index) = dataset::index() else {
        return GenderOverlap::default();
    };
    let record = |name: Option<&str>| name.and_then(|n| index.name(n));
    match (record(selected.primary()), record(selected.secondary())) {
        (Some(a), Some(b)) => GenderOverlap::of(a, b),
        (Some(a), None) => GenderOverlap::single(a),
        _ => GenderOverlap::default(),
    }
}

/// One click on a result row: run the slot transition, re-derive the gender
/// toggle (keeping the current pick when still offered, M preferred
/// otherwise), then re-diff the comparison chart.
fn select_name(
    mut selection: Signal<Selection>,
    mut gender: Signal<Option<Gender>>,
    chart: Signal<BarChartState>,
    name: &str,
) {
    selection.with_mut(|s| s.select(name));
    let selected = selection();

    let overlap = selection_overlap(&selected);
    let resolved = match gender() {
        Some(current) if overlap.contains(current) => Some(current),
        _ => overlap.default_gender(),
    };
    gender.set(resolved);

    refresh_compare(chart, &selected, resolved);
}

fn set_gender(
    selection: Signal<Selection>,
    mut gender: Signal<Option<Gender>>,
    chart: Signal<BarChartState>,
    g: Gender,
) {
    gender.set(Some(g));
    refresh_compare(chart, &selection(), Some(g));
}

fn refresh_compare(mut chart: Signal<BarChartState>, selected: &Selection, gender: Option<Gender>) {
    chart.with_mut(|state| state.refresh(&compare_chart_data(selected, gender)));
}

/// Bars for the selected name(s) under one gender: full-width bars for a
/// single name, two half-width lanes keyed by slot for a comparison.
fn compare_chart_data(selected: &Selection, gender: Option<Gender>) -> Vec<BarDatum> {
    let Ok(index) = dataset::index() else {
        return Vec::new();
    };
    let Some(gender) = gender else {
        return Vec::new();
    };

    let lanes = if selected.is_comparison() { 2 } else { 1 };
    let slots = [
        (Slot::Primary, selected.primary()),
        (Slot::Secondary, selected.secondary()),
    ];

    let mut data = Vec::new();
    for (slot, name) in slots {
        let Some(name) = name else { continue };
        let Some(series) = index.name(name).and_then(|r| r.series(gender)) else {
            continue;
        };
        let (lane, tag) = match slot {
            Slot::Primary => (0, "P"),
            Slot::Secondary => (1, "S"),
        };
        for point in &series.points {
            data.push(BarDatum {
                key: format!("{}/{}", point.year, tag),
                year: point.year,
                count: point.count,
                lane,
                lanes,
                fill: palette::slot_fill(slot, gender),
                series: format!("{} · {}", name, gender.label()),
                label: None,
            });
        }
    }
    data
}
