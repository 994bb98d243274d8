use std::collections::HashMap;

use dioxus::prelude::*;

use crate::charts::bars::{BarChart, BarChartState, BarDatum};
use crate::charts::palette;
use crate::charts::transition::TransitionPolicy;
use crate::core::format;
use crate::core::settings::use_animation_settings;
use crate::dataset::{self, NameYearRecord};
use crate::query::{self, SortField, SortOrder, PAGE_SIZE, PAGE_WINDOW};

/// The most-popular-name-per-year table with its animated bar chart.
/// Every handler recomputes the visible window and synchronously re-diffs
/// the chart against it.
#[component]
pub fn NameByYear() -> Element {
    let settings = use_animation_settings();

    let page = use_signal(|| 1usize);
    let sort_field = use_signal(|| SortField::Year);
    let sort_order = use_signal(|| SortOrder::Asc);
    let chart = use_signal(|| {
        BarChartState::new(&chart_data(&visible_rows(
            SortField::Year,
            SortOrder::Asc,
            1,
        )))
    });

    let Ok(index) = dataset::index() else {
        return rsx! {
            section { class: "page",
                p { class: "page__placeholder", "The dataset failed to load; nothing to show." }
            }
        };
    };

    let field = sort_field();
    let order = sort_order();
    let total_pages = query::total_pages(index.name_by_year().len(), PAGE_SIZE);
    let current_page = query::clamp_page(page(), total_pages);
    let rows = visible_rows(field, order, current_page);

    let window = query::pagination_window(current_page, total_pages, PAGE_WINDOW);
    let prev_page = current_page.saturating_sub(1).max(1);
    let next_page = (current_page + 1).min(total_pages.max(1));
    let at_first = current_page == 1;
    let at_last = total_pages == 0 || current_page == total_pages;
    let order_glyph = match order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };

    let frame = chart().frame;
    let policy = TransitionPolicy::resolve(&settings);

    rsx! {
        section { class: "page page-by-year",
            h1 { "Most popular baby name each year" }

            div { class: "by-year__layout",
                div { class: "by-year__table-pane",
                    div { class: "by-year__sort",
                        span { "Sort by:" }
                        select {
                            value: "{field.label()}",
                            oninput: move |evt| {
                                if let Some(parsed) = SortField::parse(&evt.value()) {
                                    set_sort_field(page, sort_field, sort_order, chart, parsed);
                                }
                            },
                            for option_field in SortField::ALL {
                                option {
                                    value: "{option_field.label()}",
                                    selected: option_field == field,
                                    "{option_field.label()}"
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "by-year__order",
                            title: "Toggle sort order",
                            onclick: move |_| toggle_sort_order(page, sort_field, sort_order, chart),
                            "{order_glyph}"
                        }
                    }

                    table { class: "by-year__table",
                        thead {
                            tr {
                                th { "Year" }
                                th { "Name" }
                                th { "Gender" }
                                th { "Count" }
                            }
                        }
                        tbody {
                            for record in rows.iter() {
                                tr { key: "{record.year}-{record.gender}",
                                    td { "{record.year}" }
                                    td { "{record.name}" }
                                    td { "{record.gender}" }
                                    td { "{format::format_count(record.count)}" }
                                }
                            }
                        }
                    }

                    div { class: "by-year__pagination",
                        button {
                            r#type: "button",
                            disabled: at_first,
                            onclick: move |_| goto_page(page, sort_field, sort_order, chart, 1),
                            "First"
                        }
                        button {
                            r#type: "button",
                            disabled: at_first,
                            onclick: move |_| goto_page(page, sort_field, sort_order, chart, prev_page),
                            "Prev"
                        }
                        for n in window {
                            button {
                                key: "{n}",
                                r#type: "button",
                                class: format!(
                                    "by-year__page {}",
                                    if n == current_page { "by-year__page--active" } else { "" }
                                ),
                                disabled: n == current_page,
                                onclick: move |_| goto_page(page, sort_field, sort_order, chart, n),
                                "{n}"
                            }
                        }
                        button {
                            r#type: "button",
                            disabled: at_last,
                            onclick: move |_| goto_page(page, sort_field, sort_order, chart, next_page),
                            "Next"
                        }
                        button {
                            r#type: "button",
                            disabled: at_last,
                            onclick: move |_| goto_page(page, sort_field, sort_order, chart, total_pages),
                            "Last"
                        }
                    }
                }

                BarChart { frame, policy }
            }
        }
    }
}

/// Sorted, clamped, backfilled window of the name-by-year table.
fn visible_rows(field: SortField, order: SortOrder, page: usize) -> Vec<NameYearRecord> {
    let Ok(index) = dataset::index() else {
        return Vec::new();
    };
    let mut rows = index.name_by_year().to_vec();
    query::sort_records(&mut rows, field, order);
    query::page_slice_backfilled(&rows, page, PAGE_SIZE).to_vec()
}

/// Bars for the visible window, keyed by year and gender. Years appearing
/// with both genders share a band in two half-width lanes.
fn chart_data(rows: &[NameYearRecord]) -> Vec<BarDatum> {
    let mut lanes_by_year: HashMap<i32, usize> = HashMap::new();
    for record in rows {
        *lanes_by_year.entry(record.year).or_default() += 1;
    }

    let mut lane_cursor: HashMap<i32, usize> = HashMap::new();
    rows.iter()
        .map(|record| {
            let lanes = lanes_by_year.get(&record.year).copied().unwrap_or(1).min(2);
            let cursor = lane_cursor.entry(record.year).or_default();
            let lane = (*cursor).min(lanes.saturating_sub(1));
            *cursor += 1;

            BarDatum {
                key: format!("{}/{}", record.year, record.gender),
                year: record.year,
                count: record.count,
                lane,
                lanes,
                fill: palette::gender_fill(record.gender),
                series: format!("{} ({})", record.name, record.gender),
                label: Some(record.name.clone()),
            }
        })
        .collect()
}

fn refresh_chart(
    mut chart: Signal<BarChartState>,
    field: SortField,
    order: SortOrder,
    page: usize,
) {
    chart.with_mut(|state| state.refresh(&chart_data(&visible_rows(field, order, page))));
}

fn goto_page(
    mut page: Signal<usize>,
    sort_field: Signal<SortField>,
    sort_order: Signal<SortOrder>,
    chart: Signal<BarChartState>,
    target: usize,
) {
    page.set(target);
    refresh_chart(chart, sort_field(), sort_order(), target);
}

fn set_sort_field(
    page: Signal<usize>,
    mut sort_field: Signal<SortField>,
    sort_order: Signal<SortOrder>,
    chart: Signal<BarChartState>,
    field: SortField,
) {
    sort_field.set(field);
    refresh_chart(chart, field, sort_order(), page());
}

fn toggle_sort_order(
    page: Signal<usize>,
    sort_field: Signal<SortField>,
    mut sort_order: Signal<SortOrder>,
    chart: Signal<BarChartState>,
) {
    let toggled = sort_order().toggled();
    sort_order.set(toggled);
    refresh_chart(chart, sort_field(), toggled, page());
}
