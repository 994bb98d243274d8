//! Bar-chart geometry and the SVG renderer for diffed bar marks.
//!
//! Views own a `BarChartState` behind a signal and call `refresh` from their
//! event handlers; the `BarChart` component is a stateless renderer of the
//! resulting frame. Transitions run as CSS on the emitted marks, with
//! per-mark durations and delays taken from the `TransitionPolicy`.

use dioxus::prelude::*;

use crate::charts::diff::{FramePlan, MarkSet, PlannedMark};
use crate::charts::scale::{label_stride, BandScale, LinearScale};
use crate::charts::transition::TransitionPolicy;
use crate::core::format;

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 400.0;

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 70.0;

const INNER_WIDTH: f64 = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const INNER_HEIGHT: f64 = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

const BAND_PADDING: f64 = 0.1;

/// One bar of input data. `key` is the stable mark identity; `lane`/`lanes`
/// split a category band into side-by-side half-width bars for two-series
/// comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub key: String,
    pub year: i32,
    pub count: u32,
    pub lane: usize,
    pub lanes: usize,
    pub fill: &'static str,
    pub series: String,
    pub label: Option<String>,
}

/// Target geometry for one rendered bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarGeom {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub year: i32,
    pub count: u32,
    pub series: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarLayout {
    pub targets: Vec<(String, BarGeom)>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

/// Scale the data and lay every bar out in chart coordinates.
pub fn layout_bars(data: &[BarDatum]) -> BarLayout {
    if data.is_empty() {
        return BarLayout::default();
    }

    let mut years: Vec<i32> = data.iter().map(|d| d.year).collect();
    years.sort_unstable();
    years.dedup();

    let x = BandScale::new(years.clone(), INNER_WIDTH, BAND_PADDING);
    let max_count = data.iter().map(|d| d.count).max().unwrap_or(0);
    let y = LinearScale::new((0.0, max_count as f64), (INNER_HEIGHT, 0.0)).nice(10);

    let targets = data
        .iter()
        .filter_map(|datum| {
            let band = x.position(datum.year)?;
            let lanes = datum.lanes.max(1) as f64;
            let lane_width = x.bandwidth() / lanes;
            let top = y.scale(datum.count as f64).min(INNER_HEIGHT);
            let geom = BarGeom {
                x: band + lane_width * datum.lane as f64,
                y: top,
                width: lane_width,
                height: INNER_HEIGHT - top,
                fill: datum.fill,
                year: datum.year,
                count: datum.count,
                series: datum.series.clone(),
                label: datum.label.clone(),
            };
            Some((datum.key.clone(), geom))
        })
        .collect();

    let stride = label_stride(years.len());
    let x_ticks = years
        .iter()
        .enumerate()
        .map(|(i, year)| AxisTick {
            position: x.position(*year).unwrap_or(0.0) + x.bandwidth() / 2.0,
            label: year.to_string(),
            visible: i % stride == 0,
        })
        .collect();

    let y_ticks = y
        .ticks(10)
        .into_iter()
        .map(|value| AxisTick {
            position: y.scale(value),
            label: format::format_count(value as u32),
            visible: true,
        })
        .collect();

    BarLayout {
        targets,
        x_ticks,
        y_ticks,
    }
}

/// The frame handed to the renderer: one diff step plus the current axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChartFrame {
    pub plan: FramePlan<BarGeom>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

/// View-owned chart state: the rendered mark set and the latest frame.
#[derive(Debug, Clone, Default)]
pub struct BarChartState {
    marks: MarkSet<BarGeom>,
    pub frame: BarChartFrame,
}

impl BarChartState {
    pub fn new(data: &[BarDatum]) -> Self {
        let mut state = Self::default();
        state.refresh(data);
        state
    }

    /// Recompute the layout and diff it against the rendered marks. Called
    /// synchronously from every event handler that changes the derived data.
    pub fn refresh(&mut self, data: &[BarDatum]) {
        let layout = layout_bars(data);
        let plan = self.marks.apply(layout.targets);
        self.frame = BarChartFrame {
            plan,
            x_ticks: layout.x_ticks,
            y_ticks: layout.y_ticks,
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tooltip {
    left: f64,
    top: f64,
    series: String,
    year: i32,
    count: u32,
}

#[component]
pub fn BarChart(frame: BarChartFrame, policy: TransitionPolicy) -> Element {
    let mut tooltip = use_signal(|| Option::<Tooltip>::None);

    let x_caption_x = INNER_WIDTH / 2.0;
    let x_caption_y = INNER_HEIGHT + MARGIN_BOTTOM - 4.0;
    let y_caption_x = -INNER_HEIGHT / 2.0;
    let y_caption_y = -MARGIN_LEFT + 16.0;

    let hover = move |geom: &BarGeom| {
        let tip = Tooltip {
            left: MARGIN_LEFT + geom.x + geom.width / 2.0,
            top: (MARGIN_TOP + geom.y - 12.0).max(0.0),
            series: geom.series.clone(),
            year: geom.year,
            count: geom.count,
        };
        move |_evt: dioxus::events::MouseEvent| tooltip.set(Some(tip.clone()))
    };

    rsx! {
        div { class: "chart",
            onmouseleave: move |_| tooltip.set(None),

            svg {
                class: "chart__svg",
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",

                g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",

                    // y axis
                    line {
                        class: "chart__axis-line",
                        x1: "0", y1: "0", x2: "0", y2: "{INNER_HEIGHT}",
                    }
                    for tick in frame.y_ticks.iter() {
                        g { key: "y-{tick.label}",
                            transform: "translate(0,{tick.position})",
                            line { class: "chart__axis-line", x1: "-6", y1: "0", x2: "0", y2: "0" }
                            text {
                                class: "chart__tick-label",
                                x: "-9",
                                y: "0",
                                dy: "0.32em",
                                text_anchor: "end",
                                "{tick.label}"
                            }
                        }
                    }

                    // x axis
                    line {
                        class: "chart__axis-line",
                        x1: "0", y1: "{INNER_HEIGHT}", x2: "{INNER_WIDTH}", y2: "{INNER_HEIGHT}",
                    }
                    for tick in frame.x_ticks.iter().filter(|t| t.visible) {
                        g { key: "x-{tick.label}",
                            transform: "translate({tick.position},{INNER_HEIGHT})",
                            line { class: "chart__axis-line", x1: "0", y1: "0", x2: "0", y2: "6" }
                            text {
                                class: "chart__tick-label chart__tick-label--rotated",
                                x: "0",
                                y: "9",
                                dy: "0.71em",
                                text_anchor: "end",
                                transform: "rotate(-45)",
                                "{tick.label}"
                            }
                        }
                    }

                    // axis captions
                    text {
                        class: "chart__caption",
                        x: "{x_caption_x}",
                        y: "{x_caption_y}",
                        text_anchor: "middle",
                        "Year"
                    }
                    text {
                        class: "chart__caption",
                        transform: "rotate(-90)",
                        x: "{y_caption_x}",
                        y: "{y_caption_y}",
                        text_anchor: "middle",
                        "Count"
                    }

                    for mark in frame.plan.update.iter() {
                        {render_bar(mark, &policy, BarPhase::Update, hover(&mark.geom))}
                    }
                    for mark in frame.plan.enter.iter() {
                        {render_bar(mark, &policy, BarPhase::Enter, hover(&mark.geom))}
                    }
                    for mark in frame.plan.exit.iter() {
                        {render_bar(mark, &policy, BarPhase::Exit, hover(&mark.geom))}
                    }

                    for mark in frame.plan.update.iter().chain(frame.plan.enter.iter()) {
                        {render_bar_label(mark, &policy)}
                    }
                }
            }

            if let Some(tip) = tooltip() {
                div {
                    class: "chart__tooltip",
                    style: "left:{tip.left}px;top:{tip.top}px;",
                    span { class: "chart__tooltip-series", "{tip.series}" }
                    span { class: "chart__tooltip-value", "{tip.year} · {format::format_count(tip.count)}" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum BarPhase {
    Enter,
    Update,
    Exit,
}

fn mark_timing(policy: &TransitionPolicy, index: usize) -> String {
    format!(
        "transition-duration:{:.0}ms;transition-delay:{:.0}ms;animation-duration:{:.0}ms;animation-delay:{:.0}ms;",
        policy.duration_ms,
        policy.delay_ms(index),
        policy.duration_ms,
        policy.delay_ms(index),
    )
}

fn render_bar_label(mark: &PlannedMark<BarGeom>, policy: &TransitionPolicy) -> Element {
    let Some(label) = mark.geom.label.clone() else {
        return rsx! {};
    };
    let x = mark.geom.x + mark.geom.width / 2.0;
    let y = (mark.geom.y - 5.0).max(10.0);
    let timing = mark_timing(policy, mark.index);

    rsx! {
        text {
            key: "label-{mark.key}",
            class: "chart__bar-label",
            x: "{x}",
            y: "{y}",
            text_anchor: "middle",
            style: "{timing}",
            "{label}"
        }
    }
}

fn render_bar(
    mark: &PlannedMark<BarGeom>,
    policy: &TransitionPolicy,
    phase: BarPhase,
    onenter: impl FnMut(dioxus::events::MouseEvent) + 'static,
) -> Element {
    let class = match phase {
        BarPhase::Enter => "chart__bar chart__bar--enter",
        BarPhase::Update => "chart__bar",
        BarPhase::Exit => "chart__bar chart__bar--exit",
    };
    // Exits leave without stagger.
    let index = if phase == BarPhase::Exit { 0 } else { mark.index };
    let geom = &mark.geom;

    rsx! {
        rect {
            key: "{mark.key}",
            class: "{class}",
            x: "{geom.x}",
            y: "{geom.y}",
            width: "{geom.width}",
            height: "{geom.height}",
            fill: "{geom.fill}",
            style: "{mark_timing(policy, index)}",
            onmouseenter: onenter,
        }
    }
}
