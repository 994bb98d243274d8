use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::charts::diff::PlannedMark;
use crate::charts::transition::TransitionPolicy;
use crate::cloud::layout::{PlacedWord, SpiralPlacer, WordPlacer, CANVAS};
use crate::cloud::player::{FrameRequest, TickHandle, TickOutcome, TimelinePlayer, SPEED_STEPS_MS};
use crate::cloud::{snapshot_words, CloudState, WordGeom};
use crate::core::settings::use_animation_settings;
use crate::core::{platform, timing};
use crate::dataset;

/// The animated word-cloud timeline. All mutations funnel through one
/// coroutine: UI controls, scheduled ticks and finished placements arrive as
/// events, so no two handlers ever race. Tearing the view down closes the
/// channel, which is what stops the tick chain.
#[component]
pub fn NameCloud() -> Element {
    let settings = use_animation_settings();

    let player = use_signal(|| {
        let year_count = dataset::index().map(|i| i.year_count()).unwrap_or(0);
        TimelinePlayer::new(year_count)
    });
    let cloud = use_signal(CloudState::default);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<CloudEvent>>>> = Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<CloudEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut player_signal = player;
        let mut cloud_signal = cloud;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    CloudEvent::Init => {
                        let frame = player_signal.with_mut(|p| p.initial_frame());
                        request_layout(sender_slot.clone(), frame);
                    }
                    CloudEvent::Play => {
                        if let Some(handle) = player_signal.with_mut(|p| p.play()) {
                            queue_tick(sender_slot.clone(), handle);
                        }
                    }
                    CloudEvent::Pause => {
                        player_signal.with_mut(|p| p.pause());
                    }
                    CloudEvent::Reset => {
                        if let Some(frame) = player_signal.with_mut(|p| p.reset()) {
                            request_layout(sender_slot.clone(), frame);
                        }
                    }
                    CloudEvent::Seek(target) => {
                        if let Some(frame) = player_signal.with_mut(|p| p.seek(target)) {
                            request_layout(sender_slot.clone(), frame);
                        }
                    }
                    CloudEvent::SetSpeed(ms) => {
                        player_signal.with_mut(|p| p.set_speed(ms));
                    }
                    CloudEvent::Tick { epoch } => {
                        match player_signal.with_mut(|p| p.tick(epoch)) {
                            TickOutcome::Advanced { frame, next } => {
                                queue_tick(sender_slot.clone(), next);
                                request_layout(sender_slot.clone(), frame);
                            }
                            TickOutcome::Stale => {}
                        }
                    }
                    CloudEvent::LayoutReady { layout_seq, words } => {
                        // Only the most recently requested placement may be
                        // drawn; anything older is discarded.
                        if player_signal.with(|p| p.is_current_layout(layout_seq)) {
                            cloud_signal.with_mut(|c| c.apply(&words));
                        } else {
                            debug!(layout_seq, "discarding stale word layout");
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_hook(move || coroutine.send(CloudEvent::Init));

    let Ok(index) = dataset::index() else {
        return rsx! {
            section { class: "page",
                p { class: "page__placeholder", "The dataset failed to load; nothing to show." }
            }
        };
    };

    let snapshot = player();
    let year = index.year_at(snapshot.index()).unwrap_or(index.first_year());
    let max_index = index.year_count().saturating_sub(1);
    let play_label = if snapshot.is_playing() { "Pause" } else { "Play" };
    let policy = TransitionPolicy::resolve(&settings);
    let plan = cloud().plan;
    let (canvas_width, canvas_height) = CANVAS;
    let center_x = canvas_width / 2.0;
    let center_y = canvas_height / 2.0;

    rsx! {
        section { class: "page page-cloud",
            h1 { "Name cloud timeline" }

            div { class: "cloud__controls",
                input {
                    r#type: "range",
                    class: "cloud__scrubber",
                    min: "0",
                    max: "{max_index}",
                    value: "{snapshot.index()}",
                    oninput: move |evt| {
                        if let Ok(target) = evt.value().parse::<usize>() {
                            coroutine.send(CloudEvent::Seek(target));
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "cloud__button",
                    onclick: move |_| {
                        let event = if player.with(|p| p.is_playing()) {
                            CloudEvent::Pause
                        } else {
                            CloudEvent::Play
                        };
                        coroutine.send(event);
                    },
                    "{play_label}"
                }
                button {
                    r#type: "button",
                    class: "cloud__button",
                    onclick: move |_| coroutine.send(CloudEvent::Reset),
                    "Reset"
                }
                select {
                    class: "cloud__speed",
                    value: "{snapshot.speed_ms()}",
                    oninput: move |evt| {
                        if let Ok(ms) = evt.value().parse::<u64>() {
                            coroutine.send(CloudEvent::SetSpeed(ms));
                        }
                    },
                    for ms in SPEED_STEPS_MS {
                        option {
                            value: "{ms}",
                            selected: ms == snapshot.speed_ms(),
                            "{speed_label(ms)}"
                        }
                    }
                }
                span { class: "cloud__year", "Year: {year}" }
            }

            svg {
                class: "cloud__svg",
                width: "{canvas_width}",
                height: "{canvas_height}",
                view_box: "0 0 {canvas_width} {canvas_height}",
                g { transform: "translate({center_x},{center_y})",
                    for mark in plan.update.iter() {
                        {render_word(mark, &policy, WordPhase::Update)}
                    }
                    for mark in plan.enter.iter() {
                        {render_word(mark, &policy, WordPhase::Enter)}
                    }
                    for mark in plan.exit.iter() {
                        {render_word(mark, &policy, WordPhase::Exit)}
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
enum CloudEvent {
    Init,
    Play,
    Pause,
    Reset,
    Seek(usize),
    SetSpeed(u64),
    Tick { epoch: u64 },
    LayoutReady { layout_seq: u64, words: Vec<PlacedWord> },
}

fn speed_label(ms: u64) -> &'static str {
    match ms {
        2000 => "Slow",
        500 => "Fast",
        _ => "Normal",
    }
}

/// Sleep out the tick interval, then hand the epoch back to the player. The
/// sleep itself is never cancelled; a stale epoch just dies in `tick`.
fn queue_tick(sender_slot: Rc<RefCell<Option<UnboundedSender<CloudEvent>>>>, handle: TickHandle) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(handle.delay_ms).await;
            let _ = sender.unbounded_send(CloudEvent::Tick {
                epoch: handle.epoch,
            });
        });
    }
}

/// Fire-and-forget word placement for one frame. The result carries the
/// request's sequence number so the receiver can apply the staleness rule.
fn request_layout(
    sender_slot: Rc<RefCell<Option<UnboundedSender<CloudEvent>>>>,
    frame: FrameRequest,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let Ok(index) = dataset::index() else {
                return;
            };
            let Some((_year, counts)) = index.word_counts_at(frame.index) else {
                return;
            };
            let words = snapshot_words(counts);
            let placed = SpiralPlacer::new().place(&words, CANVAS);
            let _ = sender.unbounded_send(CloudEvent::LayoutReady {
                layout_seq: frame.layout_seq,
                words: placed,
            });
        });
    }
}

#[derive(Clone, Copy, PartialEq)]
enum WordPhase {
    Enter,
    Update,
    Exit,
}

fn render_word(mark: &PlannedMark<WordGeom>, policy: &TransitionPolicy, phase: WordPhase) -> Element {
    let class = match phase {
        WordPhase::Enter => "cloud__word cloud__word--enter",
        WordPhase::Update => "cloud__word",
        WordPhase::Exit => "cloud__word cloud__word--exit",
    };
    let index = if phase == WordPhase::Exit { 0 } else { mark.index };
    let geom = &mark.geom;
    let style = format!(
        "transition-duration:{:.0}ms;transition-delay:{:.0}ms;animation-duration:{:.0}ms;animation-delay:{:.0}ms;",
        policy.duration_ms,
        policy.delay_ms(index),
        policy.duration_ms,
        policy.delay_ms(index),
    );

    rsx! {
        text {
            key: "{mark.key}",
            class: "{class}",
            transform: "translate({geom.x},{geom.y}) rotate({geom.rotate})",
            font_size: "{geom.font_size}",
            fill: "{geom.fill}",
            text_anchor: "middle",
            dy: "0.35em",
            style: "{style}",
            "{mark.key}"
        }
    }
}
