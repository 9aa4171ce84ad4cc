//! Animated mascots carrying the "About" call-to-action.
//!
//! A [`Sequencer`] is ticked from an interval owned by the component; its
//! cues drive the sound effects and its pose drives the SVG. The interval
//! lives in a `StoredValue`, so it is cancelled when the component is
//! disposed.

mod figure;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;
use refine_core::audio::Effect;
use refine_core::mascot::{Cue, Phase, Sequencer, Timeline};

use crate::components::icons as ic;
use crate::config::mascot::{ABOUT_HREF, ABOUT_LABEL, TICK_MS};
use crate::utils::{audio, dom, storage};
use figure::{Figure, Side};

stylance::import_crate_style!(css, "src/components/mascot/mascot.module.css");

fn handle_cue(cue: Cue) {
    if let Some(effect) = Effect::for_cue(cue) {
        audio::play(effect);
    }
    if cue == Cue::Entered(Phase::Celebrating) {
        storage::mark_intro_played();
    }
}

/// A sequencer at the start of the intro, or already settled when the intro
/// ran earlier in this tab.
fn initial_sequencer() -> Sequencer {
    let mut seq = Sequencer::new(Timeline::default());
    if storage::intro_played() {
        tracing::debug!("mascot intro already played this session");
        seq.start_settled();
    }
    seq
}

#[component]
pub fn AboutMascot(
    #[prop(default = ABOUT_HREF)] href: &'static str,
    #[prop(default = ABOUT_LABEL)] label: &'static str,
) -> impl IntoView {
    let seq = RwSignal::new(initial_sequencer());

    let last_tick = StoredValue::new(dom::now_ms());
    let ticker = StoredValue::new_local(None::<Interval>);
    ticker.set_value(Some(Interval::new(TICK_MS, move || {
        let now = dom::now_ms();
        let dt = now - last_tick.get_value();
        last_tick.set_value(now);

        let cues = seq.try_update(|s| s.tick(dt)).unwrap_or_default();
        cues.into_iter().for_each(handle_cue);
    })));

    let pose = Memo::new(move |_| seq.with(|s| s.pose()));
    let visible = Memo::new(move |_| seq.with(|s| s.is_visible()));
    let phase = Memo::new(move |_| seq.with(|s| s.phase()));
    let celebrating = move || phase.get() == Some(Phase::Celebrating);

    let replay = move |_: leptos::ev::MouseEvent| {
        seq.update(|s| s.replay());
        last_tick.set_value(dom::now_ms());
    };

    let group_style = move || {
        let p = pose.get();
        format!("transform: translateX({:.2}vw)", (p.walk_in - 1.0) * 100.0)
    };
    let sign_style = move || {
        let p = pose.get();
        format!(
            "transform: translateY({:.1}px) rotate({:.1}deg)",
            -(20.0 + p.sign_lift) + p.crouch * 14.0,
            p.sign_tilt
        )
    };

    view! {
        <div
            class=css::stage
            style:visibility=move || if visible.get() { "visible" } else { "hidden" }
            data-phase=move || phase.get().map(Phase::name).unwrap_or("idle")
        >
            <div class=css::group style=group_style>
                <Figure side=Side::Left pose=pose />
                <a href=href class=css::sign style=sign_style>
                    <span class=css::signLabel>{label}</span>
                </a>
                <Figure side=Side::Right pose=pose />
            </div>

            <Show when=celebrating>
                <button class=css::replay on:click=replay>
                    <Icon icon=ic::REPLAY />
                    <span>"Watch again"</span>
                </button>
            </Show>

            <div
                class=css::shadow
                style:opacity=move || if celebrating() { "0.6" } else { "0.3" }
            />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::storage::INTRO_PLAYED_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_flag() {
        if let Some(storage) = dom::session_storage() {
            let _ = storage.remove_item(INTRO_PLAYED_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_celebrating_marks_intro_played() {
        clear_flag();
        handle_cue(Cue::Entered(Phase::Walking));
        assert!(!storage::intro_played());

        handle_cue(Cue::Entered(Phase::Celebrating));
        assert!(storage::intro_played());
    }

    #[wasm_bindgen_test]
    fn test_starts_settled_once_intro_played() {
        clear_flag();
        let fresh = initial_sequencer();
        assert_eq!(fresh.phase(), None);
        assert!(!fresh.is_visible());

        storage::mark_intro_played();
        let settled = initial_sequencer();
        assert_eq!(settled.phase(), Some(Phase::Celebrating));
        assert!(settled.is_visible());
        clear_flag();
    }
}
