//! Behavioural properties of the widget state machines.

use refine_core::gallery::GalleryScroll;
use refine_core::mascot::{Cue, Phase, Sequencer, Timeline};
use refine_core::menu::{MenuState, Trigger};
use refine_core::preview::{FrameStatus, PreviewFrame};
use refine_core::theme::{MemoryStore, PreferenceStore, THEME_KEY, Theme, ThemeController};

fn phases_entered(cues: &[Cue]) -> Vec<Phase> {
    cues.iter()
        .filter_map(|c| match c {
            Cue::Entered(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn gallery_offset_after_n_pages() {
    for cards in [0usize, 1, 3, 8, 20] {
        let mut gallery = GalleryScroll::new(400.0);
        gallery.measure(cards as f64 * 400.0, 1280.0);

        for n in 1..=25u32 {
            let target = gallery.next();
            let expected = (f64::from(n) * 400.0).min(gallery.max_offset());
            assert_eq!(target, expected, "cards={cards} n={n}");
        }
    }
}

#[test]
fn gallery_buttons_track_scroll_position() {
    let mut gallery = GalleryScroll::default();
    gallery.measure(3200.0, 1200.0);

    assert!(!gallery.can_prev());
    gallery.sync(900.0);
    assert!(gallery.can_prev() && gallery.can_next());
    gallery.sync(2000.0);
    assert!(!gallery.can_next());
}

#[test]
fn menu_changes_once_per_trigger() {
    let mut menu = MenuState::new();
    assert!(!menu.is_open());

    let script = [
        (Trigger::Toggle, true),
        (Trigger::Escape, false),
        (Trigger::Toggle, true),
        (Trigger::Backdrop, false),
        (Trigger::Toggle, true),
        (Trigger::Toggle, false),
    ];
    for (trigger, open_after) in script {
        assert!(menu.apply(trigger), "{trigger:?} should change state");
        assert_eq!(menu.is_open(), open_after);
    }
}

#[test]
fn theme_round_trips_and_persists_each_toggle() {
    for prefers_dark in [false, true] {
        let mut ctl = ThemeController::load(MemoryStore::new(), prefers_dark);
        let original = ctl.theme();

        for _ in 0..2 {
            let applied = ctl.toggle().unwrap();
            assert_eq!(
                ctl.store().get(THEME_KEY).as_deref(),
                Some(applied.as_str())
            );
        }
        assert_eq!(ctl.theme(), original);
    }
}

#[test]
fn theme_saved_preference_survives_reload() {
    let mut ctl = ThemeController::load(MemoryStore::new(), false);
    ctl.toggle().unwrap();

    let store = ctl.store().clone();
    let reloaded = ThemeController::load(store, false);
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn preview_never_stays_loading_past_timeout() {
    let mut frame = PreviewFrame::new(4);

    for index in [1usize, 3, 2] {
        let generation = frame.select(index).unwrap();
        assert!(frame.status().is_loading());

        // Neither load nor error arrived before the timeout
        assert!(frame.timed_out(generation));
        assert!(matches!(frame.status(), FrameStatus::Failed(_)));
    }
}

#[test]
fn mascot_visits_each_phase_once_and_replays_from_start() {
    let timeline = Timeline::default();
    let mut seq = Sequencer::new(timeline);

    let mut cues = Vec::new();
    // 16ms frames for well past the whole sequence
    for _ in 0..1000 {
        cues.extend(seq.tick(16.0));
    }
    assert_eq!(phases_entered(&cues), Phase::ORDER.to_vec());

    seq.replay();
    assert_eq!(seq.phase(), Some(Phase::Walking));

    let mut cues = Vec::new();
    for _ in 0..1000 {
        cues.extend(seq.tick(16.0));
    }
    // Replay starts inside Walking, so it is not re-entered
    assert_eq!(phases_entered(&cues), Phase::ORDER[1..].to_vec());
}
