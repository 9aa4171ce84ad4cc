//! Pull-cord theme switch.
//!
//! A lamp cord hanging from the header. Dragging it down past the threshold
//! and letting go toggles the theme, same as [`super::ThemeToggle`].

use leptos::{ev, prelude::*};
use refine_core::theme::{CORD_MAX_PX, PullCord as CordGesture};

use super::use_theme;

stylance::import_crate_style!(css, "src/components/theme/theme.module.css");

/// Resting cord length in px.
const CORD_REST_PX: f64 = 56.0;

#[component]
pub fn PullCord() -> impl IntoView {
    let state = use_theme();
    let cord = RwSignal::new(CordGesture::new());
    let grab_y = StoredValue::new(0.0_f64);

    let on_pointerdown = move |ev: ev::PointerEvent| {
        ev.prevent_default();
        grab_y.set_value(f64::from(ev.client_y()));
        cord.update(|c| c.grab());
    };

    let move_handle = window_event_listener(ev::pointermove, move |ev| {
        if cord.with_untracked(|c| c.is_dragging()) {
            let dy = f64::from(ev.client_y()) - grab_y.get_value();
            cord.update(|c| c.drag(dy));
        }
    });
    let up_handle = window_event_listener(ev::pointerup, move |_| {
        if !cord.with_untracked(|c| c.is_dragging()) {
            return;
        }
        if cord.try_update(|c| c.release()).unwrap_or(false) {
            state.toggle();
        }
    });
    let cancel_handle = window_event_listener(ev::pointercancel, move |_| {
        if cord.with_untracked(|c| c.is_dragging()) {
            cord.update(|c| c.cancel());
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
    });

    let length = move || CORD_REST_PX + cord.with(|c| c.stretch());
    let handle_class = move || {
        if cord.with(|c| c.armed()) {
            format!("{} {}", css::cordHandle, css::cordArmed)
        } else {
            css::cordHandle.to_string()
        }
    };

    view! {
        <div
            class=css::cord
            style=move || format!("height: {}px", CORD_REST_PX + CORD_MAX_PX)
            aria-hidden="true"
        >
            <span class=css::cordLine style=move || format!("height: {}px", length()) />
            <span
                class=handle_class
                style=move || format!("transform: translateY({}px)", length())
                on:pointerdown=on_pointerdown
            />
        </div>
    }
}
