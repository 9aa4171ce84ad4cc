//! Sliding light/dark switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::use_theme;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/theme/theme.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_theme();
    let theme = state.theme;

    let track_class = move || {
        if theme.get().is_dark() {
            format!("{} {}", css::track, css::trackDark)
        } else {
            css::track.to_string()
        }
    };

    view! {
        <button
            class=track_class
            on:click=move |_| state.toggle()
            aria-label="Toggle theme"
        >
            <span class=css::knob>
                {move || if theme.get().is_dark() {
                    view! { <Icon icon=ic::MOON /> }.into_any()
                } else {
                    view! { <Icon icon=ic::SUN /> }.into_any()
                }}
            </span>
            <span class=css::srOnly>{move || theme.get().toggle_label()}</span>
        </button>
    }
}
