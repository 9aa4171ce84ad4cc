//! Hamburger button and slide-in navigation panel for small screens.

use leptos::{ev, prelude::*};
use refine_core::NavLink;
use refine_core::menu::{MenuState, Trigger};

use crate::config::menu::LINK_STAGGER_MS;
use crate::config::{SITE_NAME, SITE_TAGLINE};
use crate::utils::dom::ScrollLock;

stylance::import_crate_style!(css, "src/components/menu/menu.module.css");

#[component]
pub fn MobileMenu(nav_links: Vec<NavLink>, cta: NavLink) -> impl IntoView {
    let menu = RwSignal::new(MenuState::new());
    let open = Memo::new(move |_| menu.with(MenuState::is_open));

    let apply = move |trigger: Trigger| {
        if menu.try_update(|m| m.apply(trigger)).unwrap_or(false) {
            tracing::trace!(?trigger, "menu state changed");
        }
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            apply(Trigger::Escape);
        }
    });
    on_cleanup(move || keydown.remove());

    // Dropped with the component, which releases the lock on unmount.
    let lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move || lock.set_value(open.get().then(ScrollLock::acquire)));

    let button_class = move || {
        if open.get() {
            format!("{} {}", css::hamburger, css::hamburgerOpen)
        } else {
            css::hamburger.to_string()
        }
    };

    let nav_links = StoredValue::new(nav_links);
    let links = move || {
        nav_links.with_value(|links| {
            links
                .iter()
                .enumerate()
                .map(|(i, link)| {
                    view! {
                        <a
                            class=css::link
                            href=link.href.clone()
                            style=format!("animation-delay: {}ms", 50 + i * LINK_STAGGER_MS)
                            on:click=move |_| apply(Trigger::LinkFollowed)
                        >
                            {link.label.clone()}
                        </a>
                    }
                })
                .collect_view()
        })
    };

    let NavLink { href: cta_href, label: cta_label } = cta;

    view! {
        <button
            class=button_class
            aria-label=move || menu.with(MenuState::button_label)
            aria-expanded=move || if open.get() { "true" } else { "false" }
            on:click=move |_| apply(Trigger::Toggle)
        >
            <span class=css::bar />
            <span class=css::bar />
            <span class=css::bar />
        </button>

        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| apply(Trigger::Backdrop) />
            <nav class=css::panel>
                <div class=css::links>{links()}</div>
                <a
                    class=css::cta
                    href=cta_href.clone()
                    on:click=move |_| apply(Trigger::LinkFollowed)
                >
                    {cta_label.clone()}
                </a>
                <div class=css::spacer />
                <div class=css::branding>
                    <p class=css::brandName>{SITE_NAME}</p>
                    <p class=css::brandTagline>{SITE_TAGLINE}</p>
                </div>
            </nav>
        </Show>
    }
}
