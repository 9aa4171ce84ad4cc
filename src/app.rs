//! Root application module.
//!
//! Builds the page layout around the interactive widgets and provides the
//! theme context.

use leptos::{ev, prelude::*};
use refine_core::Showcase;

use crate::components::{
    AboutMascot, DevicePreview, MobileMenu, ProjectGallery, PullCord, ThemeState, ThemeToggle,
};
use crate::config::{self, SITE_NAME, SITE_TAGLINE};
use crate::utils::audio;

stylance::import_crate_style!(css, "src/app.module.css");

/// Resume the audio context on the first user gesture.
///
/// Browsers keep a fresh `AudioContext` suspended until the page has been
/// interacted with; the mascot intro starts before that.
fn setup_audio_unlock() {
    let pointer = window_event_listener(ev::pointerdown, |_| audio::unlock());
    let key = window_event_listener(ev::keydown, |_| audio::unlock());
    on_cleanup(move || {
        pointer.remove();
        key.remove();
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Resolves the theme and provides [`ThemeState`] as context
/// - Wraps the page in an ErrorBoundary for graceful error handling
/// - Feeds the showcase content to each widget
#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeState::init();
    provide_context(theme);
    setup_audio_unlock();

    let Showcase {
        gallery,
        previews,
        nav_links,
        cta,
    } = config::showcase();
    let desktop_cta = cta.clone();
    let desktop_links = nav_links
        .iter()
        .map(|link| view! { <a class=css::navLink href=link.href.clone()>{link.label.clone()}</a> })
        .collect_view();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorPage>
                    <div class=css::errorCard>
                        <h1 class=css::errorTitle>"Something went wrong"</h1>
                        <p class=css::errorText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::errorDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reload
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <header class=css::header>
                <a class=css::brand href="/">
                    <span class=css::brandName>{SITE_NAME}</span>
                    <span class=css::brandTagline>{SITE_TAGLINE}</span>
                </a>
                <nav class=css::desktopNav>
                    {desktop_links}
                    <a class=css::cta href=desktop_cta.href>{desktop_cta.label}</a>
                </nav>
                <div class=css::actions>
                    <ThemeToggle />
                    <div class=css::mobileOnly>
                        <MobileMenu nav_links=nav_links cta=cta />
                    </div>
                </div>
                <PullCord />
            </header>

            <main class=css::main>
                <section class=css::hero>
                    <h1 class=css::heroTitle>"We refine ideas into websites people remember."</h1>
                    <AboutMascot />
                </section>
                <ProjectGallery projects=gallery />
                <DevicePreview projects=previews />
            </main>
        </ErrorBoundary>
    }
}
