//! Phone chrome around the embedded page.

use leptos::prelude::*;
use leptos_icons::Icon;
use refine_core::Project;
use refine_core::preview::{Failure, FrameStatus, PreviewFrame, SANDBOX};

use super::LoadTimer;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Apply a load signal from the iframe mounted for `generation`.
fn settle(frame: RwSignal<PreviewFrame>, timer: LoadTimer, generation: u64, ok: bool) {
    let applied = frame
        .try_update(|f| {
            if ok {
                f.loaded(generation)
            } else {
                f.failed(generation)
            }
        })
        .unwrap_or(false);
    if applied {
        timer.set_value(None);
    } else {
        tracing::trace!(generation, "stale preview load signal dropped");
    }
}

fn failure_detail(failure: Failure) -> &'static str {
    match failure {
        Failure::LoadError => "This site can't be shown inside a frame.",
        Failure::TimedOut => "This site took too long to respond.",
    }
}

#[component]
pub fn Phone(
    frame: RwSignal<PreviewFrame>,
    projects: StoredValue<Vec<Project>>,
    timer: LoadTimer,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let key = Memo::new(move |_| frame.with(|f| (f.active(), f.generation())));
    let status = Memo::new(move |_| frame.with(PreviewFrame::status));
    let url = move || {
        projects.with_value(|p| p.get(key.get().0).and_then(|p| p.url.clone()))
    };

    // Keyed on the load generation: a new generation mounts a new iframe, and
    // its handlers can only ever resolve that generation.
    let screen = move || {
        let (active, generation) = key.get();
        let (src, title) = projects.with_value(|p| {
            p.get(active)
                .map(|p| (p.url.clone(), p.title.clone()))
                .unwrap_or_default()
        });
        src.map(|src| {
            view! {
                <iframe
                    class=css::frame
                    src=src
                    title=title
                    sandbox=SANDBOX
                    on:load=move |_| settle(frame, timer, generation, true)
                    on:error=move |_| settle(frame, timer, generation, false)
                />
            }
            .attr("loading", "lazy")
        })
    };

    let fallback = move || match status.get() {
        FrameStatus::Failed(failure) => Some(view! {
            <div class=css::overlay>
                <div class=css::errorIcon>
                    <Icon icon=ic::WARNING />
                </div>
                <p class=css::errorTitle>"Preview unavailable"</p>
                <p class=css::errorDetail>{failure_detail(failure)}</p>
                <a
                    class=css::errorLink
                    href=url().unwrap_or_default()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Open in new tab"
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            </div>
        }
        .into_any()),
        FrameStatus::Empty => Some(view! {
            <div class=css::overlay>
                <p class=css::errorDetail>"No previews yet."</p>
            </div>
        }
        .into_any()),
        FrameStatus::Loading | FrameStatus::Loaded => None,
    };

    let phone_class = if large { css::phoneLarge } else { css::phone };

    view! {
        <div class=phone_class>
            <span class=css::buttonSilent />
            <span class=css::buttonVolume />
            <span class=css::buttonPower />
            <div class=css::screen>
                <div class=css::island>
                    <span class=css::camera />
                </div>
                {screen}
                <Show when=move || status.get().is_loading()>
                    <div class=css::overlay>
                        <span class=css::spinner />
                        <span class=css::loadingLabel>"Loading..."</span>
                    </div>
                </Show>
                {fallback}
                <div class=css::homeIndicator />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_detail_differs() {
        assert_ne!(
            failure_detail(Failure::LoadError),
            failure_detail(Failure::TimedOut)
        );
    }
}
