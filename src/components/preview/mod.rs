//! Interactive phone mockup embedding live project sites.
//!
//! One [`PreviewFrame`] drives both the inline phone and the fullscreen
//! modal. Only one of them is mounted at a time; switching between them
//! remounts the iframe, so each switch arms a fresh load and timeout.

mod phone;

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use refine_core::Project;
use refine_core::preview::{LOAD_TIMEOUT_MS, PreviewFrame};

use crate::components::icons as ic;
use crate::utils::dom::ScrollLock;
use phone::Phone;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Pending load timeout. Replacing or clearing it cancels the old one.
pub(crate) type LoadTimer = StoredValue<Option<Timeout>, LocalStorage>;

/// Start the timeout for load `generation`.
fn arm(frame: RwSignal<PreviewFrame>, timer: LoadTimer, generation: u64) {
    timer.set_value(Some(Timeout::new(LOAD_TIMEOUT_MS, move || {
        if frame.try_update(|f| f.timed_out(generation)).unwrap_or(false) {
            tracing::debug!(generation, "preview load timed out");
        }
    })));
}

#[component]
pub fn DevicePreview(projects: Vec<Project>) -> impl IntoView {
    let frame = RwSignal::new(PreviewFrame::new(projects.len()));
    let timer: LoadTimer = StoredValue::new_local(None);
    if frame.with_untracked(|f| f.status().is_loading()) {
        arm(frame, timer, frame.with_untracked(PreviewFrame::generation));
    }

    let fullscreen = Memo::new(move |_| frame.with(PreviewFrame::is_fullscreen));
    let active = Memo::new(move |_| frame.with(PreviewFrame::active));

    let rearm = move |generation: Option<u64>| {
        if let Some(generation) = generation {
            arm(frame, timer, generation);
        }
    };
    let select = move |index: usize| rearm(frame.try_update(|f| f.select(index)).flatten());
    let open = move |_: ev::MouseEvent| rearm(frame.try_update(|f| f.open_fullscreen()).flatten());
    let close = move || rearm(frame.try_update(|f| f.close_fullscreen()).flatten());

    let lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move || lock.set_value(fullscreen.get().then(ScrollLock::acquire)));

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && fullscreen.get_untracked() {
            close();
        }
    });
    on_cleanup(move || keydown.remove());

    let projects = StoredValue::new(projects);
    let current = move || projects.with_value(|p| p.get(active.get()).cloned());

    let selector = projects.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(i, project)| {
                let selected = move || active.get() == i;
                let item_class = move || {
                    if selected() {
                        format!("{} {}", css::option, css::optionActive)
                    } else {
                        css::option.to_string()
                    }
                };
                view! {
                    <button class=item_class on:click=move |_| select(i)>
                        <div class=css::optionText>
                            <span class=css::category>{project.category.clone()}</span>
                            <h3 class=css::optionTitle>{project.title.clone()}</h3>
                            {project
                                .description
                                .clone()
                                .map(|d| view! { <p class=css::optionDescription>{d}</p> })}
                        </div>
                        <div class=css::badge>
                            <Show
                                when=selected
                                fallback=move || view! { <span>{i + 1}</span> }
                            >
                                <Icon icon=ic::CHECK />
                            </Show>
                        </div>
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <section class=css::preview>
            <div class=css::intro>
                <h2 class=css::heading>"Experience Our Work"</h2>
                <p class=css::lead>
                    "Interact with live websites we've built. Navigate, scroll, and explore just like you would on your own phone."
                </p>
                <div class=css::options>{selector}</div>
                <p class=css::hint>"Click inside the phone to interact"</p>
            </div>

            <div class=css::stage>
                <div class=css::glow />
                <Show
                    when=move || !fullscreen.get()
                    fallback=|| view! { <div class=css::phonePlaceholder /> }
                >
                    <Phone frame=frame projects=projects timer=timer />
                </Show>
                <button class=css::expand on:click=open>
                    <Icon icon=ic::FULLSCREEN />
                    <span>"Fullscreen"</span>
                </button>
            </div>

            <Show when=move || fullscreen.get()>
                <div class=css::modal role="dialog" aria-modal="true">
                    <div class=css::backdrop on:click=move |_| close() />
                    <div class=css::modalBody>
                        <div class=css::modalHeader>
                            <div>
                                <p class=css::modalCategory>
                                    {move || current().map(|p| p.category)}
                                </p>
                                <h3 class=css::modalTitle>{move || current().map(|p| p.title)}</h3>
                            </div>
                            <button
                                class=css::close
                                aria-label="Close preview"
                                on:click=move |_| close()
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                        <div class=css::modalStage>
                            <Phone frame=frame projects=projects timer=timer large=true />
                        </div>
                        <p class=css::modalHint>"Tap outside or press × to close"</p>
                    </div>
                </div>
            </Show>
        </section>
    }
}
