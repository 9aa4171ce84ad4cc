//! Horizontally scrolling project strip with paging buttons.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;
use refine_core::Project;
use refine_core::gallery::GalleryScroll;

use crate::components::icons as ic;
use crate::config::gallery::{STAGGER_MS, STEP_PX};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Read the strip's dimensions into `scroll`.
fn measure(strip: NodeRef<html::Div>, scroll: RwSignal<GalleryScroll>) {
    if let Some(el) = strip.get_untracked() {
        let content = f64::from(el.scroll_width());
        let viewport = f64::from(el.client_width());
        let offset = f64::from(el.scroll_left());
        scroll.update(|s| {
            s.measure(content, viewport);
            s.sync(offset);
        });
    }
}

#[component]
pub fn ProjectGallery(projects: Vec<Project>) -> impl IntoView {
    let strip = NodeRef::<html::Div>::new();
    let scroll = RwSignal::new(GalleryScroll::new(STEP_PX));

    // Runs once the strip is mounted.
    Effect::new(move || {
        if strip.get().is_some() {
            measure(strip, scroll);
        }
    });

    let resize = window_event_listener(ev::resize, move |_| measure(strip, scroll));
    on_cleanup(move || resize.remove());

    let page = move |forward: bool| {
        let target = scroll
            .try_update(|s| if forward { s.next() } else { s.prev() })
            .unwrap_or_default();
        if let Some(el) = strip.get_untracked() {
            el.set_scroll_left(target.round() as i32);
        }
    };

    let on_scroll = move |_: ev::Event| {
        if let Some(el) = strip.get_untracked() {
            let offset = f64::from(el.scroll_left());
            scroll.update(|s| s.sync(offset));
        }
    };

    let cards = projects
        .into_iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <ProjectCard
                    project=project
                    delay_ms=i * STAGGER_MS
                    on_image=move || measure(strip, scroll)
                />
            }
        })
        .collect_view();

    view! {
        <section class=css::gallery>
            <div class=css::header>
                <h2 class=css::title>"Selected Work"</h2>
                <div class=css::controls>
                    <button
                        class=css::pageButton
                        aria-label="Previous projects"
                        disabled=move || !scroll.with(|s| s.can_prev())
                        on:click=move |_| page(false)
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <button
                        class=css::pageButton
                        aria-label="Next projects"
                        disabled=move || !scroll.with(|s| s.can_next())
                        on:click=move |_| page(true)
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </div>
            </div>
            <div class=css::strip node_ref=strip on:scroll=on_scroll>
                {cards}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    delay_ms: usize,
    on_image: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let Project {
        title,
        category,
        year,
        tags,
        image,
        ..
    } = project;

    view! {
        <article class=css::card style=format!("animation-delay: {delay_ms}ms")>
            <div class=css::media>
                {match image {
                    Some(src) => {
                        view! {
                            <img
                                class=css::image
                                src=src
                                alt=title.clone()
                                loading="lazy"
                                on:load=move |_| on_image()
                            />
                        }
                            .into_any()
                    }
                    None => view! { <div class=css::placeholder /> }.into_any(),
                }}
            </div>
            <div class=css::meta>
                <span class=css::category>{category}</span>
                {year.map(|y| view! { <span class=css::year>{y}</span> })}
            </div>
            <h3 class=css::cardTitle>{title}</h3>
            <ul class=css::tags>
                {tags.into_iter().map(|tag| view! { <li class=css::tag>{tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}
