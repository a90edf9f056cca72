//! Home page component.

use crate::components::{SiteFooter, SiteHeader};
use crate::layout::PageHandlers;
use harbor_navigation::{Navigation, Section};
use leptos::callback::Callable;
use leptos::prelude::*;
use leptos_meta::Title;

/// The home page. Mounted without the page layout; it builds its own handlers.
#[component]
pub fn HomePage() -> impl IntoView {
    let handlers = PageHandlers::new(expect_context::<Navigation>());

    let highlights = Section::ALL
        .into_iter()
        .map(|section| {
            let (first, _) = section.routes()[0];
            view! {
                <li class="highlight">
                    <h2>{section.label()}</h2>
                    <button class="link-button" on:click=move |_| handlers.open(section, first)>
                        {first}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text="Harbor"/>
        <SiteHeader handlers=handlers/>
        <div class="home-page">
            <section class="hero">
                <h1>"Engineering for what's next"</h1>
                <p>"Cloud, data and AI services for enterprises that ship."</p>
                <button class="cta-button" on:click=move |_| handlers.on_ai_click.run(None)>
                    "Explore AI Solutions"
                </button>
            </section>
            <ul class="highlights">{highlights}</ul>
        </div>
        <SiteFooter handlers=handlers/>
    }
}
