//! Content page for every route mounted inside the page layout.

use crate::components::{SiteFooter, SiteHeader};
use crate::layout::PageHandlers;
use harbor_navigation::Page;
use leptos::prelude::*;
use leptos_meta::Title;

/// Renders a content page.
///
/// The body lists the other pages of the same section so readers can move
/// sideways without returning to the menu.
#[component]
pub fn SectionPage(page: Page, handlers: PageHandlers) -> impl IntoView {
    let section = page.section();

    let related = section.map(|section| {
        let links = section
            .routes()
            .iter()
            .filter(|&&(title, _)| title != page.title())
            .map(|&(title, _)| {
                view! {
                    <li>
                        <button class="link-button" on:click=move |_| handlers.open(section, title)>
                            {title}
                        </button>
                    </li>
                }
            })
            .collect_view();
        view! {
            <aside class="related">
                <h2>{format!("More {}", section.label())}</h2>
                <ul>{links}</ul>
            </aside>
        }
    });

    view! {
        <Title text=page.title()/>
        <SiteHeader handlers=handlers closable=true/>
        <article class="content-page" data-path=page.path()>
            <p class="breadcrumb">{section.map(|section| section.label())}</p>
            <h1>{page.title()}</h1>
            {related}
        </article>
        <SiteFooter handlers=handlers/>
    }
}
