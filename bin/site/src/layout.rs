//! Page layout wrapper.
//!
//! Every content page receives the same navigation capability: a
//! [`PageHandlers`] value whose callbacks delegate to the shared
//! [`Navigation`] helper. Pages declare it as a prop, so a page that
//! forgets to accept it fails to compile instead of silently missing
//! its handlers.

use crate::pages::SectionPage;
use harbor_navigation::{Navigation, Page, Section};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Navigation callbacks handed to each page.
#[derive(Clone, Copy)]
pub struct PageHandlers {
    /// Closes the page by going back one history entry.
    pub on_close: Callback<()>,
    pub on_service_click: Callback<String>,
    /// `None` opens the AI solutions landing page.
    pub on_ai_click: Callback<Option<String>>,
    pub on_product_click: Callback<String>,
    pub on_grow_with_us_click: Callback<()>,
    pub on_who_we_are_item_click: Callback<String>,
    pub on_logo_click: Callback<()>,
    /// Placeholder; the get-started flow has no destination yet.
    pub on_get_started_click: Callback<()>,
}

impl PageHandlers {
    /// Builds handlers that delegate to `navigation`.
    ///
    /// Failed navigations are already logged by the helper, so the
    /// callbacks discard the result.
    pub fn new(navigation: Navigation) -> Self {
        let nav = navigation.clone();
        let on_close = Callback::new(move |()| nav.go_back());

        let nav = navigation.clone();
        let on_service_click = Callback::new(move |title: String| {
            let _ = nav.navigate_to_service(&title);
        });

        let nav = navigation.clone();
        let on_ai_click = Callback::new(move |title: Option<String>| {
            let _ = nav.navigate_to_ai(title.as_deref());
        });

        let nav = navigation.clone();
        let on_product_click = Callback::new(move |title: String| {
            let _ = nav.navigate_to_product(&title);
        });

        let nav = navigation.clone();
        let on_grow_with_us_click = Callback::new(move |()| {
            let _ = nav.navigate_to_case_studies();
        });

        let nav = navigation.clone();
        let on_who_we_are_item_click = Callback::new(move |item: String| {
            let _ = nav.navigate_to_who_we_are(&item);
        });

        let nav = navigation;
        let on_logo_click = Callback::new(move |()| {
            let _ = nav.navigate_to_home();
        });

        Self {
            on_close,
            on_service_click,
            on_ai_click,
            on_product_click,
            on_grow_with_us_click,
            on_who_we_are_item_click,
            on_logo_click,
            on_get_started_click: Callback::new(|()| {}),
        }
    }

    /// Opens the page titled `title` in `section` through the matching handler.
    pub fn open(&self, section: Section, title: &str) {
        let title = title.to_string();
        match section {
            Section::Services => self.on_service_click.run(title),
            Section::Products => self.on_product_click.run(title),
            Section::AiSolutions => self.on_ai_click.run(Some(title)),
            Section::WhoWeAre => self.on_who_we_are_item_click.run(title),
        }
    }
}

/// Wraps a content page, handing it the navigation callbacks.
#[component]
pub fn PageLayout(page: Page) -> impl IntoView {
    let handlers = PageHandlers::new(expect_context::<Navigation>());

    view! { <SectionPage page=page handlers=handlers/> }
}
