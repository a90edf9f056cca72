//! Main Leptos application component and routing.
//!
//! Routing is URL-driven: each path below renders its page on a direct load,
//! with no dependence on earlier in-app navigation. Paths mirror
//! [`harbor_navigation::ROUTES`] in the same order, and every layout route
//! looks its page up in that table by the current URL.

use crate::browser::host_window;
use crate::layout::PageLayout;
use crate::pages::{HomePage, NotFoundPage};
use harbor_navigation::{Navigation, Page};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Harbor"/>
        <Router>
            <AppRoutes/>
        </Router>
    }
}

/// Route table, rendered inside the router context.
///
/// Registers the router's navigate function with a fresh [`Navigation`]
/// before any page renders, then provides it to every page as context.
#[component]
fn AppRoutes() -> impl IntoView {
    let navigate = use_navigate();
    let navigation = Navigation::new(host_window());
    navigation.set_navigate_function(move |path| navigate(path, NavigateOptions::default()));
    provide_context(navigation);

    view! {
        <main class="site">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                // Services
                <Route path=path!("/services/cloud-practice") view=TablePage/>
                <Route path=path!("/services/digital-engineering") view=TablePage/>
                <Route path=path!("/services/big-data") view=TablePage/>
                <Route path=path!("/services/app-modernization") view=TablePage/>
                <Route path=path!("/services/security") view=TablePage/>
                <Route path=path!("/services/database-management") view=TablePage/>
                <Route path=path!("/services/erp-testing") view=TablePage/>
                // AI solutions
                <Route path=path!("/ai-solutions") view=TablePage/>
                <Route path=path!("/ai-solutions/bfsi-agents") view=TablePage/>
                <Route path=path!("/ai-solutions/brand-management") view=TablePage/>
                // Products
                <Route path=path!("/products/agent-studio") view=TablePage/>
                <Route path=path!("/products/atlas-api-manager") view=TablePage/>
                <Route path=path!("/products/ottohm-video") view=TablePage/>
                <Route path=path!("/products/itsm-ticketing") view=TablePage/>
                <Route path=path!("/products/ai-ops") view=TablePage/>
                <Route path=path!("/products/smart-contracts") view=TablePage/>
                // Who we are
                <Route path=path!("/who-we-are/our-team") view=TablePage/>
                <Route path=path!("/who-we-are/about-us") view=TablePage/>
                <Route path=path!("/who-we-are/partners") view=TablePage/>
                <Route path=path!("/who-we-are/careers") view=TablePage/>
                <Route path=path!("/who-we-are/news-updates") view=TablePage/>
                // Other
                <Route path=path!("/case-studies") view=TablePage/>
            </Routes>
        </main>
    }
}

/// Resolves a location's pathname against the route table.
///
/// A trailing slash is ignored, so `/case-studies/` renders the same page
/// as `/case-studies`.
pub fn page_for_location(pathname: &str) -> Option<Page> {
    let trimmed = pathname.trim_end_matches('/');
    Page::from_path(if trimmed.is_empty() { "/" } else { trimmed })
}

/// Page layout for whichever table page the current URL names.
#[component]
fn TablePage() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    match page_for_location(&pathname) {
        Some(page) => view! { <PageLayout page=page/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}
