//! Site chrome shared by every page: header menus and footer.

use crate::layout::PageHandlers;
use harbor_navigation::{Navigation, Section};
use leptos::callback::Callable;
use leptos::prelude::*;

/// Open/closed state of the header's mobile menu.
///
/// Opening the menu locks body scrolling. Every way of leaving it (toggling
/// it shut, picking an item, the logo or close buttons, or the header
/// unmounting on a route change) releases the lock, so the next page never
/// inherits a pinned body.
#[derive(Clone)]
pub struct MobileMenu {
    navigation: Navigation,
    open: ArcRwSignal<bool>,
}

impl MobileMenu {
    /// Creates a closed menu.
    pub fn new(navigation: Navigation) -> Self {
        Self {
            navigation,
            open: ArcRwSignal::new(false),
        }
    }

    /// Whether the menu is open. Tracked.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Opens a closed menu and closes an open one, locking scroll to match.
    pub fn toggle(&self) {
        let open = !self.open.get_untracked();
        self.open.set(open);
        self.navigation.prevent_body_scroll(open);
    }

    /// Closes this menu and every other mobile menu before leaving the page.
    pub fn dismiss(&self) {
        self.release();
        self.open.set(false);
        self.navigation.close_all_mobile_menus();
    }

    /// Releases the scroll lock if the menu still holds it.
    ///
    /// The state is reference counted, so this still works while the
    /// header's reactive owner is being disposed.
    fn release(&self) {
        if self.open.get_untracked() {
            self.navigation.prevent_body_scroll(false);
        }
    }
}

/// Header with the logo, section menus and the mobile menu toggle.
#[component]
pub fn SiteHeader(
    handlers: PageHandlers,
    /// Shows a close button that returns to the previous page.
    #[prop(optional)]
    closable: bool,
) -> impl IntoView {
    let menu = MobileMenu::new(expect_context::<Navigation>());

    // Menus elsewhere on the page can ask every menu to close.
    #[cfg(target_arch = "wasm32")]
    {
        let open = menu.open.clone();
        let handle = window_event_listener_untyped(
            harbor_navigation::CLOSE_MOBILE_MENU_EVENT,
            move |_| open.set(false),
        );
        on_cleanup(move || handle.remove());
    }

    on_cleanup({
        let menu = menu.clone();
        move || menu.release()
    });

    let menus = Section::ALL
        .into_iter()
        .map(|section| {
            let items = section
                .routes()
                .iter()
                .map(|&(title, _)| {
                    let menu = menu.clone();
                    let select = move |_| {
                        menu.dismiss();
                        handlers.open(section, title);
                    };
                    view! {
                        <li>
                            <button class="nav-item" on:click=select>{title}</button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="nav-section">
                    <span class="nav-section-label">{section.label()}</span>
                    <ul class="nav-dropdown">{items}</ul>
                </div>
            }
        })
        .collect_view();

    let on_logo = {
        let menu = menu.clone();
        move |_| {
            menu.dismiss();
            handlers.on_logo_click.run(());
        }
    };
    let on_toggle = {
        let menu = menu.clone();
        move |_| menu.toggle()
    };
    let nav_class = {
        let menu = menu.clone();
        move || if menu.is_open() { "site-nav open" } else { "site-nav" }
    };
    let expanded = {
        let menu = menu.clone();
        move || menu.is_open().to_string()
    };

    view! {
        <header class="header">
            <div class="header-left">
                <button class="logo" on:click=on_logo>
                    "Harbor"
                </button>
            </div>
            <nav class=nav_class>
                {menus}
            </nav>
            <div class="header-right">
                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    aria-expanded=expanded
                    on:click=on_toggle
                >
                    "☰"
                </button>
                {closable.then(move || view! {
                    <button
                        class="close-button"
                        aria-label="Close"
                        on:click=move |_| {
                            menu.dismiss();
                            handlers.on_close.run(());
                        }
                    >
                        "✕"
                    </button>
                })}
            </div>
        </header>
    }
}

/// Footer with the case studies and get-started calls to action.
#[component]
pub fn SiteFooter(handlers: PageHandlers) -> impl IntoView {
    view! {
        <footer class="footer">
            <button class="cta-button" on:click=move |_| handlers.on_grow_with_us_click.run(())>
                "Grow with us"
            </button>
            <button class="cta-button secondary" on:click=move |_| handlers.on_get_started_click.run(())>
                "Get started"
            </button>
            <button class="link-button" on:click=move |_| handlers.on_who_we_are_item_click.run(harbor_navigation::titles::who_we_are::ABOUT_US.to_string())>
                "About us"
            </button>
        </footer>
    }
}
