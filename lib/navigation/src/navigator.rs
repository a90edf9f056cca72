//! Navigation helper.
//!
//! Translates page titles into paths and drives the router. The router's
//! navigate function is injected with [`Navigation::set_navigate_function`];
//! until then every request is dropped with a logged error.

use crate::error::NavigationError;
use crate::menu;
use crate::routes::{CASE_STUDIES_PATH, HOME_PATH, Section};
use crate::titles;
use crate::window::HostWindow;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error};

/// Router callback performing an in-app transition to a path.
pub type NavigateFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle to the site's navigation state.
///
/// Clones share the same navigate function and host window, so a handle
/// can be captured freely by page callbacks.
#[derive(Clone)]
pub struct Navigation {
    navigate: Arc<RwLock<Option<NavigateFn>>>,
    window: Arc<dyn HostWindow>,
}

impl Navigation {
    /// Creates a helper with no navigate function registered.
    pub fn new(window: Arc<dyn HostWindow>) -> Self {
        Self {
            navigate: Arc::new(RwLock::new(None)),
            window,
        }
    }

    /// Registers the router's navigate function, replacing any previous one.
    pub fn set_navigate_function<F>(&self, navigate: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut slot = self.navigate.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(navigate));
    }

    /// Returns true once a navigate function has been registered.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.navigate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Navigates to a service page by title.
    pub fn navigate_to_service(&self, title: &str) -> Result<&'static str, NavigationError> {
        self.navigate_to_title(Section::Services, title)
    }

    /// Navigates to a product page by title.
    pub fn navigate_to_product(&self, title: &str) -> Result<&'static str, NavigationError> {
        self.navigate_to_title(Section::Products, title)
    }

    /// Navigates to an AI solution page, or the AI solutions landing page
    /// when the title is missing or empty.
    pub fn navigate_to_ai(&self, title: Option<&str>) -> Result<&'static str, NavigationError> {
        self.navigate_to_title(
            Section::AiSolutions,
            title
                .filter(|title| !title.is_empty())
                .unwrap_or(titles::ai::AI_SOLUTIONS),
        )
    }

    /// Navigates to a "who we are" page by item title.
    pub fn navigate_to_who_we_are(&self, item: &str) -> Result<&'static str, NavigationError> {
        self.navigate_to_title(Section::WhoWeAre, item)
    }

    /// Navigates to the home page.
    pub fn navigate_to_home(&self) -> Result<&'static str, NavigationError> {
        self.navigate_to_path(HOME_PATH)
    }

    /// Navigates to the case studies page.
    pub fn navigate_to_case_studies(&self) -> Result<&'static str, NavigationError> {
        self.navigate_to_path(CASE_STUDIES_PATH)
    }

    /// Steps back one entry in history.
    pub fn go_back(&self) {
        self.window.history_back();
        debug!("navigated back");
    }

    /// Closes every open mobile menu and releases the body scroll styles.
    pub fn close_all_mobile_menus(&self) {
        menu::close_all_mobile_menus(self.window.as_ref());
    }

    /// Locks (`true`) or unlocks (`false`) body scrolling.
    pub fn prevent_body_scroll(&self, lock: bool) {
        menu::prevent_body_scroll(self.window.as_ref(), lock);
    }

    fn navigate_to_title(
        &self,
        section: Section,
        title: &str,
    ) -> Result<&'static str, NavigationError> {
        let Some(path) = section.resolve(title) else {
            let err = NavigationError::UnknownTitle {
                section,
                title: title.to_string(),
            };
            error!(%section, title, "{err}");
            return Err(err);
        };
        self.navigate_to_path(path)
    }

    fn navigate_to_path(&self, path: &'static str) -> Result<&'static str, NavigationError> {
        // Clone out of the lock so the callback may re-enter this helper.
        let navigate = self
            .navigate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(navigate) = navigate else {
            let err = NavigationError::NotInitialized;
            error!(path, "{err}");
            return Err(err);
        };

        self.window.scroll_to(0.0);
        navigate(path);
        debug!(path, "navigated");
        Ok(path)
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{AI_ROUTES, PRODUCT_ROUTES, SERVICE_ROUTES, WHO_WE_ARE_ROUTES};
    use crate::window::{BodyStyle, CLOSE_MOBILE_MENU_EVENT, MemoryWindow};
    use std::sync::Mutex;

    struct Harness {
        navigation: Navigation,
        window: Arc<MemoryWindow>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Harness {
        fn uninitialized() -> Self {
            let window = Arc::new(MemoryWindow::scrolled_to(750.0));
            Self {
                navigation: Navigation::new(window.clone()),
                window,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn new() -> Self {
            let harness = Self::uninitialized();
            let calls = harness.calls.clone();
            harness
                .navigation
                .set_navigate_function(move |path| calls.lock().unwrap().push(path.to_string()));
            harness
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[test]
    fn every_service_title_navigates_once_to_its_path() {
        for (title, path) in SERVICE_ROUTES {
            let harness = Harness::new();
            assert_eq!(harness.navigation.navigate_to_service(title), Ok(*path));
            assert_eq!(harness.calls(), vec![path.to_string()]);
        }
    }

    #[test]
    fn every_product_title_navigates_once_to_its_path() {
        for (title, path) in PRODUCT_ROUTES {
            let harness = Harness::new();
            assert_eq!(harness.navigation.navigate_to_product(title), Ok(*path));
            assert_eq!(harness.calls(), vec![path.to_string()]);
        }
    }

    #[test]
    fn every_who_we_are_item_navigates_once_to_its_path() {
        for (title, path) in WHO_WE_ARE_ROUTES {
            let harness = Harness::new();
            assert_eq!(harness.navigation.navigate_to_who_we_are(title), Ok(*path));
            assert_eq!(harness.calls(), vec![path.to_string()]);
        }
    }

    #[test]
    fn every_ai_title_navigates_once_to_its_path() {
        for (title, path) in AI_ROUTES {
            let harness = Harness::new();
            assert_eq!(harness.navigation.navigate_to_ai(Some(title)), Ok(*path));
            assert_eq!(harness.calls(), vec![path.to_string()]);
        }
    }

    #[test]
    fn ai_without_title_goes_to_ai_solutions() {
        let harness = Harness::new();
        let expected = Section::AiSolutions.resolve("AI Solutions");
        assert_eq!(harness.navigation.navigate_to_ai(None).ok(), expected);
        assert_eq!(harness.calls(), vec!["/ai-solutions".to_string()]);
    }

    #[test]
    fn ai_with_empty_title_goes_to_ai_solutions() {
        let harness = Harness::new();
        assert_eq!(harness.navigation.navigate_to_ai(Some("")), Ok("/ai-solutions"));
        assert_eq!(harness.calls(), vec!["/ai-solutions".to_string()]);
    }

    #[test]
    fn fixed_destinations() {
        let harness = Harness::new();
        assert_eq!(harness.navigation.navigate_to_home(), Ok("/"));
        assert_eq!(harness.navigation.navigate_to_case_studies(), Ok("/case-studies"));
        assert_eq!(harness.calls(), vec!["/".to_string(), "/case-studies".to_string()]);
    }

    #[test]
    fn navigation_scrolls_to_top_first() {
        let harness = Harness::new();
        let window = harness.window.clone();
        let observed = Arc::new(Mutex::new(None));
        let seen = observed.clone();
        harness.navigation.set_navigate_function(move |_| {
            *seen.lock().unwrap() = Some(window.scroll_offset());
        });

        harness.navigation.navigate_to_home().unwrap();

        assert_eq!(*observed.lock().unwrap(), Some(0.0));
        assert_eq!(harness.window.scroll_calls(), vec![0.0]);
    }

    #[test]
    fn requests_before_initialization_are_dropped() {
        let harness = Harness::uninitialized();
        let nav = &harness.navigation;

        assert!(!nav.is_initialized());
        assert_eq!(nav.navigate_to_service("Cloud Practice"), Err(NavigationError::NotInitialized));
        assert_eq!(nav.navigate_to_product("Agent Studio"), Err(NavigationError::NotInitialized));
        assert_eq!(nav.navigate_to_ai(None), Err(NavigationError::NotInitialized));
        assert_eq!(nav.navigate_to_who_we_are("Careers"), Err(NavigationError::NotInitialized));
        assert_eq!(nav.navigate_to_home(), Err(NavigationError::NotInitialized));
        assert_eq!(nav.navigate_to_case_studies(), Err(NavigationError::NotInitialized));

        assert!(harness.calls().is_empty());
        assert!(harness.window.scroll_calls().is_empty());
        assert_eq!(harness.window.scroll_offset(), 750.0);
    }

    #[test]
    fn unknown_title_is_dropped_without_side_effects() {
        let harness = Harness::new();
        let result = harness.navigation.navigate_to_service("Quantum Consulting");
        assert_eq!(
            result,
            Err(NavigationError::UnknownTitle {
                section: Section::Services,
                title: "Quantum Consulting".to_string(),
            })
        );
        assert!(harness.navigation.navigate_to_ai(Some("Robotics")).is_err());
        assert!(harness.calls().is_empty());
        assert!(harness.window.scroll_calls().is_empty());
    }

    #[test]
    fn titles_are_section_scoped() {
        let harness = Harness::new();
        assert!(harness.navigation.navigate_to_product("Cloud Practice").is_err());
        assert!(harness.calls().is_empty());
    }

    #[test]
    fn set_navigate_function_replaces_previous() {
        let harness = Harness::new();
        let second = Arc::new(Mutex::new(Vec::new()));
        let sink = second.clone();
        harness
            .navigation
            .set_navigate_function(move |path| sink.lock().unwrap().push(path.to_string()));

        harness.navigation.navigate_to_home().unwrap();

        assert!(harness.calls().is_empty());
        assert_eq!(*second.lock().unwrap(), vec!["/".to_string()]);
    }

    #[test]
    fn clones_share_the_navigate_function() {
        let harness = Harness::uninitialized();
        let clone = harness.navigation.clone();
        let calls = harness.calls.clone();
        harness
            .navigation
            .set_navigate_function(move |path| calls.lock().unwrap().push(path.to_string()));

        assert!(clone.is_initialized());
        clone.navigate_to_case_studies().unwrap();
        assert_eq!(harness.calls(), vec!["/case-studies".to_string()]);
    }

    #[test]
    fn callback_may_reenter_the_helper() {
        let harness = Harness::uninitialized();
        let inner = harness.navigation.clone();
        let calls = harness.calls.clone();
        harness.navigation.set_navigate_function(move |path| {
            calls.lock().unwrap().push(path.to_string());
            if path == "/case-studies" {
                let _ = inner.navigate_to_home();
            }
        });

        harness.navigation.navigate_to_case_studies().unwrap();
        assert_eq!(harness.calls(), vec!["/case-studies".to_string(), "/".to_string()]);
    }

    #[test]
    fn go_back_steps_history() {
        let harness = Harness::new();
        harness.navigation.go_back();
        assert_eq!(harness.window.history_backs(), 1);
        assert!(harness.calls().is_empty());
    }

    #[test]
    fn menu_operations_act_on_the_window() {
        let harness = Harness::new();
        harness.window.user_scroll(500.0);

        harness.navigation.prevent_body_scroll(true);
        assert_eq!(harness.window.body_style(BodyStyle::Overflow), "hidden");
        harness.navigation.prevent_body_scroll(false);
        assert_eq!(harness.window.scroll_offset(), 500.0);

        harness.navigation.close_all_mobile_menus();
        assert_eq!(harness.window.broadcasts(), vec![CLOSE_MOBILE_MENU_EVENT.to_string()]);
    }
}
