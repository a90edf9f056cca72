//! Routing and navigation for the Harbor marketing site.
//!
//! This crate provides:
//!
//! - **Route Table**: every page the site mounts, keyed by its literal URL path
//! - **Title Mappings**: human-readable titles ("Cloud Practice") to paths
//! - **Navigation**: the helper pages use to move between routes
//! - **Scroll Lock**: body scroll locking for the mobile menus
//! - **Sitemap**: an XML sitemap rendered from the route table
//!
//! Nothing here touches the browser directly. Host access goes through
//! [`HostWindow`], so the same logic runs in the hydrated client, during
//! server rendering, and in tests.

pub mod error;
pub mod menu;
pub mod navigator;
pub mod routes;
pub mod sitemap;
pub mod titles;
pub mod window;

pub use error::NavigationError;
pub use navigator::{NavigateFn, Navigation};
pub use routes::{Page, RouteEntry, Section, ROUTES};
pub use window::{BodyStyle, HostWindow, MemoryWindow, CLOSE_MOBILE_MENU_EVENT};
