//! Page components for the application.
//!
//! Content pages take a [`PageHandlers`](crate::layout::PageHandlers) prop
//! and wire it to their own buttons; they never navigate on their own.

pub mod home;
pub mod not_found;
pub mod section;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use section::SectionPage;
