//! Error types for navigation requests.
//!
//! Both conditions are recoverable: the helper logs them and performs no
//! navigation. They are also returned so callers can react if they choose.

use crate::routes::Section;
use std::fmt;

/// Reasons a navigation request was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No navigate function has been registered yet.
    NotInitialized,
    /// The title is not present in the section's mapping.
    UnknownTitle { section: Section, title: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "navigate function not initialized"),
            Self::UnknownTitle { section, title } => {
                write!(f, "unknown {section}: {title}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
