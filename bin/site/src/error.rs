//! Domain error types for server startup.
//!
//! Startup functions return `rootcause::Report<SiteError>`; `main` logs the
//! report and exits.

use std::fmt;

/// Errors that stop the server from starting or serving.
#[derive(Debug)]
pub enum SiteError {
    /// Site configuration could not be loaded.
    Config { details: String },
    /// Leptos options could not be read from the package metadata.
    LeptosConfig { details: String },
    /// The listener could not bind its address.
    Bind { addr: String, details: String },
    /// The server stopped with an error.
    Serve { details: String },
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => write!(f, "invalid site configuration: {details}"),
            Self::LeptosConfig { details } => {
                write!(f, "invalid leptos configuration: {details}")
            }
            Self::Bind { addr, details } => {
                write!(f, "failed to bind to {addr}: {details}")
            }
            Self::Serve { details } => write!(f, "server error: {details}"),
        }
    }
}

impl std::error::Error for SiteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_names_address() {
        let err = SiteError::Bind {
            addr: "127.0.0.1:3000".to_string(),
            details: "address in use".to_string(),
        };
        assert!(err.to_string().contains("127.0.0.1:3000"));
        assert!(err.to_string().contains("address in use"));
    }

    #[test]
    fn config_error_display() {
        let err = SiteError::Config {
            details: "public_url: invalid type".to_string(),
        };
        assert!(err.to_string().starts_with("invalid site configuration"));
    }
}
