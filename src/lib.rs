//! Trailhead application shell
//!
//! Mounts the root stack navigator (Login, SignUp, Main, Error) and
//! bridges UI events from a frontend to the current screen.
//!
//! # Modules
//!
//! - [`app`] - Root composition and event dispatch
//! - [`config`] - Shell configuration
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, RenderRecord};
pub use config::{ConfigError, ShellConfig};

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised while starting the shell
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Route registry is invalid
    #[error("Navigation error: {0}")]
    Navigation(#[from] app_ui::NavigationError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = AppError::from(app_ui::NavigationError::MissingInitialRoute);
        assert!(err.to_string().contains("Navigation error"));
    }
}
