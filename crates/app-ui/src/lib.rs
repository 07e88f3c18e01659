//! User interface for Trailhead
//!
//! This crate provides the UI layer: the stack navigator, the screens it
//! routes between, and the component tree screens render to.
//!
//! # Modules
//!
//! - [`navigation`] - Route registry, navigation stack and navigator
//! - [`screens`] - Login, sign-up, error and main screens
//! - [`components`] - Serializable UI components and events
//! - [`theme`] - Palette and spacing
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Navigator, RouteConfig};
//! use app_ui::screens::{routes, ErrorScreen, LoginScreen, SignUpScreen};
//!
//! let mut nav = Navigator::builder()
//!     .route(RouteConfig::new(routes::LOGIN, LoginScreen::boxed).initial())
//!     .route(RouteConfig::new(routes::SIGN_UP, SignUpScreen::boxed))
//!     .route(RouteConfig::new(routes::ERROR, ErrorScreen::boxed))
//!     .build()
//!     .unwrap();
//!
//! nav.navigate(routes::SIGN_UP, None);
//! assert_eq!(nav.depth(), 2);
//! nav.go_back();
//! assert_eq!(nav.current().route_name, routes::LOGIN);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use components::{Element, UiEvent};

pub use navigation::{
    IgnoreReason, NavigationAction, NavigationAnimation, NavigationError, NavigationHandle,
    NavigationOutcome, NavigationStack, Navigator, NavigatorBuilder, RouteConfig, RouteParams,
    ScreenOptions, StackEntry,
};

pub use screens::{Screen, ScreenContext};
