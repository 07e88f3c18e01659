//! Application screens
//!
//! Every screen implements [`Screen`]: it renders an [`Element`] tree from
//! a read-only view of its route params, and reacts to UI events by
//! recording transitions on a [`NavigationHandle`].

use crate::components::{Element, UiEvent};
use crate::navigation::{NavigationHandle, RouteParams};

mod error;
mod login;
mod main_screen;
mod sign_up;

pub use error::{ErrorScreen, FALLBACK_ERROR_MESSAGE};
pub use login::{LoginScreen, LOGIN_FAILED_MESSAGE};
pub use main_screen::MainScreen;
pub use sign_up::SignUpScreen;

/// Route names of the root navigator
pub mod routes {
    /// Login form
    pub const LOGIN: &str = "Login";
    /// Account creation form
    pub const SIGN_UP: &str = "SignUp";
    /// Signed-in home
    pub const MAIN: &str = "Main";
    /// Dead-end error screen
    pub const ERROR: &str = "Error";
}

/// Param key holding the message shown by [`ErrorScreen`]
pub const ERROR_MESSAGE_PARAM: &str = "errorMessage";

/// Context passed to a screen when it renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    /// Route this screen is bound to
    pub route_name: String,
    /// Key of the stack entry being rendered
    pub entry_key: String,
    /// Whether a back action would pop this screen
    pub can_go_back: bool,
}

/// A renderable unit bound to a route
#[cfg_attr(test, mockall::automock)]
pub trait Screen {
    /// Render the screen
    fn render(&self, params: &RouteParams, ctx: &ScreenContext) -> Element;

    /// React to a UI event targeting one of this screen's handlers
    fn handle_event(&mut self, event: &UiEvent, params: &RouteParams, nav: &mut NavigationHandle);
}

/// Read a string param, ignoring values of other types
pub fn string_param<'a>(params: &'a RouteParams, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Params for navigating to the error screen
pub fn error_params(message: impl Into<String>) -> RouteParams {
    let mut params = RouteParams::new();
    params.insert(
        ERROR_MESSAGE_PARAM.to_string(),
        serde_json::Value::String(message.into()),
    );
    params
}
