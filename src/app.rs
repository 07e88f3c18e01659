//! Root composition
//!
//! [`App`] owns the root navigator for the lifetime of the process. Every
//! effective stack change re-renders the top screen, and only that screen.
//! Events delivered to a screen always re-render it, since they may have
//! changed its local state.

use crate::config::ShellConfig;
use crate::Result;
use app_ui::navigation::{self, NavigationAction, NavigationAnimation, ScreenOptions};
use app_ui::screens::{routes, ErrorScreen, LoginScreen, MainScreen, SignUpScreen};
use app_ui::{Element, NavigationOutcome, Navigator, RouteConfig, UiEvent};

/// The most recent render of the top screen
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    /// Navigator revision the render reflects
    pub revision: u64,
    /// Stack entry that was rendered
    pub entry_key: String,
    /// Route of the rendered entry
    pub route_name: String,
    /// Transition that led to this render
    pub animation: NavigationAnimation,
    /// Rendered tree
    pub element: Element,
}

/// Application shell mounting the root navigator
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    last_render: RenderRecord,
    render_count: u64,
}

/// Declare the root navigator: Login, SignUp, Main, Error
pub fn root_navigator(config: &ShellConfig) -> navigation::Result<Navigator> {
    Navigator::builder()
        .route(RouteConfig::new(routes::LOGIN, LoginScreen::boxed).initial())
        .route(RouteConfig::new(routes::SIGN_UP, SignUpScreen::boxed))
        .route(RouteConfig::new(routes::MAIN, MainScreen::boxed))
        .route(RouteConfig::new(routes::ERROR, ErrorScreen::boxed))
        .initial_route_name(config.initial_route.clone())
        .screen_options(ScreenOptions {
            header_shown: config.header_shown,
        })
        .build()
}

impl App {
    /// Mount the root navigator and render the initial screen
    pub fn mount(config: ShellConfig) -> Result<Self> {
        let navigator = root_navigator(&config)?;
        let last_render = Self::snapshot(&navigator, NavigationAnimation::None);
        tracing::info!(route = %last_render.route_name, "App mounted");
        Ok(Self {
            navigator,
            last_render,
            render_count: 1,
        })
    }

    /// The root navigator
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The currently displayed tree
    pub fn current_screen(&self) -> &Element {
        &self.last_render.element
    }

    /// The most recent render
    pub fn last_render(&self) -> &RenderRecord {
        &self.last_render
    }

    /// Number of renders since mount
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Deliver a UI event to the top screen
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<NavigationOutcome> {
        tracing::trace!(handler = %event.target(), "Dispatching UI event");
        let outcomes = self.navigator.handle_event(event);
        let animation = outcomes
            .iter()
            .rev()
            .find(|o| o.changed())
            .map(NavigationOutcome::animation)
            .unwrap_or(NavigationAnimation::None);
        self.rerender(animation);
        outcomes
    }

    /// Apply a navigation action from outside the screens (deep links, system back)
    pub fn apply(&mut self, action: NavigationAction) -> NavigationOutcome {
        let outcome = self.navigator.apply(action);
        self.rerender_if_changed(outcome.animation());
        outcome
    }

    /// Handle a system back press
    pub fn back(&mut self) -> NavigationOutcome {
        self.apply(NavigationAction::GoBack)
    }

    fn rerender_if_changed(&mut self, animation: NavigationAnimation) {
        if self.navigator.revision() != self.last_render.revision {
            self.rerender(animation);
        }
    }

    fn rerender(&mut self, animation: NavigationAnimation) {
        self.last_render = Self::snapshot(&self.navigator, animation);
        self.render_count += 1;
        tracing::debug!(
            route = %self.last_render.route_name,
            depth = self.navigator.depth(),
            "Rendered top screen"
        );
    }

    fn snapshot(navigator: &Navigator, animation: NavigationAnimation) -> RenderRecord {
        let entry = navigator.current();
        RenderRecord {
            revision: navigator.revision(),
            entry_key: entry.key.clone(),
            route_name: entry.route_name.clone(),
            animation,
            element: navigator.render(),
        }
    }
}
