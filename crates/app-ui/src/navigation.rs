//! Navigation system for Trailhead
//!
//! This module provides a stack navigator in the style of a mobile
//! navigation library:
//! - Route registration with a single initial route
//! - Navigation stack management (push, pop, reset)
//! - Screen instances owned per stack entry
//! - A restricted navigation handle that screens use to request transitions
//!
//! Screens never mutate the stack. They record [`NavigationAction`]s on a
//! [`NavigationHandle`] and the [`Navigator`] applies them once the event
//! handler returns.

use crate::components::{Container, Element, Text, TextRole, UiEvent};
use crate::screens::{Screen, ScreenContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Route Parameters
// =============================================================================

/// Untyped parameters passed to a route at navigation time
pub type RouteParams = serde_json::Map<String, serde_json::Value>;

/// Build route params from key/value pairs
pub fn params<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> RouteParams
where
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while declaring a navigator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Two routes share a name
    #[error("Duplicate route name: {0}")]
    DuplicateRoute(String),

    /// No route is marked initial
    #[error("No initial route declared")]
    MissingInitialRoute,

    /// More than one route is marked initial
    #[error("Multiple initial routes declared: {}", .0.join(", "))]
    MultipleInitialRoutes(Vec<String>),

    /// The initial route override names an unregistered route
    #[error("Initial route is not registered: {0}")]
    UnknownInitialRoute(String),
}

/// Result type for navigator construction
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Route Definitions
// =============================================================================

/// Builds a fresh screen instance for a stack entry
pub type ScreenFactory = Rc<dyn Fn() -> Box<dyn Screen>>;

/// A registered destination within a navigator
#[derive(Clone)]
pub struct RouteConfig {
    /// Route name, unique within the navigator
    pub name: String,
    /// Screen component for this route
    pub component: ScreenFactory,
    /// Whether this is the navigator's initial route
    pub initial: bool,
}

impl RouteConfig {
    /// Create a route bound to a screen factory
    pub fn new<F>(name: impl Into<String>, component: F) -> Self
    where
        F: Fn() -> Box<dyn Screen> + 'static,
    {
        Self {
            name: name.into(),
            component: Rc::new(component),
            initial: false,
        }
    }

    /// Mark this route as the initial route
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }
}

impl fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteConfig")
            .field("name", &self.name)
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

/// Options applied to every screen of a navigator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Wrap each screen with a header showing the route title
    pub header_shown: bool,
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// Unique key for this entry
    pub key: String,
    /// Name of the route rendered by this entry
    pub route_name: String,
    /// Parameters passed when this entry was created or last updated
    #[serde(default)]
    pub params: RouteParams,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route_name: impl Into<String>, params: RouteParams) -> Self {
        Self {
            key: uuid::Uuid::new_v4().to_string(),
            route_name: route_name.into(),
            params,
        }
    }
}

/// Ordered history of visited routes
///
/// The root entry is held apart from the pushed entries, so the stack
/// can never be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Bottom of the stack
    root: StackEntry,
    /// Entries pushed above the root (bottom to top)
    pushed: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root entry
    pub fn new(root: StackEntry) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    /// Push an entry onto the stack
    pub fn push(&mut self, entry: StackEntry) {
        self.pushed.push(entry);
    }

    /// Pop the top entry, returning it. The root is never popped.
    pub fn pop(&mut self) -> Option<StackEntry> {
        self.pushed.pop()
    }

    /// Get the current (top) entry
    pub fn current(&self) -> &StackEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Get mutable reference to the current entry
    pub fn current_mut(&mut self) -> &mut StackEntry {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Iterate entries from bottom to top
    pub fn entries(&self) -> impl Iterator<Item = &StackEntry> {
        std::iter::once(&self.root).chain(self.pushed.iter())
    }

    /// Replace the whole stack with a single entry, returning the old entries
    pub fn reset(&mut self, root: StackEntry) -> Vec<StackEntry> {
        let old_root = std::mem::replace(&mut self.root, root);
        let mut dropped = vec![old_root];
        dropped.append(&mut self.pushed);
        dropped
    }
}

// =============================================================================
// Navigation Actions
// =============================================================================

/// A stack transition requested by a screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationAction {
    /// Push a route, or update params if it is already on top
    Navigate {
        /// Target route name
        name: String,
        /// Parameters for the target
        #[serde(skip_serializing_if = "Option::is_none")]
        params: Option<RouteParams>,
    },
    /// Pop the top entry
    GoBack,
    /// Replace the stack with a single entry
    Reset {
        /// Target route name
        name: String,
        /// Parameters for the target
        #[serde(skip_serializing_if = "Option::is_none")]
        params: Option<RouteParams>,
    },
}

/// Restricted interface handed to screens
///
/// Requests are queued in call order and applied by the navigator after
/// the screen's event handler returns.
#[derive(Debug, Default)]
pub struct NavigationHandle {
    actions: Vec<NavigationAction>,
}

impl NavigationHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Request navigation to a route
    pub fn navigate(&mut self, name: impl Into<String>, params: Option<RouteParams>) {
        self.actions.push(NavigationAction::Navigate {
            name: name.into(),
            params,
        });
    }

    /// Request a pop of the current screen
    pub fn go_back(&mut self) {
        self.actions.push(NavigationAction::GoBack);
    }

    /// Request a reset of the stack to a single route
    pub fn reset(&mut self, name: impl Into<String>, params: Option<RouteParams>) {
        self.actions.push(NavigationAction::Reset {
            name: name.into(),
            params,
        });
    }

    /// Actions requested so far
    pub fn actions(&self) -> &[NavigationAction] {
        &self.actions
    }

    fn into_actions(self) -> Vec<NavigationAction> {
        self.actions
    }
}

// =============================================================================
// Navigation Outcomes
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
    /// None (instant)
    None,
}

/// Why a navigation request left the stack untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The route name is not registered
    UnknownRoute(String),
    /// The stack is already at its root
    CannotGoBack,
    /// Re-navigation to the current route without params
    AlreadyActive,
}

/// Result of applying a navigation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A new entry was pushed
    Pushed,
    /// The top entry's params were replaced in place
    ParamsUpdated,
    /// The top entry was popped
    Popped,
    /// The stack was replaced by a single entry
    Reset,
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl NavigationOutcome {
    /// Whether the stack changed
    pub fn changed(&self) -> bool {
        !matches!(self, NavigationOutcome::Ignored(_))
    }

    /// Transition animation for this outcome
    pub fn animation(&self) -> NavigationAnimation {
        match self {
            NavigationOutcome::Pushed => NavigationAnimation::Push,
            NavigationOutcome::Popped => NavigationAnimation::Pop,
            _ => NavigationAnimation::None,
        }
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Declares the routes of a navigator
#[derive(Debug, Default)]
pub struct NavigatorBuilder {
    routes: Vec<RouteConfig>,
    initial_route_name: Option<String>,
    options: ScreenOptions,
}

impl NavigatorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route
    pub fn route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Override the initial route by name
    ///
    /// The override wins over an `initial` flag, but at most one route may
    /// still carry the flag.
    pub fn initial_route_name(mut self, name: impl Into<String>) -> Self {
        self.initial_route_name = Some(name.into());
        self
    }

    /// Set options applied to every screen
    pub fn screen_options(mut self, options: ScreenOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the registry and mount the initial screen
    pub fn build(self) -> Result<Navigator> {
        let mut seen = HashMap::new();
        for (index, route) in self.routes.iter().enumerate() {
            if seen.insert(route.name.clone(), index).is_some() {
                return Err(NavigationError::DuplicateRoute(route.name.clone()));
            }
        }

        let flagged: Vec<usize> = self
            .routes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.initial)
            .map(|(i, _)| i)
            .collect();
        if flagged.len() > 1 {
            return Err(NavigationError::MultipleInitialRoutes(
                flagged
                    .iter()
                    .map(|&i| self.routes[i].name.clone())
                    .collect(),
            ));
        }

        let initial = match (self.initial_route_name, flagged.first()) {
            (Some(name), _) => *seen
                .get(&name)
                .ok_or(NavigationError::UnknownInitialRoute(name))?,
            (None, Some(&only)) => only,
            (None, None) => return Err(NavigationError::MissingInitialRoute),
        };

        let root = StackEntry::new(self.routes[initial].name.clone(), RouteParams::new());
        let mut navigator = Navigator {
            routes: self.routes,
            index: seen,
            stack: NavigationStack::new(root.clone()),
            instances: HashMap::new(),
            options: self.options,
            revision: 0,
        };
        navigator.mount(&root);
        tracing::debug!(route = %root.route_name, "Navigator mounted");
        Ok(navigator)
    }
}

/// Stack navigator owning its routes, stack and screen instances
pub struct Navigator {
    routes: Vec<RouteConfig>,
    index: HashMap<String, usize>,
    stack: NavigationStack,
    instances: HashMap<String, Box<dyn Screen>>,
    options: ScreenOptions,
    revision: u64,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.route_names())
            .field("stack", &self.stack)
            .field("options", &self.options)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Start declaring a navigator
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder::new()
    }

    /// Registered route names in declaration order
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Check if a route name is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The navigation stack
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// The current (top) entry
    pub fn current(&self) -> &StackEntry {
        self.stack.current()
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Counter bumped on every effective stack mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Screen options of this navigator
    pub fn options(&self) -> ScreenOptions {
        self.options
    }

    /// Navigate to a route
    pub fn navigate(&mut self, name: &str, params: Option<RouteParams>) -> NavigationOutcome {
        if !self.is_registered(name) {
            tracing::warn!(route = %name, "Ignoring navigation to unknown route");
            return NavigationOutcome::Ignored(IgnoreReason::UnknownRoute(name.to_string()));
        }

        if self.stack.current().route_name == name {
            return match params {
                Some(params) => {
                    self.stack.current_mut().params = params;
                    self.bump(NavigationOutcome::ParamsUpdated)
                }
                None => NavigationOutcome::Ignored(IgnoreReason::AlreadyActive),
            };
        }

        let entry = StackEntry::new(name, params.unwrap_or_default());
        self.mount(&entry);
        self.stack.push(entry);
        tracing::debug!(route = %name, depth = self.depth(), "Pushed route");
        self.bump(NavigationOutcome::Pushed)
    }

    /// Go back one entry
    pub fn go_back(&mut self) -> NavigationOutcome {
        match self.stack.pop() {
            Some(entry) => {
                self.instances.remove(&entry.key);
                tracing::debug!(route = %entry.route_name, depth = self.depth(), "Popped route");
                self.bump(NavigationOutcome::Popped)
            }
            None => {
                tracing::debug!("Cannot go back from the root route");
                NavigationOutcome::Ignored(IgnoreReason::CannotGoBack)
            }
        }
    }

    /// Replace the whole stack with a single route
    pub fn reset(&mut self, name: &str, params: Option<RouteParams>) -> NavigationOutcome {
        if !self.is_registered(name) {
            tracing::warn!(route = %name, "Ignoring reset to unknown route");
            return NavigationOutcome::Ignored(IgnoreReason::UnknownRoute(name.to_string()));
        }

        let entry = StackEntry::new(name, params.unwrap_or_default());
        self.mount(&entry);
        for dropped in self.stack.reset(entry) {
            self.instances.remove(&dropped.key);
        }
        tracing::debug!(route = %name, "Reset navigation stack");
        self.bump(NavigationOutcome::Reset)
    }

    /// Apply a single navigation action
    pub fn apply(&mut self, action: NavigationAction) -> NavigationOutcome {
        match action {
            NavigationAction::Navigate { name, params } => self.navigate(&name, params),
            NavigationAction::GoBack => self.go_back(),
            NavigationAction::Reset { name, params } => self.reset(&name, params),
        }
    }

    /// Render the current screen
    pub fn render(&self) -> Element {
        let entry = self.stack.current();
        let ctx = ScreenContext {
            route_name: entry.route_name.clone(),
            entry_key: entry.key.clone(),
            can_go_back: self.can_go_back(),
        };

        let body = match self.instances.get(&entry.key) {
            Some(screen) => screen.render(&entry.params, &ctx),
            None => Element::Text(Text::new(format!("Missing screen: {}", entry.route_name))),
        };

        if self.options.header_shown {
            Element::Container(
                Container::column()
                    .with_id("header-layout")
                    .child(Element::Text(
                        Text::new(entry.route_name.clone())
                            .with_id("header-title")
                            .with_role(TextRole::Heading),
                    ))
                    .child(body),
            )
        } else {
            body
        }
    }

    /// Deliver a UI event to the current screen and apply the actions it requested
    pub fn handle_event(&mut self, event: &UiEvent) -> Vec<NavigationOutcome> {
        let mut handle = NavigationHandle::new();
        {
            let entry = self.stack.current();
            match self.instances.get_mut(&entry.key) {
                Some(screen) => screen.handle_event(event, &entry.params, &mut handle),
                None => {
                    tracing::warn!(route = %entry.route_name, "No mounted screen for event");
                    return Vec::new();
                }
            }
        }

        handle
            .into_actions()
            .into_iter()
            .map(|action| self.apply(action))
            .collect()
    }

    fn mount(&mut self, entry: &StackEntry) {
        if let Some(&index) = self.index.get(&entry.route_name) {
            let screen = (self.routes[index].component)();
            self.instances.insert(entry.key.clone(), screen);
        }
    }

    fn bump(&mut self, outcome: NavigationOutcome) -> NavigationOutcome {
        self.revision += 1;
        outcome
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::MockScreen;
    use serde_json::json;
    use std::cell::RefCell;

    fn blank() -> Box<dyn Screen> {
        let mut screen = MockScreen::new();
        screen
            .expect_render()
            .returning(|_, ctx| Element::Text(Text::new(ctx.route_name.clone())));
        screen.expect_handle_event().returning(|_, _, _| ());
        Box::new(screen)
    }

    fn navigator() -> Navigator {
        Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .route(RouteConfig::new("SignUp", blank))
            .route(RouteConfig::new("Main", blank))
            .route(RouteConfig::new("Error", blank))
            .build()
            .unwrap()
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(StackEntry::new("Login", RouteParams::new()));
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(StackEntry::new("SignUp", RouteParams::new()));
        assert_eq!(stack.depth(), 2);
        assert!(stack.can_go_back());
        assert_eq!(stack.current().route_name, "SignUp");

        assert!(stack.pop().is_some());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().route_name, "Login");

        // Can't pop past root
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_stack_reset_returns_dropped_entries() {
        let mut stack = NavigationStack::new(StackEntry::new("Login", RouteParams::new()));
        stack.push(StackEntry::new("SignUp", RouteParams::new()));
        stack.push(StackEntry::new("Main", RouteParams::new()));

        let dropped = stack.reset(StackEntry::new("Login", RouteParams::new()));
        assert_eq!(dropped.len(), 3);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_stack_entry_keys_are_unique() {
        let a = StackEntry::new("Main", RouteParams::new());
        let b = StackEntry::new("Main", RouteParams::new());
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_builder_requires_one_initial_route() {
        let err = Navigator::builder()
            .route(RouteConfig::new("Login", blank))
            .build()
            .unwrap_err();
        assert_eq!(err, NavigationError::MissingInitialRoute);

        let err = Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .route(RouteConfig::new("Main", blank).initial())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::MultipleInitialRoutes(vec!["Login".into(), "Main".into()])
        );
    }

    #[test]
    fn test_builder_rejects_duplicate_names() {
        let err = Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .route(RouteConfig::new("Login", blank))
            .build()
            .unwrap_err();
        assert_eq!(err, NavigationError::DuplicateRoute("Login".into()));
    }

    #[test]
    fn test_initial_route_name_override() {
        let nav = Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .route(RouteConfig::new("Main", blank))
            .initial_route_name("Main")
            .build()
            .unwrap();
        assert_eq!(nav.current().route_name, "Main");

        let err = Navigator::builder()
            .route(RouteConfig::new("Login", blank))
            .initial_route_name("Nowhere")
            .build()
            .unwrap_err();
        assert_eq!(err, NavigationError::UnknownInitialRoute("Nowhere".into()));
    }

    #[test]
    fn test_initial_route_name_still_rejects_multiple_flags() {
        let err = Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .route(RouteConfig::new("Main", blank).initial())
            .route(RouteConfig::new("Error", blank))
            .initial_route_name("Error")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::MultipleInitialRoutes(vec!["Login".into(), "Main".into()])
        );

        // No flag at all is fine when the name is given
        let nav = Navigator::builder()
            .route(RouteConfig::new("Login", blank))
            .route(RouteConfig::new("Error", blank))
            .initial_route_name("Error")
            .build()
            .unwrap();
        assert_eq!(nav.current().route_name, "Error");
    }

    #[test]
    fn test_navigate_pushes_and_go_back_pops() {
        let mut nav = navigator();
        assert_eq!(nav.navigate("SignUp", None), NavigationOutcome::Pushed);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().route_name, "SignUp");

        assert_eq!(nav.go_back(), NavigationOutcome::Popped);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().route_name, "Login");
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let mut nav = navigator();
        let revision = nav.revision();
        assert_eq!(
            nav.go_back(),
            NavigationOutcome::Ignored(IgnoreReason::CannotGoBack)
        );
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.revision(), revision);
    }

    #[test]
    fn test_navigate_unknown_route_is_noop() {
        let mut nav = navigator();
        nav.navigate("SignUp", None);
        let before = nav.stack().clone();

        let outcome = nav.navigate("Profile", None);
        assert_eq!(
            outcome,
            NavigationOutcome::Ignored(IgnoreReason::UnknownRoute("Profile".into()))
        );
        assert_eq!(nav.stack(), &before);
    }

    #[test]
    fn test_navigate_same_route_updates_params_in_place() {
        let mut nav = navigator();
        nav.navigate("Main", None);
        let key = nav.current().key.clone();

        assert_eq!(
            nav.navigate("Main", None),
            NavigationOutcome::Ignored(IgnoreReason::AlreadyActive)
        );
        assert_eq!(nav.depth(), 2);

        let outcome = nav.navigate("Main", Some(params([("tab", "home")])));
        assert_eq!(outcome, NavigationOutcome::ParamsUpdated);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().key, key);
        assert_eq!(nav.current().params.get("tab"), Some(&json!("home")));
    }

    #[test]
    fn test_reset_leaves_single_entry() {
        let mut nav = navigator();
        nav.navigate("SignUp", None);
        nav.navigate("Main", None);
        assert_eq!(nav.depth(), 3);

        let p = params([("errorMessage", "boom")]);
        assert_eq!(nav.reset("Error", Some(p.clone())), NavigationOutcome::Reset);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().route_name, "Error");
        assert_eq!(nav.current().params, p);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_reset_unknown_route_is_noop() {
        let mut nav = navigator();
        nav.navigate("Main", None);
        let outcome = nav.reset("Nowhere", None);
        assert!(!outcome.changed());
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_top_is_last_successful_navigation() {
        let mut nav = navigator();
        let mut last = "Login".to_string();
        for name in ["SignUp", "Bogus", "Main", "Main", "Error", "Missing", "Login"] {
            if nav.navigate(name, None).changed() {
                last = name.to_string();
            }
            assert_eq!(nav.current().route_name, last);
        }
    }

    #[test]
    fn test_only_top_screen_renders() {
        thread_local! {
            static RENDERS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        }

        fn recording() -> Box<dyn Screen> {
            let mut screen = MockScreen::new();
            screen.expect_render().returning(|_, ctx| {
                RENDERS.with(|r| r.borrow_mut().push(ctx.route_name.clone()));
                Element::Text(Text::new(ctx.route_name.clone()))
            });
            Box::new(screen)
        }

        let mut nav = Navigator::builder()
            .route(RouteConfig::new("Login", recording).initial())
            .route(RouteConfig::new("SignUp", recording))
            .build()
            .unwrap();

        nav.render();
        nav.navigate("SignUp", None);
        nav.render();
        nav.go_back();
        nav.render();

        let renders = RENDERS.with(|r| r.borrow().clone());
        assert_eq!(renders, vec!["Login", "SignUp", "Login"]);
    }

    #[test]
    fn test_screen_instance_survives_push_and_is_dropped_on_pop() {
        let mut nav = navigator();
        let login_key = nav.current().key.clone();
        nav.navigate("SignUp", None);
        let sign_up_key = nav.current().key.clone();
        assert!(nav.instances.contains_key(&login_key));
        assert!(nav.instances.contains_key(&sign_up_key));

        nav.go_back();
        assert!(nav.instances.contains_key(&login_key));
        assert!(!nav.instances.contains_key(&sign_up_key));
        assert_eq!(nav.instances.len(), 1);
    }

    #[test]
    fn test_handle_event_applies_actions_in_order() {
        fn jumper() -> Box<dyn Screen> {
            let mut screen = MockScreen::new();
            screen
                .expect_render()
                .returning(|_, _| Element::Text(Text::new("jumper")));
            screen.expect_handle_event().returning(|_, _, nav| {
                nav.navigate("Main", None);
                nav.navigate("Nowhere", None);
                nav.go_back();
            });
            Box::new(screen)
        }

        let mut nav = Navigator::builder()
            .route(RouteConfig::new("Login", jumper).initial())
            .route(RouteConfig::new("Main", blank))
            .build()
            .unwrap();

        let outcomes = nav.handle_event(&UiEvent::press("anything"));
        assert_eq!(
            outcomes,
            vec![
                NavigationOutcome::Pushed,
                NavigationOutcome::Ignored(IgnoreReason::UnknownRoute("Nowhere".into())),
                NavigationOutcome::Popped,
            ]
        );
        assert_eq!(nav.current().route_name, "Login");
    }

    #[test]
    fn test_header_wraps_screen_when_shown() {
        let nav = Navigator::builder()
            .route(RouteConfig::new("Login", blank).initial())
            .screen_options(ScreenOptions { header_shown: true })
            .build()
            .unwrap();

        let tree = nav.render();
        let title = tree.find_text("header-title").unwrap();
        assert_eq!(title.content, "Login");
    }

    #[test]
    fn test_handle_records_actions() {
        let mut handle = NavigationHandle::new();
        handle.navigate("SignUp", None);
        handle.reset("Login", Some(params([("reason", "logout")])));
        handle.go_back();
        assert_eq!(handle.actions().len(), 3);
        assert_eq!(handle.actions()[2], NavigationAction::GoBack);
    }

    #[test]
    fn test_outcome_animation() {
        assert_eq!(NavigationOutcome::Pushed.animation(), NavigationAnimation::Push);
        assert_eq!(NavigationOutcome::Popped.animation(), NavigationAnimation::Pop);
        assert_eq!(NavigationOutcome::Reset.animation(), NavigationAnimation::None);
    }

    #[test]
    fn test_action_serialization() {
        let action = NavigationAction::Navigate {
            name: "Error".to_string(),
            params: Some(params([("errorMessage", "oops")])),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "navigate");
        assert_eq!(json["params"]["errorMessage"], "oops");
    }
}
