//! Login form screen

use super::{error_params, routes, Screen, ScreenContext};
use crate::components::{
    Button, Container, Element, Input, JustifyContent, Spacing, StyleProps, Text, TextAlign,
    TextRole, UiEvent,
};
use crate::navigation::{NavigationHandle, RouteParams};
use crate::theme::{font_size, palette, spacing};

/// Message shown on the error screen when the form is incomplete
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again later.";

const EMAIL: &str = "login.email";
const PASSWORD: &str = "login.password";
const SUBMIT: &str = "login.submit";
const SIGN_UP: &str = "login.sign_up";

/// Email/password form
///
/// Submitting only checks that both fields are filled in. Credentials are
/// never verified here.
#[derive(Debug, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
}

impl LoginScreen {
    /// Boxed instance for route registration
    pub fn boxed() -> Box<dyn Screen> {
        Box::new(Self::default())
    }

    fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl Screen for LoginScreen {
    fn render(&self, _params: &RouteParams, _ctx: &ScreenContext) -> Element {
        let card = StyleProps {
            padding: Some(Spacing::uniform(spacing::MD)),
            background_color: Some(palette::CARD.to_string()),
            border_width: Some(2.0),
            border_color: Some(palette::CARD_BORDER.to_string()),
            border_radius: Some(10.0),
            ..Default::default()
        };

        let form = Container::column()
            .with_id("login.form")
            .with_gap(spacing::SM)
            .with_style(card)
            .child(Element::Text(
                Text::new("Login")
                    .with_role(TextRole::Heading)
                    .with_size(font_size::TITLE)
                    .with_align(TextAlign::Center),
            ))
            .child(Element::Input(
                Input::email()
                    .with_id(EMAIL)
                    .with_label("Email")
                    .with_placeholder("you@example.com")
                    .with_value(self.email.clone())
                    .on_change(EMAIL),
            ))
            .child(Element::Input(
                Input::password()
                    .with_id(PASSWORD)
                    .with_label("Password")
                    .with_value(self.password.clone())
                    .on_change(PASSWORD),
            ))
            .child(Element::Container(
                Container::row()
                    .with_justify(JustifyContent::SpaceBetween)
                    .child(Element::Button(
                        Button::new("Sign Up").with_id(SIGN_UP).on_press(SIGN_UP),
                    ))
                    .child(Element::Button(
                        Button::new("Log In")
                            .with_id(SUBMIT)
                            .on_press(SUBMIT)
                            .with_colors(palette::PRIMARY, palette::ON_PRIMARY),
                    )),
            ));

        Element::Container(
            Container::column()
                .with_id("login")
                .fill()
                .with_justify(JustifyContent::Center)
                .with_padding(Spacing::uniform(spacing::MD))
                .with_background(palette::BACKGROUND)
                .child(Element::Container(form)),
        )
    }

    fn handle_event(&mut self, event: &UiEvent, _params: &RouteParams, nav: &mut NavigationHandle) {
        match event {
            UiEvent::ChangeText { target, value } if target == EMAIL => {
                self.email = value.clone();
            }
            UiEvent::ChangeText { target, value } if target == PASSWORD => {
                self.password = value.clone();
            }
            UiEvent::Press { target } if target == SUBMIT => {
                if self.is_complete() {
                    tracing::debug!("Login form submitted");
                    nav.navigate(routes::MAIN, None);
                } else {
                    tracing::debug!("Login form incomplete");
                    nav.navigate(routes::ERROR, Some(error_params(LOGIN_FAILED_MESSAGE)));
                }
            }
            UiEvent::Press { target } if target == SIGN_UP => {
                nav.navigate(routes::SIGN_UP, None);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationAction;

    fn ctx() -> ScreenContext {
        ScreenContext {
            route_name: "Login".into(),
            entry_key: "k".into(),
            can_go_back: false,
        }
    }

    fn send(screen: &mut LoginScreen, event: UiEvent) -> Vec<NavigationAction> {
        let mut nav = NavigationHandle::new();
        screen.handle_event(&event, &RouteParams::new(), &mut nav);
        nav.actions().to_vec()
    }

    #[test]
    fn test_typing_updates_rendered_inputs() {
        let mut screen = LoginScreen::default();
        assert!(send(&mut screen, UiEvent::change_text(EMAIL, "ana@example.com")).is_empty());
        send(&mut screen, UiEvent::change_text(PASSWORD, "hunter2"));

        let tree = screen.render(&RouteParams::new(), &ctx());
        assert_eq!(tree.find_input(EMAIL).unwrap().value, "ana@example.com");
        let password = tree.find_input(PASSWORD).unwrap();
        assert_eq!(password.value, "hunter2");
        assert!(password.is_secure());
    }

    #[test]
    fn test_submit_complete_form_navigates_to_main() {
        let mut screen = LoginScreen::default();
        send(&mut screen, UiEvent::change_text(EMAIL, "ana@example.com"));
        send(&mut screen, UiEvent::change_text(PASSWORD, "hunter2"));

        let actions = send(&mut screen, UiEvent::press(SUBMIT));
        assert_eq!(
            actions,
            vec![NavigationAction::Navigate {
                name: routes::MAIN.into(),
                params: None
            }]
        );
    }

    #[test]
    fn test_submit_empty_form_navigates_to_error() {
        let mut screen = LoginScreen::default();
        send(&mut screen, UiEvent::change_text(EMAIL, "   "));

        let actions = send(&mut screen, UiEvent::press(SUBMIT));
        assert_eq!(
            actions,
            vec![NavigationAction::Navigate {
                name: routes::ERROR.into(),
                params: Some(error_params(LOGIN_FAILED_MESSAGE)),
            }]
        );
    }

    #[test]
    fn test_sign_up_link() {
        let mut screen = LoginScreen::default();
        let actions = send(&mut screen, UiEvent::press(SIGN_UP));
        assert_eq!(
            actions,
            vec![NavigationAction::Navigate {
                name: routes::SIGN_UP.into(),
                params: None
            }]
        );
    }

    #[test]
    fn test_renders_both_actions() {
        let tree = LoginScreen::default().render(&RouteParams::new(), &ctx());
        assert_eq!(tree.find_button(SUBMIT).unwrap().label, "Log In");
        assert_eq!(tree.find_button(SIGN_UP).unwrap().label, "Sign Up");
    }
}
