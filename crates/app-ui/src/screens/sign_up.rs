//! Account creation form screen

use super::{error_params, routes, Screen, ScreenContext};
use crate::components::{
    Button, Container, Element, Input, JustifyContent, Spacing, Text, TextAlign, TextRole,
    UiEvent,
};
use crate::navigation::{NavigationHandle, RouteParams};
use crate::theme::{font_size, palette, spacing};

const EMAIL: &str = "sign_up.email";
const PASSWORD: &str = "sign_up.password";
const CONFIRM: &str = "sign_up.confirm";
const SUBMIT: &str = "sign_up.submit";
const BACK: &str = "sign_up.back";

/// Email, password and confirmation form
#[derive(Debug, Default)]
pub struct SignUpScreen {
    email: String,
    password: String,
    confirm: String,
}

impl SignUpScreen {
    /// Boxed instance for route registration
    pub fn boxed() -> Box<dyn Screen> {
        Box::new(Self::default())
    }

    /// Reason the form cannot be submitted, if any
    fn problem(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            Some("Please fill in every field.")
        } else if self.password != self.confirm {
            Some("Passwords do not match.")
        } else {
            None
        }
    }
}

impl Screen for SignUpScreen {
    fn render(&self, _params: &RouteParams, ctx: &ScreenContext) -> Element {
        Element::Container(
            Container::column()
                .with_id("sign_up")
                .fill()
                .with_justify(JustifyContent::Center)
                .with_gap(spacing::SM)
                .with_padding(Spacing::uniform(spacing::MD))
                .with_background(palette::BACKGROUND)
                .child(Element::Text(
                    Text::new("Create Account")
                        .with_role(TextRole::Heading)
                        .with_size(font_size::TITLE)
                        .with_align(TextAlign::Center),
                ))
                .child(Element::Input(
                    Input::email()
                        .with_id(EMAIL)
                        .with_label("Email")
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
                .child(Element::Input(
                    Input::password()
                        .with_id(CONFIRM)
                        .with_label("Confirm Password")
                        .with_value(self.confirm.clone())
                        .on_change(CONFIRM),
                ))
                .child(Element::Button(
                    Button::new("Create Account")
                        .with_id(SUBMIT)
                        .on_press(SUBMIT)
                        .with_colors(palette::SECONDARY, palette::ON_PRIMARY),
                ))
                .child(Element::Button(
                    Button::new("Back to Login")
                        .with_id(BACK)
                        .on_press(BACK)
                        .disabled(!ctx.can_go_back),
                )),
        )
    }

    fn handle_event(&mut self, event: &UiEvent, _params: &RouteParams, nav: &mut NavigationHandle) {
        match event {
            UiEvent::ChangeText { target, value } => match target.as_str() {
                EMAIL => self.email = value.clone(),
                PASSWORD => self.password = value.clone(),
                CONFIRM => self.confirm = value.clone(),
                _ => {}
            },
            UiEvent::Press { target } => match target.as_str() {
                SUBMIT => match self.problem() {
                    None => nav.navigate(routes::MAIN, None),
                    Some(problem) => nav.navigate(routes::ERROR, Some(error_params(problem))),
                },
                BACK => nav.go_back(),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationAction;

    fn send(screen: &mut SignUpScreen, event: UiEvent) -> Vec<NavigationAction> {
        let mut nav = NavigationHandle::new();
        screen.handle_event(&event, &RouteParams::new(), &mut nav);
        nav.actions().to_vec()
    }

    fn filled(confirm: &str) -> SignUpScreen {
        let mut screen = SignUpScreen::default();
        send(&mut screen, UiEvent::change_text(EMAIL, "ana@example.com"));
        send(&mut screen, UiEvent::change_text(PASSWORD, "correct horse"));
        send(&mut screen, UiEvent::change_text(CONFIRM, confirm));
        screen
    }

    #[test]
    fn test_matching_passwords_navigate_to_main() {
        let mut screen = filled("correct horse");
        assert_eq!(
            send(&mut screen, UiEvent::press(SUBMIT)),
            vec![NavigationAction::Navigate {
                name: routes::MAIN.into(),
                params: None
            }]
        );
    }

    #[test]
    fn test_mismatched_passwords_navigate_to_error() {
        let mut screen = filled("battery staple");
        assert_eq!(
            send(&mut screen, UiEvent::press(SUBMIT)),
            vec![NavigationAction::Navigate {
                name: routes::ERROR.into(),
                params: Some(error_params("Passwords do not match.")),
            }]
        );
    }

    #[test]
    fn test_back_goes_back() {
        let mut screen = SignUpScreen::default();
        assert_eq!(send(&mut screen, UiEvent::press(BACK)), vec![NavigationAction::GoBack]);
    }

    #[test]
    fn test_back_disabled_at_root() {
        let ctx = ScreenContext {
            route_name: "SignUp".into(),
            entry_key: "k".into(),
            can_go_back: false,
        };
        let tree = SignUpScreen::default().render(&RouteParams::new(), &ctx);
        assert!(tree.find_button(BACK).unwrap().disabled);
        assert_eq!(tree.find_input(CONFIRM).unwrap().label.as_deref(), Some("Confirm Password"));
    }
}
