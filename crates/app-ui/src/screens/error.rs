//! Dead-end recovery screen

use super::{string_param, Screen, ScreenContext, ERROR_MESSAGE_PARAM};
use crate::components::{
    Alignment, Button, Container, Element, JustifyContent, Spacing, StyleProps, Text, TextAlign,
    TextRole, UiEvent,
};
use crate::navigation::{NavigationHandle, RouteParams};
use crate::theme::{font_size, palette, spacing};

/// Shown when the `errorMessage` param is missing or empty
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

const GO_BACK: &str = "error.go_back";

/// Shows an error message; its only action is going back
#[derive(Debug, Default)]
pub struct ErrorScreen;

impl ErrorScreen {
    /// Boxed instance for route registration
    pub fn boxed() -> Box<dyn Screen> {
        Box::new(Self)
    }

    /// Message to display for the given params
    pub fn message(params: &RouteParams) -> &str {
        string_param(params, ERROR_MESSAGE_PARAM)
            .filter(|message| !message.is_empty())
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
    }
}

impl Screen for ErrorScreen {
    fn render(&self, params: &RouteParams, _ctx: &ScreenContext) -> Element {
        let message = Text::new(Self::message(params))
            .with_id("error.message")
            .with_role(TextRole::Error)
            .with_size(font_size::BODY)
            .with_color(palette::ERROR)
            .with_align(TextAlign::Center);

        let go_back = Button::new("Go Back")
            .with_id(GO_BACK)
            .on_press(GO_BACK)
            .with_colors(palette::ERROR, palette::ON_ERROR)
            .with_style(StyleProps {
                padding: Some(Spacing::symmetric(10.0, 20.0)),
                border_radius: Some(5.0),
                ..Default::default()
            });

        Element::Container(
            Container::column()
                .with_id("error")
                .fill()
                .with_justify(JustifyContent::Center)
                .with_align(Alignment::Center)
                .with_gap(spacing::LG)
                .with_padding(Spacing::uniform(spacing::LG))
                .with_background(palette::BACKGROUND)
                .child(Element::Text(message))
                .child(Element::Button(go_back)),
        )
    }

    fn handle_event(&mut self, event: &UiEvent, _params: &RouteParams, nav: &mut NavigationHandle) {
        if let UiEvent::Press { target } = event {
            if target == GO_BACK {
                nav.go_back();
            }
        }
    }
}
