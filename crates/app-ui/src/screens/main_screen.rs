//! Signed-in home screen

use super::{routes, Screen, ScreenContext};
use crate::components::{
    Alignment, Button, Container, Element, JustifyContent, Spacing, Text, TextAlign, TextRole,
    UiEvent,
};
use crate::navigation::{NavigationHandle, RouteParams};
use crate::theme::{font_size, palette, spacing};

const LOG_OUT: &str = "main.log_out";

/// Landing screen after login
#[derive(Debug, Default)]
pub struct MainScreen;

impl MainScreen {
    /// Boxed instance for route registration
    pub fn boxed() -> Box<dyn Screen> {
        Box::new(Self)
    }
}

impl Screen for MainScreen {
    fn render(&self, _params: &RouteParams, _ctx: &ScreenContext) -> Element {
        Element::Container(
            Container::column()
                .with_id("main")
                .fill()
                .with_justify(JustifyContent::Center)
                .with_align(Alignment::Center)
                .with_gap(spacing::LG)
                .with_padding(Spacing::uniform(spacing::LG))
                .with_background(palette::BACKGROUND)
                .child(Element::Text(
                    Text::new("Welcome")
                        .with_id("main.title")
                        .with_role(TextRole::Heading)
                        .with_size(font_size::TITLE)
                        .with_color(palette::TEXT)
                        .with_align(TextAlign::Center),
                ))
                .child(Element::Button(
                    Button::new("Log Out")
                        .with_id(LOG_OUT)
                        .on_press(LOG_OUT)
                        .with_colors(palette::PRIMARY, palette::ON_PRIMARY),
                )),
        )
    }

    fn handle_event(&mut self, event: &UiEvent, _params: &RouteParams, nav: &mut NavigationHandle) {
        if let UiEvent::Press { target } = event {
            if target == LOG_OUT {
                // Login becomes the only entry; nothing to go back to
                nav.reset(routes::LOGIN, None);
            }
        }
    }
}
