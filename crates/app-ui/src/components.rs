//! UI component library for Trailhead
//!
//! Components are Rust structs with serializable properties that a
//! frontend draws. Screens compose them into an [`Element`] tree; the
//! frontend sends [`UiEvent`]s back, addressed by the handler ids the
//! components carry.
//!
//! # Available Components
//!
//! - [`Button`] - Pressable button
//! - [`Text`] - Text with a semantic role
//! - [`Container`] - Layout container with flex properties
//! - [`Input`] - Text input field

use crate::theme::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler identifier carried by interactive components
pub type EventHandler = String;

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Column (vertical)
    #[default]
    Column,
    /// Row (horizontal)
    Row,
}

// =============================================================================
// Element Tree
// =============================================================================

/// A node of a rendered screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Layout container with children
    Container(Container),
    /// Text run
    Text(Text),
    /// Pressable button
    Button(Button),
    /// Text input
    Input(Input),
}

impl Element {
    /// Component id of this node, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            Element::Container(c) => c.id.as_deref(),
            Element::Text(t) => t.id.as_deref(),
            Element::Button(b) => b.id.as_deref(),
            Element::Input(i) => i.id.as_deref(),
        }
    }

    /// Visit this node and all descendants depth-first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        if let Element::Container(container) = self {
            for child in &container.children {
                child.walk(visit);
            }
        }
    }

    /// Find a text node by id
    pub fn find_text(&self, id: &str) -> Option<&Text> {
        let mut found = None;
        self.walk(&mut |el| {
            if let Element::Text(t) = el {
                if found.is_none() && t.id.as_deref() == Some(id) {
                    found = Some(t);
                }
            }
        });
        found
    }

    /// Find a button by id
    pub fn find_button(&self, id: &str) -> Option<&Button> {
        let mut found = None;
        self.walk(&mut |el| {
            if let Element::Button(b) = el {
                if found.is_none() && b.id.as_deref() == Some(id) {
                    found = Some(b);
                }
            }
        });
        found
    }

    /// Find an input by id
    pub fn find_input(&self, id: &str) -> Option<&Input> {
        let mut found = None;
        self.walk(&mut |el| {
            if let Element::Input(i) = el {
                if found.is_none() && i.id.as_deref() == Some(id) {
                    found = Some(i);
                }
            }
        });
        found
    }

    /// All text content in the tree, in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let Element::Text(t) = el {
                out.push(t.content.as_str());
            }
        });
        out
    }
}

// =============================================================================
// Events
// =============================================================================

/// A user interaction addressed to a component's event handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// Button press
    Press {
        /// Handler id the event targets
        target: EventHandler,
    },
    /// New text in an input
    ChangeText {
        /// Handler id the event targets
        target: EventHandler,
        /// Full input value after the change
        value: String,
    },
}

impl UiEvent {
    /// A press on the given handler
    pub fn press(target: impl Into<String>) -> Self {
        UiEvent::Press {
            target: target.into(),
        }
    }

    /// A text change on the given handler
    pub fn change_text(target: impl Into<String>, value: impl Into<String>) -> Self {
        UiEvent::ChangeText {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Handler id the event targets
    pub fn target(&self) -> &str {
        match self {
            UiEvent::Press { target } | UiEvent::ChangeText { target, .. } => target,
        }
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button title
    pub label: String,
    /// Background color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Label color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Additional style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            color: None,
            text_color: None,
            disabled: false,
            on_press: None,
            style: StyleProps::default(),
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set background and label colors
    pub fn with_colors(mut self, color: impl Into<String>, text_color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self.text_color = Some(text_color.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text semantic roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Regular paragraph text
    #[default]
    Paragraph,
    /// Heading
    Heading,
    /// Label text
    Label,
    /// Error message
    Error,
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default)
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Semantic role
    #[serde(default)]
    pub role: TextRole,
    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Text color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Additional style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            role: TextRole::Paragraph,
            font_size: None,
            color: None,
            align: TextAlign::Left,
            style: StyleProps::default(),
        }
    }

    /// Set the text ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set semantic role
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    #[serde(default)]
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Container {
    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column container
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Set the container ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set justify content
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Fill the available space
    pub fn fill(mut self) -> Self {
        self.style.flex_grow = Some(1.0);
        self
    }

    /// Append a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Input type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Text input
    #[default]
    Text,
    /// Password input (masked)
    Password,
    /// Email input
    Email,
}

/// Input component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Input type
    #[serde(default)]
    pub input_type: InputType,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Auto-complete hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            id: None,
            input_type: InputType::Text,
            placeholder: None,
            value: String::new(),
            label: None,
            autocomplete: None,
            on_change: None,
            style: StyleProps::default(),
        }
    }

    /// Create a password input
    pub fn password() -> Self {
        Self {
            input_type: InputType::Password,
            autocomplete: Some("password".to_string()),
            ..Self::new()
        }
    }

    /// Create an email input
    pub fn email() -> Self {
        Self {
            input_type: InputType::Email,
            autocomplete: Some("email".to_string()),
            ..Self::new()
        }
    }

    /// Set the input ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Whether the value should be masked when drawn
    pub fn is_secure(&self) -> bool {
        self.input_type == InputType::Password
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
