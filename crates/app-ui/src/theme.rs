//! Colors and spacing used by Trailhead screens
//!
//! A fixed light palette. There is no theme switching.

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Screen palette
pub mod palette {
    /// Screen background
    pub const BACKGROUND: &str = "#FFFFFF";

    /// Body text
    pub const TEXT: &str = "#1B1B1B";

    /// Primary action buttons
    pub const PRIMARY: &str = "#2196F3";

    /// Text on primary buttons
    pub const ON_PRIMARY: &str = "#FFFFFF";

    /// Secondary / confirm actions
    pub const SECONDARY: &str = "#4CAF50";

    /// Error text and error actions
    pub const ERROR: &str = "#941A1D";

    /// Text on error buttons
    pub const ON_ERROR: &str = "#FFFFFF";

    /// Form card fill
    pub const CARD: &str = "#F3EC9C";

    /// Form card outline
    pub const CARD_BORDER: &str = "#978C15";
}

/// Spacing scale in points
pub mod spacing {
    /// Small gap between stacked controls
    pub const SM: f32 = 10.0;

    /// Screen padding
    pub const MD: f32 = 15.0;

    /// Padding around dead-end screens
    pub const LG: f32 = 20.0;
}

/// Font sizes in points
pub mod font_size {
    /// Body and message text
    pub const BODY: f32 = 18.0;

    /// Screen titles
    pub const TITLE: f32 = 24.0;
}
