//! Color constants for the TUI.

use ratatui::style::Color;

/// Lighting & fans share in the breakdown chart.
pub const BASE_COLOR: Color = Color::Blue;
/// Appliance share in the breakdown chart.
pub const APPLIANCE_COLOR: Color = Color::Red;
/// Appliance comparison bars.
pub const COMPARISON_COLOR: Color = Color::Green;
/// Focused form row.
pub const FOCUS_FG: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Active tab in the header.
pub const TAB_ACTIVE: Color = Color::Cyan;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Incomplete-form warning.
pub const WARNING_FG: Color = Color::Yellow;
/// Headline metric.
pub const METRIC_FG: Color = Color::Magenta;
