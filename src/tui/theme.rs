//! TUI color semantics and style constants.
//!
//! Centralized theme definitions. Pure data, consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - Indigo accent: header, focused input border, row markers, count badge
//! - Lavender: header subtitle
//! - Bold: goal text
//! - Dim grays: placeholder, hints, help line, idle borders

use ratatui::style::{Color, Modifier, Style};

/// The app accent, an indigo.
const ACCENT: Color = Color::Rgb(0x66, 0x7e, 0xea);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Accent-colored element: row markers, position numbers, focused border.
pub const STYLE_ACCENT: Style = Style::new().fg(ACCENT);

/// Header title.
pub const STYLE_TITLE: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

/// Header subtitle, a pale lavender.
pub const STYLE_SUBTITLE: Style = Style::new().fg(Color::Rgb(0xe8, 0xea, 0xff));

/// Goal text.
pub const STYLE_GOAL: Style = Style::new().add_modifier(Modifier::BOLD);

/// Section header ("Your Goals").
pub const STYLE_SECTION: Style = Style::new().add_modifier(Modifier::BOLD);

/// Goal-count badge next to the section header.
pub const STYLE_BADGE: Style = Style::new().fg(Color::White).bg(ACCENT);

/// Input placeholder text.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::Rgb(0xa0, 0xa0, 0xa0));

/// Empty-state hint text.
pub const STYLE_HINT: Style = Style::new().fg(Color::Rgb(0x71, 0x80, 0x96));

/// De-emphasized chrome: idle borders, delete glyphs.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Cursor row in the list (focused, not selected).
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
