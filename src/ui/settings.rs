//! Centralized UI settings for the terminal menu.
//!
//! The single place to tweak labels, glyphs, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / labels
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

pub const LABEL_APP: &str = "waaaybar";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_OK: &str = "✓";
pub const GLYPH_OK_PLAIN: &str = "ok";
pub const GLYPH_FAIL: &str = "✗";
pub const GLYPH_FAIL_PLAIN: &str = "failed";

pub const PROMPT_SYMBOL: &str = ">";
pub const PROMPT_YES_NO_SUFFIX: &str = " (y/n) ";
pub const PRESS_ANY_KEY: &str = "Press any key to continue...";

pub const KEY_EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_APP_LABEL: Color = Color::Green;
pub const COLOR_BANNER_META: Color = Color::DarkGrey;

pub const COLOR_MENU_INDEX: Color = Color::Yellow;
pub const COLOR_MENU_TEXT: Color = Color::White;
pub const COLOR_PROMPT: Color = Color::Cyan;

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_OK: Color = Color::Green;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_DETAIL: Color = Color::Grey;
