//! Terminal output renderer for menu chrome and status messages.
//!
//! Chrome and status lines go to stderr; theme names listed for the user go
//! to stdout so they can be piped.

use crate::ui::settings;
use crossterm::style::Stylize;

/// Stateless renderer with optional ANSI color.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the app banner with build metadata.
    pub fn banner(&self, meta: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_APP.with(settings::COLOR_APP_LABEL).bold(),
                meta.with(settings::COLOR_BANNER_META),
            );
        } else {
            eprintln!("{} {meta}", settings::LABEL_APP);
        }
    }

    /// Print one numbered menu entry.
    pub fn menu_option(&self, key: &str, label: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                key.with(settings::COLOR_MENU_INDEX).bold(),
                ")".with(settings::COLOR_MENU_INDEX),
                label.with(settings::COLOR_MENU_TEXT),
            );
        } else {
            eprintln!("{key}) {label}");
        }
    }

    /// Print the inline prompt text before reading a line (no newline).
    pub fn prompt(&self, text: &str) {
        if self.color {
            eprint!(
                "{} {} ",
                settings::PROMPT_SYMBOL.with(settings::COLOR_PROMPT).bold(),
                text.with(settings::COLOR_PROMPT)
            );
        } else {
            eprint!("{} {text} ", settings::PROMPT_SYMBOL);
        }
    }

    /// Print a theme name on stdout.
    pub fn list_item(&self, text: &str) {
        println!("{text}");
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Print a small section header.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print a key/value line under a section.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{}{}", settings::INDENT_1, text.with(settings::COLOR_DETAIL));
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }

    /// Print a pass/fail line for one step of a multi-step operation.
    pub fn step(&self, ok: bool, label: &str, detail: &str) {
        let (glyph, plain, color) = if ok {
            (settings::GLYPH_OK, settings::GLYPH_OK_PLAIN, settings::COLOR_OK)
        } else {
            (settings::GLYPH_FAIL, settings::GLYPH_FAIL_PLAIN, settings::COLOR_ERROR)
        };
        if self.color {
            eprintln!(
                "{}{} {} {}",
                settings::INDENT_1,
                glyph.with(color).bold(),
                label.with(settings::COLOR_FIELD_VALUE),
                detail.with(settings::COLOR_FIELD_KEY),
            );
        } else {
            eprintln!("{}[{plain}] {label} {detail}", settings::INDENT_1);
        }
    }
}
