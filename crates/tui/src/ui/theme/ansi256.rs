//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the gold-on-charcoal default with indexed colors so the menu
//! stays legible inside macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                card: Color::Indexed(234),
                input: Color::Indexed(236),
                border: Color::Indexed(238),
                focus: Color::Indexed(220),

                text: Color::Indexed(255),
                label: Color::Indexed(252),
                muted: Color::Indexed(246),

                highlight: Color::Indexed(220),
                link: Color::Indexed(117),
                pressed: Color::Indexed(238),

                success: Color::Indexed(77),
                error: Color::Indexed(167),

                modal_bg: Color::Indexed(232),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
