//! Nord palette mapped onto the menu's theme roles.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Polar Night
const NIGHT_0: Color = Color::Rgb(0x2E, 0x34, 0x40);
const NIGHT_1: Color = Color::Rgb(0x3B, 0x42, 0x52);
const NIGHT_2: Color = Color::Rgb(0x43, 0x4C, 0x5E);
const NIGHT_3: Color = Color::Rgb(0x4C, 0x56, 0x6A);

// Snow Storm
const SNOW_0: Color = Color::Rgb(0xD8, 0xDE, 0xE9);
const SNOW_1: Color = Color::Rgb(0xE5, 0xE9, 0xF0);

// Frost
const FROST_1: Color = Color::Rgb(0x88, 0xC0, 0xD0);
const FROST_2: Color = Color::Rgb(0x81, 0xA1, 0xC1);
const FROST_3: Color = Color::Rgb(0x5E, 0x81, 0xAC);

// Aurora
const AURORA_RED: Color = Color::Rgb(0xBF, 0x61, 0x6A);
const AURORA_YELLOW: Color = Color::Rgb(0xEB, 0xCB, 0x8B);
const AURORA_GREEN: Color = Color::Rgb(0xA3, 0xBE, 0x8C);

const MUTED: Color = Color::Rgb(0x61, 0x6E, 0x88);
const BACKDROP: Color = Color::Rgb(0x1A, 0x1E, 0x28);

fn build_nord_roles() -> ThemeRoles {
    ThemeRoles {
        background: NIGHT_0,
        card: NIGHT_1,
        input: NIGHT_2,
        border: NIGHT_3,
        focus: FROST_1,

        text: SNOW_0,
        label: SNOW_1,
        muted: MUTED,

        highlight: AURORA_YELLOW,
        link: FROST_2,
        pressed: FROST_3,

        success: AURORA_GREEN,
        error: AURORA_RED,

        modal_bg: BACKDROP,
    }
}

/// Nord palette tuned for dark terminals, with aurora yellow standing in for
/// the menu's gold accent.
#[derive(Debug, Clone)]
pub struct NordTheme {
    roles: ThemeRoles,
}

impl NordTheme {
    pub fn new() -> Self {
        Self { roles: build_nord_roles() }
    }
}

impl Theme for NordTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
