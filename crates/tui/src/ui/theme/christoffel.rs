//! Default palette: gold lettering on charcoal cards, after the printed menu
//! the screen was modelled on.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::lighten_rgb,
};

pub const GOLD: Color = Color::Rgb(0xFF, 0xD7, 0x00); // #FFD700
pub const CHARCOAL: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const CARD: Color = Color::Rgb(0x1A, 0x1A, 0x1A); // #1A1A1A form card
pub const INPUT: Color = Color::Rgb(0x2A, 0x2A, 0x2A); // #2A2A2A input fill
pub const EDGE: Color = Color::Rgb(0x44, 0x44, 0x44); // #444 input border
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const SILVER: Color = Color::Rgb(0xCC, 0xCC, 0xCC); // #ccc subtitle
pub const ASH: Color = Color::Rgb(0x99, 0x99, 0x99); // #999 placeholder

pub const BRICK: Color = Color::Rgb(0xD9, 0x53, 0x4F);
pub const SAGE: Color = Color::Rgb(0x5C, 0xB8, 0x5C);
pub const SKY: Color = Color::Rgb(0x5B, 0xC0, 0xDE);

fn build_christoffel_roles() -> ThemeRoles {
    ThemeRoles {
        background: CHARCOAL,
        card: CARD,
        input: INPUT,
        border: EDGE,
        focus: GOLD,

        text: WHITE,
        label: SILVER,
        muted: ASH,

        highlight: GOLD,
        link: SKY,
        pressed: lighten_rgb(INPUT, 0.15),

        success: SAGE,
        error: BRICK,

        modal_bg: Color::Rgb(0x08, 0x08, 0x08),
    }
}

#[derive(Debug, Clone)]
pub struct ChristoffelTheme {
    roles: ThemeRoles,
}

impl ChristoffelTheme {
    pub fn new() -> Self {
        Self {
            roles: build_christoffel_roles(),
        }
    }
}

impl Theme for ChristoffelTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
