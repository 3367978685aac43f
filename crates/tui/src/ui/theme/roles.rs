use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Named colors for each part of the menu screen.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    /// Form and menu cards
    pub card: Color,
    /// Text input fill
    pub input: Color,
    pub border: Color,
    pub focus: Color,

    pub text: Color,
    /// Field labels and the subtitle
    pub label: Color,
    /// Placeholders, hints and empty states
    pub muted: Color,

    /// Headline word, prices and the selected course
    pub highlight: Color,
    /// Secondary buttons
    pub link: Color,
    /// Fill behind a focused secondary button
    pub pressed: Color,

    /// Notification borders and titles
    pub success: Color,
    pub error: Color,

    /// Backdrop behind an open notification.
    ///
    /// Darker than `background` so the modal reads as elevated.
    pub modal_bg: Color,
}

/// Theme trait exposes the roles and the styles built from them.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn label_style(&self) -> Style {
        Style::default().fg(self.roles().label)
    }

    fn muted_style(&self) -> Style {
        Style::default().fg(self.roles().muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    /// Bold gold-style emphasis for titles and prices.
    fn highlight_style(&self) -> Style {
        Style::default().fg(self.roles().highlight).add_modifier(Modifier::BOLD)
    }

    fn danger_style(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    fn modal_backdrop_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }
}
