use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use carte_types::Severity;

use super::roles::{Theme, ThemeRoles};

/// Rounded card block with an optional highlighted title.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.highlight_style()));
    }
    block
}

/// Bordered block whose frame and title take the severity color.
pub fn block_with_severity<'a, T: Theme + ?Sized>(theme: &T, severity: Severity, title: &'a str) -> Block<'a> {
    let color = severity_color(theme, severity);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)))
        .style(theme.modal_backdrop_style().fg(theme.roles().text))
        .padding(Padding::horizontal(1))
}

pub fn severity_color<T: Theme + ?Sized>(theme: &T, severity: Severity) -> Color {
    let roles = theme.roles();
    match severity {
        Severity::Success => roles.success,
        Severity::Error => roles.error,
    }
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { card, text, .. } = *theme.roles();
    Style::default().bg(card).fg(text)
}

/// Move an RGB color towards white by `amount` (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let a = amount.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * a).round() as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { input, text, .. } = *theme.roles();
    let style = Style::default().bg(input).fg(text);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Filled gold button: "Add to Menu", the chosen course, "OK".
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        highlight, background, ..
    } = *theme.roles();
    let style = Style::default().bg(highlight).fg(background).add_modifier(Modifier::BOLD);
    if focused { style.add_modifier(Modifier::UNDERLINED) } else { style }
}

/// Outline button; the border color comes from the block.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { link, pressed, .. } = *theme.roles();
    let style = Style::default().fg(link);
    if focused { style.bg(pressed) } else { style }
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

/// Renders a standard bordered button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, kind: ButtonKind, is_focused: bool, theme: &T) {
    let button_style = match kind {
        ButtonKind::Primary => button_primary_style(theme, is_focused),
        ButtonKind::Secondary => button_secondary_style(theme, is_focused),
    };

    frame.render_widget(
        Paragraph::new(label).centered().style(button_style).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(is_focused)),
        ),
        area,
    );
}

/// Turns `(key, description)` pairs into styled spans for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), theme.highlight_style()));
        spans.push(Span::styled(format!(" {description}  "), theme.muted_style()));
    }
    spans
}
