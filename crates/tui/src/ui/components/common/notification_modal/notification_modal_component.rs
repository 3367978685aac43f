use carte_types::{Effect, Msg};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    text::Span,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{ButtonKind, block_with_severity, build_hint_spans, render_button};

/// Blocking acknowledgement dialog for a single notification.
#[derive(Debug, Default, Clone)]
pub struct NotificationModal {
    button_area: Rect,
}

impl NotificationModal {
    fn dismiss() -> Vec<Effect> {
        vec![Effect::CloseModal, Effect::SendMsg(Msg::NotificationDismissed)]
    }
}

impl Component for NotificationModal {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Self::dismiss(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, _app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind == MouseEventKind::Down(MouseButton::Left) && self.button_area.contains(Position::new(column, row)) {
            return Self::dismiss();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let Some(notification) = app.notification.current() else {
            return;
        };
        let title = format!(" {} ", notification.title);
        let block = block_with_severity(theme, notification.severity, &title);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [message_rect, _, button_rect] = self.get_preferred_layout(app, inner)[..] else {
            return;
        };
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .centered()
                .style(theme.text_style())
                .wrap(Wrap { trim: true }),
            message_rect,
        );

        let [ok_area] = Layout::horizontal([Constraint::Length(8)]).flex(Flex::Center).areas(button_rect);
        render_button(frame, ok_area, "OK", ButtonKind::Primary, true, theme);
        self.button_area = ok_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(&*app.ctx.theme, &[("Enter/Esc", "Dismiss")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(1),    // Message
            Constraint::Length(0), // Spacer
            Constraint::Length(3), // Button
        ])
        .split(area)
        .to_vec()
    }
}
