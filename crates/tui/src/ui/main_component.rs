use carte_types::{Effect, Modal, Msg, ViewMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};
use tracing::debug;

use super::components::common::NotificationModal;
use super::components::{CatalogComponent, Component, EditorComponent};
use super::utils::centered_min_max;
use crate::app::App;

pub struct ModalLayout(Box<dyn Fn(Rect) -> Rect>);

impl std::fmt::Debug for ModalLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ModalLayout")
    }
}

type ModalView = (Box<dyn Component>, ModalLayout);

/// Root component: header, the active menu view, the hint bar and any
/// modal on top.
pub struct MainView {
    /// Component for the current view mode
    pub content_view: Box<dyn Component>,
    /// Modal layered over the content, with its placement
    pub modal_view: Option<ModalView>,
}

impl MainView {
    pub fn new(app: &App) -> Self {
        Self {
            content_view: content_for(app.menu.view_mode()),
            modal_view: None,
        }
    }

    /// Switch the main view. Use `Effect::SwitchTo` rather than calling this
    /// from components.
    pub fn set_view_mode(&mut self, app: &mut App, mode: ViewMode) {
        debug!(?mode, "switching view");
        app.switch_to(mode);
        self.content_view = content_for(mode);
    }

    /// Open `modal`, or close the current one with `None`.
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        self.modal_view = modal.as_ref().map(|kind| match kind {
            Modal::Notification => (
                Box::new(NotificationModal::default()) as Box<dyn Component>,
                ModalLayout(Box::new(|rect| {
                    centered_min_max(50, 30, Rect::new(0, 0, 36, 9), Rect::new(0, 0, 64, 11), rect)
                })),
            ),
        });
        app.open_modal = modal;
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let config = &app.ctx.config;
        let bold = theme.text_style().add_modifier(Modifier::BOLD);
        // The last word of the title carries the accent.
        let title = match config.title.trim_end().rsplit_once(' ') {
            Some((head, last)) => Line::from(vec![
                Span::styled(format!("{head} "), bold),
                Span::styled(last.to_string(), theme.highlight_style()),
            ]),
            None => Line::from(Span::styled(config.title.clone(), theme.highlight_style())),
        };
        let subtitle = Line::from(Span::styled(config.subtitle.clone(), theme.label_style()));
        frame.render_widget(Paragraph::new(vec![title, subtitle]).centered(), area);
    }
}

fn content_for(mode: ViewMode) -> Box<dyn Component> {
    match mode {
        ViewMode::Editor => Box::new(EditorComponent::default()),
        ViewMode::Catalog => Box::new(CatalogComponent::default()),
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        match self.modal_view.as_mut() {
            Some((modal, _)) => effects.extend(modal.handle_message(app, msg)),
            None => effects.extend(self.content_view.handle_message(app, msg)),
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }

        // An open modal blocks input to the view underneath.
        if let Some((modal, _)) = self.modal_view.as_mut() {
            return modal.handle_key_events(app, key);
        }
        self.content_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let Some((modal, _)) = self.modal_view.as_mut() {
            return modal.handle_mouse_events(app, mouse);
        }
        self.content_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Page background
        let bg_fill = Block::default().style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [header_area, content_area, hints_area] = self.get_preferred_layout(app, area)[..] else {
            return;
        };
        self.render_header(frame, header_area, app);
        self.content_view.render(frame, content_area, app);

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.muted_style());
        frame.render_widget(hints, hints_area);

        if let Some((modal, position)) = self.modal_view.as_mut() {
            render_overlay(frame, app);
            let modal_area = (position.0)(area);
            frame.render_widget(Clear, modal_area);
            modal.render(frame, modal_area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.muted_style())];
        match self.modal_view.as_ref() {
            Some((modal, _)) => hint_spans.extend(modal.get_hint_spans(app)),
            None => hint_spans.extend(self.content_view.get_hint_spans(app)),
        }
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Title + subtitle
            Constraint::Min(1),    // Active view
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}

/// Dims everything under an open modal.
fn render_overlay(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.modal_backdrop_style()).dim(), frame.area());
}
