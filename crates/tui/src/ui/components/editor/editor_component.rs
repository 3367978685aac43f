use carte_types::{Course, DraftField, Effect, ViewMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{EditorFocus, placeholder};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::TextInputState;
use crate::ui::theme::{
    Theme,
    theme_helpers::{self as th, ButtonKind},
};

/// The "Add New Menu Item" form plus the catalog summary card.
#[derive(Debug, Default)]
pub struct EditorComponent {
    /// Click targets from the last render
    focus_areas: Vec<(EditorFocus, Rect)>,
    course_areas: Vec<(Course, Rect)>,
}

impl EditorComponent {
    fn edit_text(app: &mut App, field: DraftField, key: KeyEvent) {
        if app.editor.input_mut(field).handle_key(key) {
            let value = app.editor.input(field).input().to_string();
            app.menu.update_draft_field(field, value);
        }
    }

    fn handle_course_key(app: &mut App, key: KeyEvent) {
        let current = app.menu.draft().course();
        match key.code {
            KeyCode::Left => app.menu.select_course(current.map_or(Course::Dessert, |course| course.prev())),
            KeyCode::Right | KeyCode::Char(' ') => app.menu.select_course(current.map_or(Course::Starters, |course| course.next())),
            KeyCode::Char(digit @ '1'..='3') => {
                let index = digit as usize - '1' as usize;
                app.menu.select_course(Course::ALL[index]);
            }
            KeyCode::Backspace | KeyCode::Delete => app.menu.clear_course(),
            _ => {}
        }
    }

    fn activate(focus: EditorFocus) -> Vec<Effect> {
        match focus {
            EditorFocus::AddButton => vec![Effect::SubmitDraft],
            EditorFocus::ViewMenu => vec![Effect::SwitchTo(ViewMode::Catalog)],
            _ => Vec::new(),
        }
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Add New Menu Item "), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // Dish name label
            Constraint::Length(3), // Dish name input
            Constraint::Length(1), // Description label
            Constraint::Length(3), // Description input
            Constraint::Length(1), // Course label
            Constraint::Length(3), // Course chips
            Constraint::Length(1), // Price label
            Constraint::Length(3), // Price input
            Constraint::Length(3), // Add button
        ])
        .split(inner);

        let price_label = format!("Price ({}):", app.ctx.config.currency_symbol);
        let labels = [
            (rows[0], "Dish Name:"),
            (rows[2], "Description:"),
            (rows[4], "Course:"),
            (rows[6], price_label.as_str()),
        ];
        for (rect, label) in labels {
            frame.render_widget(Paragraph::new(label).style(theme.label_style()), rect);
        }

        let focus = app.editor.focus;
        for (rect, field, region) in [
            (rows[1], DraftField::DishName, EditorFocus::DishName),
            (rows[3], DraftField::Description, EditorFocus::Description),
            (rows[7], DraftField::Price, EditorFocus::Price),
        ] {
            let focused = focus == region;
            if let Some(cursor) = render_text_input(frame, rect, app.editor.input(field), placeholder(field), focused, theme)
                && focused
            {
                frame.set_cursor_position(cursor);
            }
            self.focus_areas.push((region, rect));
        }

        self.render_courses(frame, rows[5], app);

        let [add_area] = Layout::horizontal([Constraint::Length(20)]).flex(Flex::Center).areas(rows[8]);
        th::render_button(
            frame,
            add_area,
            "Add to Menu",
            ButtonKind::Primary,
            focus == EditorFocus::AddButton,
            theme,
        );
        self.focus_areas.push((EditorFocus::AddButton, add_area));
    }

    fn render_courses(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let selected = app.menu.draft().course();
        let course_focused = app.editor.focus == EditorFocus::Course;
        let chips = Layout::horizontal([Constraint::Length(13); 3]).spacing(2).split(area);

        for (course, rect) in Course::ALL.into_iter().zip(chips.iter().copied()) {
            let is_selected = selected == Some(course);
            let kind = if is_selected { ButtonKind::Primary } else { ButtonKind::Secondary };
            let highlighted = course_focused && (is_selected || (selected.is_none() && course == Course::Starters));
            th::render_button(frame, rect, course.as_str(), kind, highlighted, theme);
            self.course_areas.push((course, rect));
        }
        self.focus_areas.push((EditorFocus::Course, area));
    }

    fn render_summary(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Chef's Menu "), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [count_area, button_area] = Layout::horizontal([Constraint::Min(1), Constraint::Length(15)]).areas(inner);
        let count = app.menu.entry_count();
        let summary = match count {
            0 => "No dishes yet".to_string(),
            1 => "1 dish on the menu".to_string(),
            n => format!("{n} dishes on the menu"),
        };
        let [count_line] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(count_area);
        frame.render_widget(Paragraph::new(summary).style(theme.muted_style()), count_line);

        th::render_button(
            frame,
            button_area,
            "View Menu",
            ButtonKind::Secondary,
            app.editor.focus == EditorFocus::ViewMenu,
            theme,
        );
        self.focus_areas.push((EditorFocus::ViewMenu, button_area));
    }
}

/// Draws a bordered single-line input and returns where the cursor belongs.
fn render_text_input<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    state: &TextInputState,
    placeholder: &str,
    focused: bool,
    theme: &T,
) -> Option<Position> {
    let block = th::block(theme, None, focused).style(th::input_style(theme, focused));
    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return None;
    }

    let column = state.cursor_column();
    let offset = column.saturating_sub(inner.width - 1);
    let content = if state.input().is_empty() {
        Line::from(Span::styled(placeholder.to_string(), theme.muted_style().add_modifier(Modifier::ITALIC)))
    } else {
        Line::from(state.input().to_string())
    };
    frame.render_widget(Paragraph::new(content).scroll((0, offset)).block(block), area);

    Some(Position::new(inner.x + column - offset, inner.y))
}

impl Component for EditorComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => vec![Effect::SubmitDraft],
                KeyCode::Char('v') => vec![Effect::SwitchTo(ViewMode::Catalog)],
                _ => Vec::new(),
            };
        }

        let focus = app.editor.focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                app.editor.focus = focus.next();
                return Vec::new();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.editor.focus = focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if let Some(field) = focus.draft_field() {
            if key.code == KeyCode::Enter {
                app.editor.focus = focus.next();
            } else {
                Self::edit_text(app, field, key);
            }
            return Vec::new();
        }

        match (focus, key.code) {
            (EditorFocus::Course, KeyCode::Enter) => app.editor.focus = focus.next(),
            (EditorFocus::Course, _) => Self::handle_course_key(app, key),
            (_, KeyCode::Enter | KeyCode::Char(' ')) => return Self::activate(focus),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some((course, _)) = self.course_areas.iter().find(|(_, rect)| rect.contains(position)) {
            app.menu.select_course(*course);
            app.editor.focus = EditorFocus::Course;
            return Vec::new();
        }

        match self.focus_areas.iter().find(|(_, rect)| rect.contains(position)) {
            Some((focus, _)) => {
                app.editor.focus = *focus;
                Self::activate(*focus)
            }
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.focus_areas.clear();
        self.course_areas.clear();

        let [form_area, _, summary_area] = self.get_preferred_layout(app, rect)[..] else {
            return;
        };
        self.render_form(frame, form_area, app);
        self.render_summary(frame, summary_area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        match app.editor.focus {
            EditorFocus::Course => th::build_hint_spans(
                theme,
                &[("←/→", "Course"), ("1-3", "Pick"), ("Tab", "Next"), ("Ctrl+S", "Add"), ("Ctrl+Q", "Quit")],
            ),
            _ => th::build_hint_spans(
                theme,
                &[("Tab", "Next"), ("Shift+Tab", "Previous"), ("Ctrl+S", "Add"), ("Ctrl+V", "View menu"), ("Ctrl+Q", "Quit")],
            ),
        }
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let [column] = Layout::horizontal([Constraint::Max(72)]).flex(Flex::Center).areas(area);
        Layout::vertical([
            Constraint::Length(21), // Form
            Constraint::Length(1),  // Spacer
            Constraint::Length(5),  // Summary
        ])
        .split(column)
        .to_vec()
    }
}
