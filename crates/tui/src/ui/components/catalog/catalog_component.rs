use carte_types::{Effect, EntryId, MenuEntry, ViewMode};
use carte_util::{format_price, truncate_to_width};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::state::CatalogFocus;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{
    Theme,
    theme_helpers::{self as th, ButtonKind},
};

/// Longest description shown on a card, in wrapped lines.
const MAX_DESCRIPTION_LINES: usize = 3;
const DELETE_LABEL: &str = "[Delete]";

/// The "Chef's Menu" list of committed entries.
#[derive(Debug, Default)]
pub struct CatalogComponent {
    card_areas: Vec<(usize, Rect)>,
    delete_areas: Vec<(EntryId, Rect)>,
    back_area: Rect,
}

impl CatalogComponent {
    fn delete_selected(app: &App) -> Vec<Effect> {
        app.catalog
            .selected_id(app.menu.catalog())
            .map(|id| vec![Effect::DeleteEntry(id)])
            .unwrap_or_default()
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let catalog = app.menu.catalog();

        if catalog.is_empty() {
            let [line] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(area);
            frame.render_widget(
                Paragraph::new("No menu items added yet.")
                    .centered()
                    .style(theme.muted_style().add_modifier(Modifier::ITALIC)),
                line,
            );
            return;
        }

        let text_width = usize::from(area.width.saturating_sub(2)).max(1);
        let descriptions: Vec<Vec<String>> = catalog.iter().map(|entry| wrap_description(&entry.description, text_width)).collect();
        let heights: Vec<u16> = descriptions.iter().map(|lines| 4 + lines.len() as u16).collect();
        app.catalog.scroll_into_view(&heights, area.height);

        let selected = app.catalog.selected();
        let list_focused = app.catalog.focus == CatalogFocus::List;
        let mut y = area.y;
        for (index, entry) in catalog.iter().enumerate().skip(app.catalog.offset()) {
            let height = heights[index];
            if y + height > area.bottom() {
                break;
            }
            let card = Rect::new(area.x, y, area.width, height);
            let delete_area = render_card(
                frame,
                card,
                entry,
                &descriptions[index],
                &app.ctx.config.currency_symbol,
                index == selected && list_focused,
                theme,
            );
            self.card_areas.push((index, card));
            self.delete_areas.push((entry.id, delete_area));
            y += height;
        }
    }
}

fn wrap_description(description: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = textwrap::wrap(description, width).into_iter().map(|line| line.into_owned()).collect();
    if lines.len() > MAX_DESCRIPTION_LINES {
        lines.truncate(MAX_DESCRIPTION_LINES);
        if let Some(last) = lines.last_mut() {
            *last = truncate_to_width(&format!("{last} …"), width);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Draws one entry and returns the area of its delete control.
fn render_card<T: Theme + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    entry: &MenuEntry,
    description: &[String],
    currency_symbol: &str,
    selected: bool,
    theme: &T,
) -> Rect {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(selected))
        .style(th::panel_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_row, course_row, description_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let price = format_price(currency_symbol, entry.price);
    let price_width = u16::try_from(price.len()).unwrap_or(u16::MAX);
    let [name_area, price_area] = Layout::horizontal([Constraint::Min(1), Constraint::Length(price_width)]).areas(title_row);
    let name_style = if selected {
        theme.highlight_style()
    } else {
        theme.text_style().add_modifier(Modifier::BOLD)
    };
    let name = truncate_to_width(&entry.dish_name, usize::from(name_area.width.saturating_sub(1)));
    frame.render_widget(Paragraph::new(Span::styled(name, name_style)), name_area);
    frame.render_widget(Paragraph::new(Span::styled(price, theme.highlight_style())).right_aligned(), price_area);

    let [course_area, delete_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(DELETE_LABEL.len() as u16)]).areas(course_row);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Course: ", theme.muted_style()),
            Span::styled(entry.course.as_str(), theme.label_style()),
        ])),
        course_area,
    );
    frame.render_widget(Paragraph::new(Span::styled(DELETE_LABEL, theme.danger_style())), delete_area);

    let lines: Vec<Line> = description
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), theme.label_style())))
        .collect();
    frame.render_widget(Paragraph::new(lines), description_area);

    delete_area
}

impl Component for CatalogComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let len = app.menu.entry_count();
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => return vec![Effect::SwitchTo(ViewMode::Editor)],
            KeyCode::Tab | KeyCode::BackTab => app.catalog.focus = app.catalog.focus.toggle(),
            KeyCode::Enter if app.catalog.focus == CatalogFocus::Back => return vec![Effect::SwitchTo(ViewMode::Editor)],
            KeyCode::Up | KeyCode::Char('k') => app.catalog.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => app.catalog.select_next(len),
            KeyCode::Home => app.catalog.select(0, len),
            KeyCode::End => app.catalog.select_last(len),
            KeyCode::Delete | KeyCode::Char('d') if app.catalog.focus == CatalogFocus::List => {
                return Self::delete_selected(app);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let len = app.menu.entry_count();
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => app.catalog.select_next(len),
            MouseEventKind::ScrollUp => app.catalog.select_prev(len),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.back_area.contains(position) {
                    return vec![Effect::SwitchTo(ViewMode::Editor)];
                }
                if let Some((id, _)) = self.delete_areas.iter().find(|(_, rect)| rect.contains(position)) {
                    return vec![Effect::DeleteEntry(*id)];
                }
                if let Some((index, _)) = self.card_areas.iter().find(|(_, rect)| rect.contains(position)) {
                    app.catalog.focus = CatalogFocus::List;
                    app.catalog.select(*index, len);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.card_areas.clear();
        self.delete_areas.clear();

        let [header_area, list_area] = self.get_preferred_layout(app, rect)[..] else {
            return;
        };

        let theme = &*app.ctx.theme;
        let [title_area, back_area] = Layout::horizontal([Constraint::Min(1), Constraint::Length(10)]).areas(header_area);
        let [title_line] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(title_area);
        frame.render_widget(Paragraph::new(Span::styled("Chef's Menu", theme.highlight_style())), title_line);
        th::render_button(
            frame,
            back_area,
            "Back",
            ButtonKind::Secondary,
            app.catalog.focus == CatalogFocus::Back,
            theme,
        );
        self.back_area = back_area;

        self.render_cards(frame, list_area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", "Select"), ("d", "Delete"), ("b/Esc", "Back"), ("Tab", "Focus"), ("Ctrl+Q", "Quit")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let [column] = Layout::horizontal([Constraint::Max(72)]).flex(Flex::Center).areas(area);
        Layout::vertical([
            Constraint::Length(3), // Title + back button
            Constraint::Min(0),    // Cards
        ])
        .split(column)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_descriptions_are_capped() {
        let text = "slow cooked lamb with apricot glaze served on saffron rice with sambals";
        let lines = wrap_description(text, 20);
        assert_eq!(lines.len(), MAX_DESCRIPTION_LINES);
        assert!(lines.last().is_some_and(|line| line.ends_with('…')));
        assert_eq!(wrap_description("short", 20), vec!["short".to_string()]);
    }
}
