//! Layout helpers shared by the views and modals.

use ratatui::prelude::*;

/// Creates a centered rectangular area within a given rectangle.
///
/// ```rust,ignore
/// let parent = Rect::new(0, 0, 100, 50);
/// let centered = centered_rect(80, 70, parent);
/// // 80% wide and 70% tall, centered in parent
/// ```
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Like [`centered_rect`], but the result is clamped between the sizes of
/// `min` and `max` and never exceeds `r`.
pub fn centered_min_max(percent_x: u16, percent_y: u16, min: Rect, max: Rect, r: Rect) -> Rect {
    let scaled = centered_rect(percent_x, percent_y, r);
    let width = scaled.width.clamp(min.width, max.width).min(r.width);
    let height = scaled.height.clamp(min.height, max.height).min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_min_max_respects_bounds() {
        let min = Rect::new(0, 0, 30, 6);
        let max = Rect::new(0, 0, 60, 9);

        let small = centered_min_max(50, 30, min, max, Rect::new(0, 0, 40, 10));
        assert_eq!((small.width, small.height), (30, 6));

        let large = centered_min_max(50, 30, min, max, Rect::new(0, 0, 200, 60));
        assert_eq!((large.width, large.height), (60, 9));
        assert_eq!(large.x, 70);

        let tiny = centered_min_max(50, 30, min, max, Rect::new(0, 0, 20, 4));
        assert_eq!((tiny.width, tiny.height), (20, 4));
    }
}
