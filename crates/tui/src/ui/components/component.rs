//! Component system for the Carte TUI.
//!
//! Components are self-contained UI elements. Their state lives on [`App`]
//! so it survives view switches; the component itself only keeps layout
//! caches such as hit-test rectangles from the last render.

use carte_types::{Effect, Msg};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI element that handles its own events and renders into a `Rect`.
///
/// Handlers report side effects back to the runtime as [`Effect`]s instead
/// of touching the menu directly, except for plain draft edits which are
/// forwarded immediately.
pub trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events; hit-testing uses the areas cached by `render`.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement and caching of hit-test areas.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Split `area` into the regions this component draws into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
