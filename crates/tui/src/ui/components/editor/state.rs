use carte_engine::Draft;
use carte_types::DraftField;

use crate::ui::components::common::TextInputState;

/// Focusable regions of the editor view, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    #[default]
    DishName,
    Description,
    Course,
    Price,
    AddButton,
    ViewMenu,
}

impl EditorFocus {
    const ORDER: [EditorFocus; 6] = [
        EditorFocus::DishName,
        EditorFocus::Description,
        EditorFocus::Course,
        EditorFocus::Price,
        EditorFocus::AddButton,
        EditorFocus::ViewMenu,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|focus| *focus == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The draft field edited while this region has focus, if any.
    pub fn draft_field(self) -> Option<DraftField> {
        match self {
            EditorFocus::DishName => Some(DraftField::DishName),
            EditorFocus::Description => Some(DraftField::Description),
            EditorFocus::Price => Some(DraftField::Price),
            _ => None,
        }
    }
}

/// Text buffers and focus for the "Add New Menu Item" form.
#[derive(Debug, Default, Clone)]
pub struct EditorState {
    pub focus: EditorFocus,
    dish_name: TextInputState,
    description: TextInputState,
    price: TextInputState,
}

impl EditorState {
    pub fn input(&self, field: DraftField) -> &TextInputState {
        match field {
            DraftField::DishName => &self.dish_name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    pub fn input_mut(&mut self, field: DraftField) -> &mut TextInputState {
        match field {
            DraftField::DishName => &mut self.dish_name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
        }
    }

    /// Reload every buffer from the draft, e.g. after a successful submit
    /// cleared it.
    pub fn sync_from(&mut self, draft: &Draft) {
        for field in [DraftField::DishName, DraftField::Description, DraftField::Price] {
            if self.input(field).input() != draft.field(field) {
                self.input_mut(field).set_input(draft.field(field));
            }
        }
    }
}

pub const PLACEHOLDER_DISH_NAME: &str = "Enter your preferred dish name";
pub const PLACEHOLDER_DESCRIPTION: &str = "Enter meal description";
pub const PLACEHOLDER_PRICE: &str = "Enter price (e.g. 100.00)";

pub fn placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::DishName => PLACEHOLDER_DISH_NAME,
        DraftField::Description => PLACEHOLDER_DESCRIPTION,
        DraftField::Price => PLACEHOLDER_PRICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_in_both_directions() {
        assert_eq!(EditorFocus::DishName.next(), EditorFocus::Description);
        assert_eq!(EditorFocus::ViewMenu.next(), EditorFocus::DishName);
        assert_eq!(EditorFocus::DishName.prev(), EditorFocus::ViewMenu);
        assert_eq!(EditorFocus::Course.draft_field(), None);
    }

    #[test]
    fn sync_clears_buffers_after_reset() {
        let mut state = EditorState::default();
        state.input_mut(DraftField::Price).set_input("12.50");

        let draft = Draft::new();
        state.sync_from(&draft);
        assert_eq!(state.input(DraftField::Price).input(), "");
        assert_eq!(state.input(DraftField::Price).cursor(), 0);
    }
}
