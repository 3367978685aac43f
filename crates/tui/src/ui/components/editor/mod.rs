mod editor_component;
mod state;

pub use editor_component::EditorComponent;
pub use state::{EditorFocus, EditorState};
