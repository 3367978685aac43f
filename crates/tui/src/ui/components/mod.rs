//! UI components: the two menu views, the notification modal and shared
//! building blocks.

pub mod catalog;
pub mod common;
pub mod component;
pub mod editor;

pub use catalog::CatalogComponent;
pub use component::Component;
pub use editor::EditorComponent;
