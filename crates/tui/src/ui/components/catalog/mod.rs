mod catalog_component;
mod state;

pub use catalog_component::CatalogComponent;
pub use state::{CatalogFocus, CatalogState};
