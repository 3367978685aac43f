//! # Carte Engine
//!
//! The state core behind the menu screen. It owns the in-progress draft, the
//! session catalog and the view-mode flag, validates submissions, and reports
//! the outcome of each submission through a [`NotificationSink`].
//!
//! Nothing here touches a terminal, a file or the network; the TUI crate
//! drives it with inbound events and renders what it exposes.
//!
//! ```rust
//! use carte_engine::MenuManager;
//! use carte_types::{Course, DraftField};
//!
//! let mut manager = MenuManager::new();
//! manager.update_draft_field(DraftField::DishName, "Bobotie");
//! manager.update_draft_field(DraftField::Description, "Traditional baked dish");
//! manager.select_course(Course::Mains);
//! manager.update_draft_field(DraftField::Price, "120.50");
//!
//! let id = manager.submit_draft()?;
//! assert_eq!(manager.catalog().get(id).map(|entry| entry.price), Some(120.5));
//! assert_eq!(manager.sink_mut().pop().map(|n| n.message).as_deref(), Some("Menu item added!"));
//! # Ok::<(), carte_engine::ValidationError>(())
//! ```

pub mod catalog;
pub mod draft;
pub mod error;
pub mod ids;
pub mod manager;
pub mod notify;

pub use catalog::Catalog;
pub use draft::{Draft, ValidDraft, parse_price};
pub use error::ValidationError;
pub use ids::IdGenerator;
pub use manager::{ENTRY_ADDED_MESSAGE, MenuManager};
pub use notify::{NotificationQueue, NotificationSink};
