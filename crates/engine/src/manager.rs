//! The menu state owner: draft, catalog, view mode and notifications.

use carte_types::{Course, DraftField, EntryId, MenuEntry, Notification, ViewMode};
use chrono::Utc;
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    draft::Draft,
    error::ValidationError,
    ids::IdGenerator,
    notify::{NotificationQueue, NotificationSink},
};

/// Message emitted after a draft is committed.
pub const ENTRY_ADDED_MESSAGE: &str = "Menu item added!";

/// Exclusive owner of the session's menu state.
///
/// Every operation runs to completion synchronously. Notifications go to the
/// sink `S`; the default [`NotificationQueue`] lets a UI drain and show them
/// after each event.
#[derive(Debug)]
pub struct MenuManager<S = NotificationQueue> {
    draft: Draft,
    catalog: Catalog,
    view_mode: ViewMode,
    ids: IdGenerator,
    sink: S,
}

impl MenuManager<NotificationQueue> {
    pub fn new() -> Self {
        Self::with_sink(NotificationQueue::new())
    }
}

impl Default for MenuManager<NotificationQueue> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NotificationSink> MenuManager<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            draft: Draft::new(),
            catalog: Catalog::new(),
            view_mode: ViewMode::default(),
            ids: IdGenerator::new(),
            sink,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn entry_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Stores a raw keystroke value. No validation happens here.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    pub fn select_course(&mut self, course: Course) {
        debug!(%course, "course selected");
        self.draft.select_course(course);
    }

    pub fn clear_course(&mut self) {
        self.draft.clear_course();
    }

    /// Validates the draft and, on success, appends a new entry and resets the
    /// draft.
    ///
    /// Exactly one notification is emitted per call. On failure the catalog
    /// and the draft are left untouched.
    pub fn submit_draft(&mut self) -> Result<EntryId, ValidationError> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(error) => {
                debug!(%error, "draft rejected");
                self.sink.notify(error.notification());
                return Err(error);
            }
        };

        let id = self.ids.next_id();
        self.catalog.append(MenuEntry {
            id,
            dish_name: valid.dish_name,
            description: valid.description,
            course: valid.course,
            price: valid.price,
            created_at: Utc::now(),
        });
        self.draft.reset();
        info!(%id, entries = self.catalog.len(), "menu entry added");
        self.sink.notify(Notification::success(ENTRY_ADDED_MESSAGE));
        Ok(id)
    }

    /// Removes the entry with `id`. Unknown ids are ignored.
    pub fn delete_entry(&mut self, id: EntryId) -> Option<MenuEntry> {
        let removed = self.catalog.remove(id);
        match &removed {
            Some(entry) => info!(%id, dish = %entry.dish_name, "menu entry deleted"),
            None => debug!(%id, "delete ignored; no such entry"),
        }
        removed
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}
