//! Application state for the Carte TUI.
//!
//! `App` owns the menu (the single source of truth for the draft, catalog
//! and view mode) next to the per-view UI state. Components mutate it only
//! through the methods here or by returning effects.

use carte_engine::MenuManager;
use carte_types::{Effect, EntryId, Modal, Msg, ViewMode};
use carte_util::AppConfig;
use tracing::debug;

use crate::ui::components::catalog::{CatalogFocus, CatalogState};
use crate::ui::components::common::NotificationState;
use crate::ui::components::editor::{EditorFocus, EditorState};
use crate::ui::theme::{LoadedTheme, Theme};

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Identifier of the active theme
    pub theme_id: &'static str,
    /// Whether the 256-color fallback palette is active
    pub ansi_palette: bool,
    /// Presentation settings (title, currency)
    pub config: AppConfig,
}

impl SharedCtx {
    pub fn new(config: AppConfig, loaded: LoadedTheme) -> Self {
        Self {
            theme: loaded.theme,
            theme_id: loaded.definition.id,
            ansi_palette: loaded.definition.is_ansi_fallback,
            config,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    /// Draft, catalog and view mode
    pub menu: MenuManager,
    pub editor: EditorState,
    pub catalog: CatalogState,
    pub notification: NotificationState,
    /// Modal currently layered over the view
    pub open_modal: Option<Modal>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, theme: LoadedTheme) -> Self {
        debug!(theme = theme.definition.id, "starting with theme");
        Self {
            ctx: SharedCtx::new(config, theme),
            menu: MenuManager::new(),
            editor: EditorState::default(),
            catalog: CatalogState::default(),
            notification: NotificationState::default(),
            open_modal: None,
            should_quit: false,
        }
    }

    /// Handle a system message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick | Msg::Resize(..) => Vec::new(),
            Msg::NotificationDismissed => {
                self.notification.clear();
                self.show_next_notification()
            }
        }
    }

    /// Commit the draft. The editor buffers follow the draft, which is only
    /// cleared on success.
    pub fn submit_draft(&mut self) -> Vec<Effect> {
        if self.menu.submit_draft().is_ok() {
            self.editor.sync_from(self.menu.draft());
            self.editor.focus = EditorFocus::DishName;
        }
        self.show_next_notification()
    }

    pub fn delete_entry(&mut self, id: EntryId) {
        self.menu.delete_entry(id);
        self.catalog.clamp(self.menu.entry_count());
    }

    pub fn switch_to(&mut self, mode: ViewMode) {
        self.menu.set_view_mode(mode);
        if mode == ViewMode::Catalog {
            self.catalog.focus = CatalogFocus::List;
            self.catalog.clamp(self.menu.entry_count());
        }
    }

    /// Surface the oldest pending notification, unless one is already shown.
    fn show_next_notification(&mut self) -> Vec<Effect> {
        if self.notification.current().is_some() {
            return Vec::new();
        }
        match self.menu.sink_mut().pop() {
            Some(notification) => {
                self.notification.show(notification);
                vec![Effect::ShowModal(Modal::Notification)]
            }
            None => Vec::new(),
        }
    }
}
