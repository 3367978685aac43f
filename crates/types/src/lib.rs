mod menu;

pub use menu::{Course, DraftField, EntryId, MenuEntry, ParseCourseError, ViewMode};

use serde::{Deserialize, Serialize};

/// Outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

/// A discrete, user-visible message emitted by the core.
///
/// The presentation layer decides how to surface it (the terminal UI shows a
/// modal); the core only guarantees one notification per submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Messages that can be sent to update the application state.
///
/// This enum defines system events that are not tied to a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// The open notification was acknowledged by the user
    NotificationDismissed,
}

/// Side effects that can be triggered by component event handlers.
///
/// Components describe what should happen; the runtime applies it to the
/// menu state and the view stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Validate the draft and commit it to the catalog
    SubmitDraft,
    /// Remove the entry with this identifier, if present
    DeleteEntry(EntryId),
    /// Change the main view
    SwitchTo(ViewMode),
    /// Display a modal view
    ShowModal(Modal),
    /// Hide any open modal
    CloseModal,
    /// Forward a message back into the update loop
    SendMsg(Msg),
    /// Leave the application
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Notification,
}
