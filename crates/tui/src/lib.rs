//! # Carte TUI
//!
//! Terminal front end for the menu editor. Two views share one screen: the
//! editor (the "Add New Menu Item" form plus a summary card) and the catalog
//! ("Chef's Menu"). Validation results and confirmations appear as a
//! blocking modal.
//!
//! ## Architecture
//!
//! Each view is a component that handles its own input and renders itself.
//! Components return `Effect`s which the runtime applies to the
//! [`carte_engine::MenuManager`] owned by the application state.

mod app;
mod ui;

#[cfg(test)]
mod tests;

use anyhow::Result;
use carte_util::AppConfig;

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Terminal setup or drawing failures (raw mode, alternate screen).
pub async fn run(config: AppConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
