//! UI rendering module for the TUI application.
//!
//! This module provides the root view, the menu views and the notification
//! modal, the theme system and layout utilities.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
