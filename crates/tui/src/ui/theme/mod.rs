//! Colors and styles for the menu screen.
//!
//! Palettes fill in [`roles::ThemeRoles`]; views style themselves through the
//! [`Theme`] trait and the builders in [`theme_helpers`].

pub mod ansi256;
pub mod catalog;
pub mod christoffel;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use christoffel::ChristoffelTheme;
pub use loader::{LoadedTheme, load};
pub use nord::NordTheme;
pub use roles::Theme;
