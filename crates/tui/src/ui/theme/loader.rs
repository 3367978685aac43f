//! Theme selection and terminal color detection.

use std::env;

use tracing::{debug, warn};

use crate::ui::theme::{Theme, ThemeDefinition, catalog};

/// Loaded theme plus the definition that produced it.
#[derive(Debug)]
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub(crate) fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Picks the theme for this terminal.
///
/// Terminals without truecolor always get the ANSI palette. Otherwise
/// `TUI_THEME` wins over `preferred_theme`, and unknown names fall through
/// to the default.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    select_theme(preferred_theme, |key| env::var(key).ok())
}

fn select_theme(preferred_theme: Option<&str>, var: impl Fn(&str) -> Option<String>) -> LoadedTheme {
    if !supports_truecolor(&var) {
        debug!("no truecolor support detected; using the ANSI palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let from_env = var("TUI_THEME");
    for name in [from_env.as_deref(), preferred_theme].into_iter().flatten() {
        match catalog::resolve(name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => warn!(theme = name, "unknown theme"),
        }
    }
    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn supports_truecolor(var: &impl Fn(&str) -> Option<String>) -> bool {
    let lowered = |key: &str| var(key).map(|value| value.trim().to_ascii_lowercase());

    match lowered("TUI_COLOR_MODE").as_deref() {
        Some("truecolor" | "24bit") => return true,
        Some("ansi256" | "256" | "8bit") => return false,
        _ => {}
    }
    if lowered("TUI_FORCE_TRUECOLOR").is_some_and(|value| matches!(value.as_str(), "1" | "true" | "yes" | "on")) {
        return true;
    }
    let advertises = |value: String| value.contains("truecolor") || value.contains("24bit");
    lowered("COLORTERM").is_some_and(advertises) || lowered("TERM").is_some_and(advertises)
}
