use super::{Ansi256Theme, ChristoffelTheme, NordTheme, Theme};

/// A palette that can be chosen by name from the config file, `--theme`
/// or `TUI_THEME`.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    pub id: &'static str,
    /// Extra names accepted for this palette, matched case-insensitively.
    pub aliases: &'static [&'static str],
    /// Palette limited to the 256-color cube.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }

    fn answers_to(&self, name: &str) -> bool {
        std::iter::once(self.id)
            .chain(self.aliases.iter().copied())
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

const CHRISTOFFEL: ThemeDefinition = ThemeDefinition {
    id: "christoffel",
    aliases: &["gold", "default"],
    is_ansi_fallback: false,
    factory: || Box::new(ChristoffelTheme::new()),
};

const NORD: ThemeDefinition = ThemeDefinition {
    id: "nord",
    aliases: &[],
    is_ansi_fallback: false,
    factory: || Box::new(NordTheme::new()),
};

const ANSI256: ThemeDefinition = ThemeDefinition {
    id: "ansi256",
    aliases: &["ansi", "256"],
    is_ansi_fallback: true,
    factory: || Box::new(Ansi256Theme::new()),
};

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[CHRISTOFFEL, NORD, ANSI256];

pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.answers_to(name))
}

pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}
