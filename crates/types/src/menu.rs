//! Menu domain types shared by the engine and the terminal UI.

use std::{error::Error, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a menu entry when it is created.
///
/// Identifiers are unique within a session and are never reused after the
/// entry they name is deleted. The numeric value carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of courses a dish can belong to.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    /// Every course in display order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Mains => "Mains",
            Self::Dessert => "Dessert",
        }
    }

    /// Position of this course within [`Course::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Starters => 0,
            Self::Mains => 1,
            Self::Dessert => 2,
        }
    }

    /// The course after this one, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The course before this one, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = ParseCourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCourseError(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCourseError(String);

impl fmt::Display for ParseCourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid course '{}'; expected one of Starters, Mains, Dessert", self.0)
    }
}

impl Error for ParseCourseError {}

/// A committed dish on the menu.
///
/// Entries are created only from a validated draft and are never edited in
/// place afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: EntryId,
    /// Trimmed, non-empty dish name
    pub dish_name: String,
    /// Trimmed, non-empty description
    pub description: String,
    pub course: Course,
    /// Positive, finite price in currency units
    pub price: f64,
    /// When the entry was committed; metadata only
    pub created_at: DateTime<Utc>,
}

/// Which screen content is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Form for adding entries plus a menu summary
    #[default]
    Editor,
    /// Full list of entries with delete controls
    Catalog,
}

/// Free-text draft fields that accept raw keystroke values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    DishName,
    Description,
    Price,
}
