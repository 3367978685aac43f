//! In-progress form values and their validation.

use carte_types::{Course, DraftField};

use crate::error::ValidationError;

/// The not-yet-submitted form values.
///
/// Text fields hold exactly what the user typed; nothing is trimmed or parsed
/// until [`Draft::validate`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    dish_name: String,
    description: String,
    price: String,
    course: Option<Course>,
}

/// Draft values that passed validation, ready to become an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dish_name(&self) -> &str {
        &self.dish_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn course(&self) -> Option<Course> {
        self.course
    }

    /// Raw value of a text field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::DishName => &self.dish_name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::DishName => &mut self.dish_name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
        };
        *slot = value;
    }

    pub fn select_course(&mut self, course: Course) {
        self.course = Some(course);
    }

    pub fn clear_course(&mut self) {
        self.course = None;
    }

    /// Returns every field to its empty/unselected default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks the fields in order and reports the first problem found.
    ///
    /// Order: dish name, description, course, price.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let dish_name = self.dish_name.trim();
        if dish_name.is_empty() {
            return Err(ValidationError::MissingDishName);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let course = self.course.ok_or(ValidationError::MissingCourse)?;
        let price = parse_price(&self.price).ok_or(ValidationError::InvalidPrice)?;

        Ok(ValidDraft {
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            course,
            price,
        })
    }
}

/// Parses price text into a positive, finite amount.
///
/// The whole trimmed text must be a number. Text with a numeric prefix such
/// as `12abc`, or a comma decimal like `12,50`, is rejected rather than read
/// as 12.
pub fn parse_price(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Draft {
        let mut draft = Draft::new();
        draft.set_field(DraftField::DishName, "  Bobotie ".into());
        draft.set_field(DraftField::Description, "Traditional baked dish".into());
        draft.set_field(DraftField::Price, "120.50".into());
        draft.select_course(Course::Mains);
        draft
    }

    #[test]
    fn validate_trims_and_parses() {
        let valid = filled().validate().expect("valid draft");
        assert_eq!(valid.dish_name, "Bobotie");
        assert_eq!(valid.course, Course::Mains);
        assert_eq!(valid.price, 120.5);
    }

    #[test]
    fn first_failing_check_wins() {
        let draft = Draft::new();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDishName));

        let mut draft = filled();
        draft.set_field(DraftField::Description, "   ".into());
        draft.clear_course();
        draft.set_field(DraftField::Price, "abc".into());
        assert_eq!(draft.validate(), Err(ValidationError::MissingDescription));

        let mut draft = filled();
        draft.clear_course();
        draft.set_field(DraftField::Price, String::new());
        assert_eq!(draft.validate(), Err(ValidationError::MissingCourse));
    }

    #[test]
    fn rejects_unusable_prices() {
        for text in ["", "   ", "abc", "0", "0.00", "-5", "NaN", "inf", "-inf"] {
            assert_eq!(parse_price(text), None, "price text {text:?}");
        }
        assert_eq!(parse_price(" 99.99 "), Some(99.99));
        assert_eq!(parse_price("1e2"), Some(100.0));
    }

    #[test]
    fn numeric_prefixes_are_not_prices() {
        for text in ["12abc", "12,50", "12 50", "R12"] {
            assert_eq!(parse_price(text), None, "price text {text:?}");
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = filled();
        draft.reset();
        assert_eq!(draft, Draft::default());
        assert_eq!(draft.course(), None);
        assert_eq!(draft.field(DraftField::Price), "");
    }
}
