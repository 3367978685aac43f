//! Error types for draft submission.

use carte_types::Notification;
use thiserror::Error;

/// Reasons a draft cannot be committed to the catalog.
///
/// The `Display` text is the exact message shown to the user. Every variant
/// is recoverable by editing the draft and submitting again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a dish name")]
    MissingDishName,

    #[error("Please enter a description")]
    MissingDescription,

    #[error("Please select a course")]
    MissingCourse,

    /// Empty, unparseable, non-finite, zero or negative price text.
    #[error("Please enter a valid price")]
    InvalidPrice,
}

impl ValidationError {
    /// Error notification carrying this variant's message.
    pub fn notification(&self) -> Notification {
        Notification::error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_copy() {
        assert_eq!(ValidationError::MissingDishName.to_string(), "Please enter a dish name");
        assert_eq!(ValidationError::MissingDescription.to_string(), "Please enter a description");
        assert_eq!(ValidationError::MissingCourse.to_string(), "Please select a course");
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Please enter a valid price");
    }

    #[test]
    fn notification_uses_error_title() {
        let notification = ValidationError::MissingCourse.notification();
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.message, "Please select a course");
    }
}
