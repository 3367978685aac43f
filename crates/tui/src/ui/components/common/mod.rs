pub mod notification_modal;
pub mod text_input;

pub use notification_modal::{NotificationModal, NotificationState};
pub use text_input::TextInputState;
