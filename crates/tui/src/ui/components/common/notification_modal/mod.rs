mod notification_modal_component;
mod state;

pub use notification_modal_component::NotificationModal;
pub use state::NotificationState;
