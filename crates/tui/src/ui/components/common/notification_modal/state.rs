use carte_types::Notification;

/// The notification currently presented in the modal, if any.
#[derive(Debug, Default, Clone)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) -> Option<Notification> {
        self.current.take()
    }
}
