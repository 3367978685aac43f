//! Notification delivery from the engine to whatever presents it.

use std::collections::VecDeque;

use carte_types::Notification;

/// Receives notifications emitted by [`crate::MenuManager`].
///
/// The engine calls `notify` synchronously, once per submit attempt.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// FIFO buffer of notifications waiting to be shown.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest pending notification.
    pub fn pop(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<&Notification> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.pending.drain(..)
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }
}
