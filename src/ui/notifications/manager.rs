// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! All notifications live in one arrival-ordered list; the first
//! [`MAX_VISIBLE`] entries are on screen and the rest wait their turn.
//! Removing a visible entry (dismissal or expiry) therefore promotes
//! the oldest waiting one without any bookkeeping.

use super::notification::{Notification, NotificationId};

/// Toasts shown at once before new ones start queueing.
const MAX_VISIBLE: usize = 3;

/// Messages emitted by toast widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification. It shows immediately if fewer than
    /// [`MAX_VISIBLE`] are on screen, otherwise once older ones go.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    /// Removes a notification wherever it sits. Returns whether the id
    /// was known.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id() != id);
        self.entries.len() < before
    }

    /// Drops visible notifications whose lifetime has elapsed. Driven
    /// by the application tick while toasts are on screen.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible()
            .filter(|n| n.is_expired())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Notifications currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drops every render-failure notification, visible or queued.
    ///
    /// Called when a diagram renders successfully so stale failures do
    /// not linger next to the fresh result.
    pub fn clear_render_errors(&mut self) {
        self.entries.retain(|n| !n.key().starts_with("error-render-"));
    }
}
