// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: at most [`MAX_VISIBLE_TOASTS`] on screen, the rest
//! queued, expired ones removed on each tick.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::{DEFAULT_ERROR_TIMEOUT_SECS, MAX_VISIBLE_TOASTS};
use crate::i18n::UiKey;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    /// Lifetime given to warnings and errors pushed without one.
    error_timeout: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_secs(u64::from(DEFAULT_ERROR_TIMEOUT_SECS)))
    }
}

impl Manager {
    #[must_use]
    pub fn new(error_timeout: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            error_timeout,
        }
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    ///
    /// Warnings and errors are also logged.
    pub fn push(&mut self, mut notification: Notification) {
        match notification.severity() {
            Severity::Warning => log::warn!("{}", notification.key().path()),
            Severity::Error => log::error!("{}", notification.key().path()),
            Severity::Info => {}
        }
        if notification.lifetime().is_none() {
            notification = notification.auto_dismiss(self.error_timeout);
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes visible notifications that have expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops word-list load errors once a list has loaded successfully.
    pub fn clear_load_errors(&mut self) {
        let is_load_error = |n: &Notification| {
            matches!(
                n.key(),
                UiKey::ErrorsLoadFailed | UiKey::ErrorsNotFound | UiKey::ErrorsInvalidData
            )
        };
        let before = self.visible.len();
        self.visible.retain(|n| !is_load_error(n));
        self.queue.retain(|n| !is_load_error(n));
        if self.visible.len() < before {
            self.promote_from_queue(Instant::now());
        }
    }

    /// Moves queued notifications on screen, oldest first, each starting its
    /// lifetime at `now`.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.shown_at(now);
            self.visible.push_front(notification);
        }
    }
}
