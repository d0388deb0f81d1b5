// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only routed when no widget captured the event, so
//! typing into a focused pick list never flips or moves the card.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Space flips the card, the arrow keys move through the deck.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut(&key),
            _ => None,
        }
    })
}

/// Maps a pressed key to its deck action.
pub fn shortcut(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Space) => Some(Message::Flip),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the shuffle confirmation label.
pub fn create_tick_subscription(has_notifications: bool, shuffle_pending: bool) -> Subscription<Message> {
    if has_notifications || shuffle_pending {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
