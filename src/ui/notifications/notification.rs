// SPDX-License-Identifier: MPL-2.0
use crate::config::INFO_TIMEOUT_SECS;
use crate::i18n::UiKey;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines accent color and default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Lifetime used when the notification has no explicit one.
    /// Errors get theirs from the manager's configured timeout.
    #[must_use]
    pub fn default_lifetime(self) -> Option<Duration> {
        match self {
            Severity::Info => {
                Some(Duration::from_secs(u64::from(INFO_TIMEOUT_SECS)))
            }
            Severity::Warning | Severity::Error => None,
        }
    }
}

/// A message shown to the user, resolved through the active locale at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: UiKey,
    created_at: Instant,
    lifetime: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, key: UiKey) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            key,
            created_at: Instant::now(),
            lifetime: severity.default_lifetime(),
        }
    }

    pub fn info(key: UiKey) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: UiKey) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: UiKey) -> Self {
        Self::new(Severity::Error, key)
    }

    #[must_use]
    pub fn auto_dismiss(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> UiKey {
        self.key
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        self.lifetime
    }

    /// Restarts the lifetime from `now`, for a notification leaving the queue.
    pub fn shown_at(&mut self, now: Instant) {
        self.created_at = now;
    }

    /// Whether the notification has outlived its lifetime at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.lifetime
            .is_some_and(|lifetime| now.saturating_duration_since(self.created_at) >= lifetime)
    }
}
