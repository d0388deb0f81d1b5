// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load failures and storage problems.
//!
//! - [`notification`] - `Notification` with a severity and a [`crate::i18n::UiKey`]
//! - [`manager`] - queuing, expiry and dismissal
//! - [`toast`] - rendering
//!
//! Every severity auto-dismisses; errors stay for the configured error
//! timeout (5 s by default). At most three toasts are visible at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
