// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss timeouts
//! - **Feedback**: Transient control labels
//! - **Timing**: Tick subscription interval
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Seconds an error toast stays on screen.
pub const DEFAULT_ERROR_TIMEOUT_SECS: u32 = 5;

pub const MIN_ERROR_TIMEOUT_SECS: u32 = 1;

pub const MAX_ERROR_TIMEOUT_SECS: u32 = 60;

/// Seconds a success or info toast stays on screen.
pub const INFO_TIMEOUT_SECS: u32 = 3;

/// Maximum toasts shown at once; older ones wait in a queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long the shuffle button reads "shuffled" after a shuffle.
pub const SHUFFLE_FEEDBACK_MS: u64 = 1500;

// ==========================================================================
// Timing
// ==========================================================================

/// Interval of the tick that drives toast expiry and transient labels.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Window
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_ERROR_TIMEOUT_SECS > 0);
    assert!(MAX_ERROR_TIMEOUT_SECS >= MIN_ERROR_TIMEOUT_SECS);
    assert!(DEFAULT_ERROR_TIMEOUT_SECS >= MIN_ERROR_TIMEOUT_SECS);
    assert!(DEFAULT_ERROR_TIMEOUT_SECS <= MAX_ERROR_TIMEOUT_SECS);
    assert!(INFO_TIMEOUT_SECS > 0);
    assert!(MAX_VISIBLE_TOASTS > 0);

    // The tick must be fine enough to end the shuffle label on time.
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < SHUFFLE_FEEDBACK_MS);

    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
