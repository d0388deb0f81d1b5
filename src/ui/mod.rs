// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` borrowed from the application state and returns an
//! element producing [`crate::app::Message`].
//!
//! - [`card_view`] - The flashcard face
//! - [`controls`] - Selectors, navigation and rating buttons
//! - [`stats`] - Progress bar and study statistics
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card_view;
pub mod controls;
pub mod design_tokens;
pub mod notifications;
pub mod stats;
pub mod styles;
pub mod theming;
