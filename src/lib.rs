// SPDX-License-Identifier: MPL-2.0
//! `flashdeck` is a vocabulary flashcard viewer built with the Iced GUI framework.
//!
//! It loads word lists per language pair, shows one card at a time, and
//! lets the user flip, navigate, shuffle, filter by category and rate how
//! hard each card was. Interface text, definitions and category names are
//! localized, with fallback to the untranslated value.

#![doc(html_root_url = "https://docs.rs/flashdeck/0.1.0")]

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod loader;
pub mod ui;
