// SPDX-License-Identifier: MPL-2.0
//! `teamdeck` is a "Teamwork & Collaboration" slide deck built with the Iced
//! GUI framework.
//!
//! It presents a fixed deck in two layouts (classic slide-by-slide and a
//! continuous scroll), with countdown timers for timed exercises and pickers
//! for choosing a concept or a set of barriers during the session. Strings are
//! localized with Fluent and preferences live in a TOML settings file.

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod presentation;
pub mod ui;
