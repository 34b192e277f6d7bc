// SPDX-License-Identifier: MPL-2.0
//! `viewing_room` is a single-window gallery that walks through a catalog of
//! artworks, built with the Iced GUI framework.
//!
//! Navigation is driven by arrows, keys and horizontal swipes; the current
//! position survives restarts within a session, images are fetched from a
//! remote store at a resolution matching the window, and a detail overlay
//! describes the displayed work.

#![doc(html_root_url = "https://docs.rs/viewing_room/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
