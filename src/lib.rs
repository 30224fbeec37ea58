// SPDX-License-Identifier: MPL-2.0
//! `brand_portal` is a small desktop portal built with the Iced GUI framework.
//!
//! Brands register and log in with a name and password, then upload earring
//! images with a description. The administrator account reviews every saved
//! record in a table. All portal data lives in memory for the lifetime of the
//! process; only display preferences are read from disk.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
