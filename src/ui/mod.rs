// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`login`] - Brand name and password form with Register and Login
//! - [`upload`] - Earring description, image selection with preview, save and logout
//! - [`admin`] - Table of every saved earring record
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod admin;
pub mod design_tokens;
pub mod login;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod upload;
