// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Bundles are embedded in
//! the binary from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - `{ $name }` interpolation for brand names and file names
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
