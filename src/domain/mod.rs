// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains the portal's state and rules. It has no dependencies
//! on external crates (except `std`) so every rule can be tested without a
//! window.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PortalError`](error::PortalError))
//! - [`portal`]: Credentials, session and earring catalog
//!   ([`Portal`](portal::Portal), [`Role`](portal::Role))

pub mod error;
pub mod portal;
