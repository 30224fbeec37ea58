// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Images**: Thumbnail edge length and the accepted size range
//! - **Logging**: Fallback log filter

// ==========================================================================
// Image Defaults
// ==========================================================================

pub use crate::media::{MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};

/// Edge length of the square thumbnail in the admin table.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 48;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const _: () = {
    assert!(MIN_IMAGE_SIZE <= DEFAULT_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_IMAGE_SIZE);
};
