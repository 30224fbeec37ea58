// SPDX-License-Identifier: MPL-2.0
//! Image loading and scaling for the upload preview and admin thumbnails.
//!
//! Only the formats offered by the upload dialog are decoded.

pub mod image;
pub mod image_transform;

use std::path::Path;

pub use image::{load_scaled, ImageData};
pub use image_transform::{ImageSize, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};

/// Extensions offered by the upload file dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Returns true when `path` has one of [`IMAGE_EXTENSIONS`] (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
