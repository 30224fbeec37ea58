// SPDX-License-Identifier: MPL-2.0
//! Image decoding for JPEG and PNG files.

use super::image_transform::{scale_square, ImageSize};
use crate::error::Result;
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let (width, height) = dynamic.dimensions();
        Self::from_rgba(width, height, dynamic.to_rgba8().into_vec())
    }
}

fn decode(path: &Path) -> Result<DynamicImage> {
    let bytes = fs::read(path)?;
    Ok(image_rs::load_from_memory(&bytes)?)
}

/// Load an image and scale it to a `size`×`size` square.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read and `Error::Image` when
/// its content cannot be decoded.
pub fn load_scaled<P: AsRef<Path>>(path: P, size: ImageSize) -> Result<ImageData> {
    let path = path.as_ref();
    let dynamic = decode(path).map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "failed to decode image");
        err
    })?;
    Ok(ImageData::from_dynamic(&scale_square(&dynamic, size)))
}
