// SPDX-License-Identifier: MPL-2.0
//! Square scaling used for previews and thumbnails.

use image_rs::{imageops::FilterType, DynamicImage};

/// Smallest accepted preview or thumbnail edge.
pub const MIN_IMAGE_SIZE: u32 = 16;

/// Largest accepted preview or thumbnail edge.
pub const MAX_IMAGE_SIZE: u32 = 512;

/// Edge length of the square preview shown after choosing an image.
pub const PREVIEW_EDGE: u32 = 100;

const _: () = assert!(MIN_IMAGE_SIZE <= PREVIEW_EDGE && PREVIEW_EDGE <= MAX_IMAGE_SIZE);

// ==========================================================================
// Image Size Value Object
// ==========================================================================

/// Edge length of a square preview, guaranteed to be within
/// `MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE`.
///
/// # Example
///
/// ```
/// use brand_portal::media::ImageSize;
///
/// assert_eq!(ImageSize::new(100).value(), 100);
/// assert_eq!(ImageSize::new(0).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize(u32);

impl ImageSize {
    /// Fixed size of the upload preview.
    pub const PREVIEW: Self = Self(PREVIEW_EDGE);

    /// Creates a new size, clamping the value to the valid range.
    #[must_use]
    pub fn new(edge: u32) -> Self {
        Self(edge.clamp(MIN_IMAGE_SIZE, MAX_IMAGE_SIZE))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Edge length as a layout length in logical pixels.
    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

/// Scale `image` to exactly `size`×`size`, ignoring the aspect ratio.
pub fn scale_square(image: &DynamicImage, size: ImageSize) -> DynamicImage {
    image.resize_exact(size.value(), size.value(), FilterType::Lanczos3)
}
