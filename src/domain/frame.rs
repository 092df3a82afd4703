// SPDX-License-Identifier: MPL-2.0
//! Decoded camera frame.

use std::sync::Arc;

/// RGBA frame delivered by a camera source.
///
/// Pixel data is reference counted so the latest frame can be handed to the
/// UI on every tick without copying it out of the capture slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl CameraFrame {
    /// Wraps RGBA pixel data, or `None` when the length does not match
    /// `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        (rgba_bytes.len() == expected_len && expected_len > 0).then(|| Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}
