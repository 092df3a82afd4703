// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapters: narration clip decoding and camera capture.
//!
//! # Design Notes
//!
//! - `FFmpeg` contexts are created and dropped on the worker thread that uses
//!   them, so none of them has to be `Send`
//! - Video frames are converted to packed RGBA, audio to packed `f32`

pub mod camera;
pub mod clip;

pub use camera::{CameraDevice, FfmpegCamera};
pub use clip::decode_clip;

use crate::error::{Error, Result};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` and its capture devices with a quiet log level.
///
/// Safe to call multiple times; initialization happens once.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Media(format!("FFmpeg initialization failed: {e}")));
            return;
        }
        ffmpeg_next::device::register_all();

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Creates a scaler converting `src_format` frames to RGBA of the given size.
fn create_scaler(
    src_format: ffmpeg_next::format::Pixel,
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<ffmpeg_next::software::scaling::Context> {
    ffmpeg_next::software::scaling::Context::get(
        src_format,
        src_width,
        src_height,
        ffmpeg_next::format::Pixel::RGBA,
        dst_width,
        dst_height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| Error::Media(format!("Failed to create scaler: {e}")))
}

/// Copies the RGBA plane of a frame, dropping the per-row stride padding.
#[allow(clippy::cast_possible_truncation)] // stride is always < u32::MAX for video frames
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for row in data.chunks(stride).take(height) {
        rgba_bytes.extend_from_slice(&row[..(width * 4).min(row.len())]);
    }
    rgba_bytes
}

/// Fits `width`x`height` into `max_width`, keeping the aspect ratio and even
/// dimensions.
#[must_use]
pub(crate) fn fit_width(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scaled_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    #[allow(clippy::cast_possible_truncation)] // scaled_height <= height
    let scaled_height = (scaled_height as u32).max(2) & !1;
    (max_width & !1, scaled_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_ffmpeg_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }

    #[test]
    fn fit_width_keeps_small_frames() {
        assert_eq!(fit_width(320, 240, 640), (320, 240));
    }

    #[test]
    fn fit_width_scales_large_frames() {
        assert_eq!(fit_width(1920, 1080, 640), (640, 360));
    }
}
