// SPDX-License-Identifier: MPL-2.0
//! Camera capture through `FFmpeg` input devices.
//!
//! Each `start` spawns a capture thread that owns the device context. The
//! thread keeps only the newest decoded frame in a shared slot and exits as
//! soon as the capture generation changes, which is how `stop` releases the
//! device without joining.

use super::{create_scaler, extract_rgba_data, fit_width, init_ffmpeg};
use crate::application::port::{CameraError, CameraSource};
use crate::domain::frame::CameraFrame;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Frames wider than this are scaled down before reaching the UI.
const MAX_FRAME_WIDTH: u32 = 640;

/// Requested capture rate.
const CAPTURE_FRAMERATE: &str = "30";

/// An `FFmpeg` input device: demuxer name plus device address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub format: String,
    pub path: String,
}

impl CameraDevice {
    /// Uses `path` with the platform's capture demuxer.
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            format: Self::platform_format().to_string(),
            path: path.into(),
        }
    }

    fn platform_format() -> &'static str {
        if cfg!(target_os = "macos") {
            "avfoundation"
        } else if cfg!(target_os = "windows") {
            "dshow"
        } else {
            "v4l2"
        }
    }
}

impl Default for CameraDevice {
    fn default() -> Self {
        let path = if cfg!(target_os = "macos") {
            "0"
        } else if cfg!(target_os = "windows") {
            "video=Integrated Camera"
        } else {
            "/dev/video0"
        };
        Self::with_path(path)
    }
}

#[derive(Default)]
struct CaptureShared {
    active: AtomicBool,
    /// Bumped by every start and stop; a capture thread exits once its own
    /// generation is outdated.
    generation: AtomicU64,
    latest: Mutex<Option<CameraFrame>>,
    error: Mutex<Option<CameraError>>,
}

impl CaptureShared {
    fn is_current(&self, generation: u64) -> bool {
        self.active.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == generation
    }

    fn publish(&self, frame: CameraFrame) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(frame);
        }
    }

    fn fail(&self, generation: u64, error: CameraError) {
        // Only the live capture may report; a stale thread stays silent.
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        self.active.store(false, Ordering::SeqCst);
        if let Ok(mut slot) = self.error.lock() {
            *slot = Some(error);
        }
    }

    fn reset(&self) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = None;
        }
        if let Ok(mut error) = self.error.lock() {
            *error = None;
        }
    }
}

/// Camera source reading one `FFmpeg` capture device.
pub struct FfmpegCamera {
    device: CameraDevice,
    shared: Arc<CaptureShared>,
}

impl std::fmt::Debug for FfmpegCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegCamera")
            .field("device", &self.device)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl FfmpegCamera {
    #[must_use]
    pub fn new(device: CameraDevice) -> Self {
        Self {
            device,
            shared: Arc::new(CaptureShared::default()),
        }
    }
}

impl CameraSource for FfmpegCamera {
    fn start(&self) -> BoxFuture<'static, Result<(), CameraError>> {
        if self.shared.active.swap(true, Ordering::SeqCst) {
            return future::ready(Ok(())).boxed();
        }
        self.shared.reset();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (ready, opened) = oneshot::channel();
        let device = self.device.clone();
        let shared = Arc::clone(&self.shared);

        let spawned = std::thread::Builder::new()
            .name("camera".to_string())
            .spawn(move || capture(&device, &shared, generation, ready));

        if let Err(e) = spawned {
            self.shared.active.store(false, Ordering::SeqCst);
            return future::ready(Err(CameraError::Unavailable(e.to_string()))).boxed();
        }

        let shared = Arc::clone(&self.shared);
        async move {
            let result = opened
                .await
                .unwrap_or_else(|_| Err(CameraError::Unavailable("capture thread ended".into())));
            if result.is_err() && shared.generation.load(Ordering::SeqCst) == generation {
                shared.active.store(false, Ordering::SeqCst);
            }
            result
        }
        .boxed()
    }

    fn stop(&self) {
        if self.shared.active.swap(false, Ordering::SeqCst) {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(device = %self.device.path, "camera released");
        }
        if let Ok(mut latest) = self.shared.latest.lock() {
            *latest = None;
        }
    }

    fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::SeqCst)
    }

    fn latest_frame(&self) -> Option<CameraFrame> {
        self.shared.latest.lock().ok().and_then(|latest| latest.clone())
    }

    fn take_error(&self) -> Option<CameraError> {
        self.shared.error.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Capture thread body.
fn capture(
    device: &CameraDevice,
    shared: &CaptureShared,
    generation: u64,
    ready: oneshot::Sender<Result<(), CameraError>>,
) {
    let (mut ictx, stream_index, mut decoder) = match open_device(device) {
        Ok(opened) => opened,
        Err(e) => {
            tracing::warn!(device = %device.path, error = %e, "camera could not be opened");
            let _ = ready.send(Err(e));
            return;
        }
    };

    let (width, height) = fit_width(decoder.width(), decoder.height(), MAX_FRAME_WIDTH);
    let mut scaler = match create_scaler(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        width,
        height,
    ) {
        Ok(scaler) => scaler,
        Err(e) => {
            let _ = ready.send(Err(CameraError::Unavailable(e.to_string())));
            return;
        }
    };

    tracing::debug!(device = %device.path, width, height, "camera acquired");
    if ready.send(Ok(())).is_err() {
        return;
    }

    let mut decoded = ffmpeg_next::frame::Video::empty();
    let mut rgba = ffmpeg_next::frame::Video::empty();

    for (stream, packet) in ictx.packets() {
        if !shared.is_current(generation) {
            return;
        }
        if stream.index() != stream_index || decoder.send_packet(&packet).is_err() {
            continue;
        }
        while decoder.receive_frame(&mut decoded).is_ok() {
            if let Err(e) = scaler.run(&decoded, &mut rgba) {
                shared.fail(generation, CameraError::Capture(e.to_string()));
                return;
            }
            if let Some(frame) =
                CameraFrame::from_rgba(rgba.width(), rgba.height(), extract_rgba_data(&rgba))
            {
                shared.publish(frame);
            }
        }
    }

    if shared.is_current(generation) {
        shared.fail(
            generation,
            CameraError::Capture("camera stream ended".to_string()),
        );
    }
}

fn open_device(
    device: &CameraDevice,
) -> Result<
    (
        ffmpeg_next::format::context::Input,
        usize,
        ffmpeg_next::decoder::Video,
    ),
    CameraError,
> {
    init_ffmpeg().map_err(|e| CameraError::Unavailable(e.to_string()))?;

    let format = ffmpeg_next::device::input::video()
        .find(|candidate| candidate.name() == device.format)
        .ok_or(CameraError::NoDevice)?;

    let mut options = ffmpeg_next::Dictionary::new();
    options.set("framerate", CAPTURE_FRAMERATE);

    let context = ffmpeg_next::format::open_with(
        &device.path,
        &ffmpeg_next::format::format::Format::Input(format),
        options,
    )
    .map_err(|e| match e {
        ffmpeg_next::Error::Other { .. } => CameraError::NoDevice,
        other => CameraError::Unavailable(other.to_string()),
    })?;

    let ffmpeg_next::format::context::Context::Input(ictx) = context else {
        return Err(CameraError::Unavailable("device is not an input".into()));
    };

    let stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(CameraError::NoDevice)?;
    let stream_index = stream.index();

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .and_then(|context| context.decoder().video())
        .map_err(|e| CameraError::Unavailable(e.to_string()))?;

    Ok((ictx, stream_index, decoder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_device_uses_platform_demuxer() {
        let device = CameraDevice::default();
        assert!(!device.path.is_empty());
        assert_eq!(device.format, CameraDevice::platform_format());
    }

    #[test]
    fn stop_on_idle_camera_is_a_no_op() {
        let camera = FfmpegCamera::new(CameraDevice::default());
        camera.stop();
        assert!(!camera.is_active());
        assert!(camera.latest_frame().is_none());
        assert!(camera.take_error().is_none());
    }

    #[test]
    fn stale_capture_cannot_report_errors() {
        let shared = CaptureShared::default();
        shared.active.store(true, Ordering::SeqCst);
        shared.generation.store(2, Ordering::SeqCst);

        shared.fail(1, CameraError::Capture("old".into()));
        assert!(shared.active.load(Ordering::SeqCst));
        assert!(shared.error.lock().expect("lock").is_none());

        shared.fail(2, CameraError::Capture("live".into()));
        assert!(!shared.active.load(Ordering::SeqCst));
        assert_eq!(
            *shared.error.lock().expect("lock"),
            Some(CameraError::Capture("live".into()))
        );
    }

    #[tokio::test]
    async fn unknown_demuxer_reports_no_device() {
        let camera = FfmpegCamera::new(CameraDevice {
            format: "no-such-demuxer".into(),
            path: "/dev/null".into(),
        });

        let result = camera.start().await;

        assert_eq!(result, Err(CameraError::NoDevice));
        assert!(!camera.is_active());
    }
}
