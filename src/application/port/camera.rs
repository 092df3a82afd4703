// SPDX-License-Identifier: MPL-2.0
//! Camera capture port.
//!
//! A [`CameraSource`] is acquired with `start` and released with `stop`.
//! Frames are not pushed: the owner polls [`CameraSource::latest_frame`] on
//! its own tick, so a slow UI never queues stale frames.

use crate::domain::frame::CameraFrame;
use futures_util::future::BoxFuture;
use std::fmt;

/// Reasons the camera could not be acquired or stopped delivering frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No capture device was found.
    NoDevice,
    /// The device exists but could not be opened.
    Unavailable(String),
    /// Capture started and then failed.
    Capture(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoDevice => write!(f, "no camera found"),
            CameraError::Unavailable(msg) => write!(f, "camera unavailable: {msg}"),
            CameraError::Capture(msg) => write!(f, "camera capture failed: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Live video input.
pub trait CameraSource: Send + Sync {
    /// Acquires the device. Resolves once the first frame can be expected,
    /// or with the acquisition failure. Starting an active source is a no-op.
    fn start(&self) -> BoxFuture<'static, Result<(), CameraError>>;

    /// Releases the device. Stopping an inactive source is a no-op.
    fn stop(&self);

    /// Whether the device is currently held.
    fn is_active(&self) -> bool;

    /// Most recent frame, if capture has produced one.
    fn latest_frame(&self) -> Option<CameraFrame>;

    /// Failure that ended an active capture, cleared by the next `start`.
    fn take_error(&self) -> Option<CameraError>;
}
