// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the orchestrator and the views
//! remain independent of audio devices, cameras and remote services.
//!
//! # Available Ports
//!
//! - [`narration`]: The single narration audio output
//! - [`camera`]: Live camera capture for the text view
//! - [`submission`]: Form delivery and image hosting
//! - [`progress`]: Form progress snapshot storage
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - Remote and device operations return boxed futures that callers wrap in
//!   an Iced `Task`; local operations are plain `Result` methods

pub mod camera;
pub mod narration;
pub mod progress;
pub mod submission;

pub use camera::{CameraError, CameraSource};
pub use narration::{NarrationSink, PlaybackError};
pub use progress::{ProgressError, ProgressStore};
pub use submission::{
    hosted_urls, FormSubmitter, ImageHost, SubmissionError, SubmissionReceipt, UploadError,
    UploadOutcome,
};
