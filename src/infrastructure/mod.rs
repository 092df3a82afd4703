// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `FFmpeg`,
//! cpal, remote HTTP services and the filesystem.
//!
//! # Available Adapters
//!
//! - [`narration`]: Clip playback (implements [`NarrationSink`])
//! - [`ffmpeg`]: Clip decoding and camera capture (implements [`CameraSource`])
//! - [`emailjs`]: Form delivery (implements [`FormSubmitter`])
//! - [`cloudinary`]: Image hosting (implements [`ImageHost`])
//! - [`progress_store`]: Progress snapshot on disk (implements [`ProgressStore`])
//!
//! [`NarrationSink`]: crate::application::port::NarrationSink
//! [`CameraSource`]: crate::application::port::CameraSource
//! [`FormSubmitter`]: crate::application::port::FormSubmitter
//! [`ImageHost`]: crate::application::port::ImageHost
//! [`ProgressStore`]: crate::application::port::ProgressStore

pub mod audio_output;
pub mod cloudinary;
pub mod emailjs;
pub mod ffmpeg;
pub mod narration;
pub mod progress_store;

pub use cloudinary::CloudinaryHost;
pub use emailjs::EmailJsSubmitter;
pub use ffmpeg::{CameraDevice, FfmpegCamera};
pub use narration::CpalNarration;
pub use progress_store::CborProgressStore;
