// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal.
//!
//! The output holds one clip at a time. `play` replaces whatever is queued,
//! `stop` clears it, so two clips can never overlap.
//!
//! `cpal::Stream` is not `Send` on every platform: an [`AudioOutput`] must be
//! created and used on the same thread.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Sample rate and channel count clips must be decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioOutputConfig {
    pub sample_rate: u32,
    /// Channels of the decoded buffer (1 or 2). Extra device channels get
    /// silence.
    pub channels: u16,
}

/// State shared with the device callback.
struct SharedState {
    /// Queued interleaved samples.
    buffer: Mutex<VecDeque<f32>>,
    /// Playback gain (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,
}

impl SharedState {
    fn new(volume: f32) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::new()),
            volume_bits: AtomicU32::new(volume.to_bits()),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn replace(&self, samples: Vec<f32>) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
            buffer.extend(samples);
        }
    }

    fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn remaining(&self) -> usize {
        self.buffer.lock().map_or(0, |buffer| buffer.len())
    }

    /// Fills one device buffer of `device_channels` interleaved channels
    /// from `source_channels` queued channels.
    fn fill<T: cpal::SizedSample + cpal::FromSample<f32>>(
        &self,
        data: &mut [T],
        device_channels: usize,
        source_channels: usize,
    ) {
        let volume = self.volume();
        let Ok(mut buffer) = self.buffer.lock() else {
            data.iter_mut()
                .for_each(|sample| *sample = T::from_sample(0.0f32));
            return;
        };

        for frame in data.chunks_mut(device_channels.max(1)) {
            let mut source = [0.0f32; 2];
            for slot in source.iter_mut().take(source_channels) {
                *slot = buffer.pop_front().unwrap_or(0.0);
            }
            for (channel, sample) in frame.iter_mut().enumerate() {
                let value = match (source_channels, channel) {
                    (1, _) => source[0],
                    (_, 0 | 1) => source[channel],
                    _ => 0.0,
                };
                // Slightly below 1.0 so the i16 conversion cannot overflow.
                *sample = T::from_sample((value * volume).clamp(-1.0, 0.999_999_9));
            }
        }
    }
}

/// Audio output stream on the default device.
pub struct AudioOutput {
    shared: Arc<SharedState>,
    config: AudioOutputConfig,
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Media`] if no output device is found, if the device
    /// configuration cannot be retrieved, or if the stream fails to start.
    pub fn new(volume: f32) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Media("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Media(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate();
        let device_channels = supported_config.channels();
        let config = AudioOutputConfig {
            sample_rate,
            channels: device_channels.clamp(1, 2),
        };

        let shared = Arc::new(SharedState::new(volume.clamp(0.0, 1.0)));
        let sample_format = supported_config.sample_format();
        let stream_config: cpal::StreamConfig = supported_config.into();

        let stream = match sample_format {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &stream_config, &shared, config.channels)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &stream_config, &shared, config.channels)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &stream_config, &shared, config.channels)?
            }
            _ => return Err(Error::Media("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Media(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            shared,
            config,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        stream_config: &cpal::StreamConfig,
        shared: &Arc<SharedState>,
        source_channels: u16,
    ) -> Result<cpal::Stream> {
        let shared = Arc::clone(shared);
        let device_channels = usize::from(stream_config.channels);
        let source_channels = usize::from(source_channels);

        device
            .build_output_stream(
                stream_config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    shared.fill(data, device_channels, source_channels);
                },
                |err| {
                    tracing::warn!(error = %err, "audio output error");
                },
                None,
            )
            .map_err(|e| Error::Media(format!("Failed to build audio stream: {e}")))
    }

    /// Format clips must be decoded to.
    #[must_use]
    pub fn config(&self) -> AudioOutputConfig {
        self.config
    }

    /// Replaces the queued clip with `samples`.
    pub fn play(&self, samples: Vec<f32>) {
        self.shared.replace(samples);
    }

    /// Drops the queued clip.
    pub fn stop(&self) {
        self.shared.clear();
    }

    /// Whether nothing is left to play.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.shared.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn replace_discards_previous_clip() {
        let state = SharedState::new(1.0);
        state.replace(vec![0.1; 8]);
        state.replace(vec![0.2; 4]);
        assert_eq!(state.remaining(), 4);

        state.clear();
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn mono_source_is_copied_to_every_device_channel() {
        let state = SharedState::new(1.0);
        state.replace(vec![0.5, -0.25]);
        let mut data = [0.0f32; 4];

        state.fill(&mut data, 2, 1);

        assert_relative_eq!(data[0], 0.5);
        assert_relative_eq!(data[1], 0.5);
        assert_relative_eq!(data[2], -0.25);
        assert_relative_eq!(data[3], -0.25);
    }

    #[test]
    fn extra_device_channels_get_silence() {
        let state = SharedState::new(1.0);
        state.replace(vec![0.3, 0.4]);
        let mut data = [1.0f32; 4];

        state.fill(&mut data, 4, 2);

        assert_relative_eq!(data[0], 0.3);
        assert_relative_eq!(data[1], 0.4);
        assert_relative_eq!(data[2], 0.0);
        assert_relative_eq!(data[3], 0.0);
    }

    #[test]
    fn exhausted_buffer_outputs_silence_and_volume_applies() {
        let state = SharedState::new(0.5);
        state.replace(vec![0.8]);
        let mut data = [1.0f32; 2];

        state.fill(&mut data, 1, 1);

        assert_relative_eq!(data[0], 0.4);
        assert_relative_eq!(data[1], 0.0);
    }
}
