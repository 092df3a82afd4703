// SPDX-License-Identifier: MPL-2.0
//! Whole-clip audio decoding.
//!
//! Narration clips are a few seconds long, so each one is decoded in a single
//! pass into an interleaved `f32` buffer already resampled to the output
//! device format.

use crate::error::{Error, Result};
use crate::infrastructure::audio_output::AudioOutputConfig;
use std::path::Path;

/// Decodes `path` into interleaved samples matching `output`.
///
/// # Errors
///
/// Returns [`Error::Media`] when the file cannot be opened, has no audio
/// stream or fails to decode.
pub fn decode_clip(path: &Path, output: AudioOutputConfig) -> Result<Vec<f32>> {
    super::init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(path)
        .map_err(|e| Error::Media(format!("Failed to open clip: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| Error::Media("No audio stream found".to_string()))?;
    let audio_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| Error::Media(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| Error::Media(format!("Failed to create audio decoder: {e}")))?;

    let output_channels = output.channels.clamp(1, 2);
    let output_channel_layout = match output_channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_channel_layout,
        output.sample_rate,
    )
    .map_err(|e| Error::Media(format!("Failed to create resampler: {e}")))?;

    let mut samples = Vec::new();

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!(clip = %path.display(), error = %e, "skipping undecodable packet");
            continue;
        }
        drain_frames(&mut decoder, &mut resampler, output_channels, &mut samples)?;
    }

    decoder.send_eof()?;
    drain_frames(&mut decoder, &mut resampler, output_channels, &mut samples)?;

    let mut tail = ffmpeg_next::frame::Audio::empty();
    if resampler.flush(&mut tail).is_ok() && tail.samples() > 0 {
        samples.extend(extract_samples(&tail, output_channels));
    }

    if samples.is_empty() {
        return Err(Error::Media(format!(
            "Clip produced no audio: {}",
            path.display()
        )));
    }
    Ok(samples)
}

/// Moves every frame the decoder has ready through the resampler.
fn drain_frames(
    decoder: &mut ffmpeg_next::decoder::Audio,
    resampler: &mut ffmpeg_next::software::resampling::Context,
    channels: u16,
    samples: &mut Vec<f32>,
) -> Result<()> {
    let mut decoded = ffmpeg_next::frame::Audio::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        let mut resampled = ffmpeg_next::frame::Audio::empty();
        resampler.run(&decoded, &mut resampled)?;
        samples.extend(extract_samples(&resampled, channels));
    }
    Ok(())
}

/// Reads packed `f32` samples out of a resampled frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16) -> Vec<f32> {
    let sample_count = frame.samples() * channels as usize;
    frame
        .data(0)
        .chunks_exact(4)
        .take(sample_count)
        .map(|bytes| f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_clip_is_a_media_error() {
        let dir = tempdir().expect("temp dir");
        let config = AudioOutputConfig {
            sample_rate: 48_000,
            channels: 2,
        };

        let result = decode_clip(&dir.path().join("audio_01.mp3"), config);

        assert!(matches!(result, Err(Error::Media(_))));
    }

    #[test]
    fn non_audio_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("audio_02.mp3");
        std::fs::write(&path, b"definitely not an mp3").expect("write");
        let config = AudioOutputConfig {
            sample_rate: 44_100,
            channels: 1,
        };

        assert!(decode_clip(&path, config).is_err());
    }
}
