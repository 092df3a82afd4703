// SPDX-License-Identifier: MPL-2.0
//! Narration sink backed by cpal and `FFmpeg`.
//!
//! A dedicated `narration` thread owns the [`AudioOutput`] (cpal streams
//! cannot cross threads) and serves play/stop commands in order. Each `play`
//! stops the current clip first, so at most one clip is ever audible.

use crate::application::port::{NarrationSink, PlaybackError};
use crate::infrastructure::audio_output::AudioOutput;
use crate::infrastructure::ffmpeg::decode_clip;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{mpsc, oneshot};

enum Command {
    Play {
        clip: PathBuf,
        reply: oneshot::Sender<Result<(), PlaybackError>>,
    },
    Stop,
}

/// Narration output shared by every view.
#[derive(Debug)]
pub struct CpalNarration {
    commands: mpsc::UnboundedSender<Command>,
    unlocked: AtomicBool,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play { clip, .. } => f.debug_struct("Play").field("clip", clip).finish(),
            Command::Stop => f.write_str("Stop"),
        }
    }
}

impl CpalNarration {
    /// Starts the playback worker.
    ///
    /// The device is opened lazily on the worker. A missing device is not an
    /// error here; every later `play` then fails with
    /// [`PlaybackError::NoDevice`].
    #[must_use]
    pub fn spawn(volume: f32) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();

        let spawned = std::thread::Builder::new()
            .name("narration".to_string())
            .spawn(move || run_worker(receiver, volume));
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start narration thread");
        }

        Self::from_sender(commands)
    }

    fn from_sender(commands: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            commands,
            unlocked: AtomicBool::new(false),
        }
    }
}

impl NarrationSink for CpalNarration {
    fn unlock(&self) {
        if !self.unlocked.swap(true, Ordering::SeqCst) {
            tracing::debug!("narration unlocked by user gesture");
        }
    }

    fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::SeqCst)
    }

    fn play(&self, clip: &Path) -> BoxFuture<'static, Result<(), PlaybackError>> {
        if !self.is_unlocked() {
            return future::ready(Err(PlaybackError::Blocked)).boxed();
        }

        let (reply, response) = oneshot::channel();
        let command = Command::Play {
            clip: clip.to_path_buf(),
            reply,
        };
        if self.commands.send(command).is_err() {
            return future::ready(Err(PlaybackError::Closed)).boxed();
        }

        async move { response.await.unwrap_or(Err(PlaybackError::Closed)) }.boxed()
    }

    fn stop(&self) {
        // A closed worker has nothing playing.
        let _ = self.commands.send(Command::Stop);
    }
}

fn run_worker(mut receiver: mpsc::UnboundedReceiver<Command>, volume: f32) {
    let output = match AudioOutput::new(volume) {
        Ok(output) => Some(output),
        Err(e) => {
            tracing::warn!(error = %e, "narration disabled: no audio output");
            None
        }
    };

    while let Some(command) = receiver.blocking_recv() {
        match command {
            Command::Stop => {
                if let Some(output) = &output {
                    output.stop();
                }
            }
            Command::Play { clip, reply } => {
                let result = play_clip(output.as_ref(), &clip);
                if let Err(e) = &result {
                    tracing::debug!(clip = %clip.display(), error = %e, "clip did not start");
                }
                // The requester may have given up waiting.
                let _ = reply.send(result);
            }
        }
    }

    tracing::debug!("narration worker stopped");
}

fn play_clip(output: Option<&AudioOutput>, clip: &Path) -> Result<(), PlaybackError> {
    let output = output.ok_or(PlaybackError::NoDevice)?;
    output.stop();

    if !clip.is_file() {
        return Err(PlaybackError::Missing(clip.to_path_buf()));
    }

    let samples = decode_clip(clip, output.config())
        .map_err(|e| PlaybackError::Decode(e.to_string()))?;
    output.play(samples);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn play_before_unlock_is_blocked() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let sink = CpalNarration::from_sender(sender);

        let result = sink.play(Path::new("audio_01.mp3")).await;

        assert_eq!(result, Err(PlaybackError::Blocked));
        assert!(receiver.try_recv().is_err(), "nothing reaches the worker");
    }

    #[tokio::test]
    async fn unlocked_play_forwards_the_clip() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let sink = CpalNarration::from_sender(sender);
        sink.unlock();
        assert!(sink.is_unlocked());

        let pending = sink.play(Path::new("audio_03.mp3"));
        match receiver.recv().await {
            Some(Command::Play { clip, reply }) => {
                assert_eq!(clip, PathBuf::from("audio_03.mp3"));
                reply.send(Ok(())).expect("reply");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert_eq!(pending.await, Ok(()));
    }

    #[tokio::test]
    async fn dropped_worker_reports_closed() {
        let (sender, receiver) = mpsc::unbounded_channel();
        let sink = CpalNarration::from_sender(sender);
        sink.unlock();
        drop(receiver);

        assert_eq!(
            sink.play(Path::new("audio_01.mp3")).await,
            Err(PlaybackError::Closed)
        );
    }

    #[test]
    fn play_without_device_fails() {
        assert_eq!(
            play_clip(None, Path::new("audio_01.mp3")),
            Err(PlaybackError::NoDevice)
        );
    }
}
