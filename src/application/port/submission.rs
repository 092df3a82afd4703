// SPDX-License-Identifier: MPL-2.0
//! Form delivery and image hosting ports.
//!
//! Both collaborators are remote services. Their futures never panic and
//! never time out on their own; every failure comes back as a value the
//! form turns into inline state.

use crate::domain::form::PreparedSubmission;
use futures_util::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Submission
// =============================================================================

/// Successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionReceipt {
    /// Optional message from the service.
    pub message: Option<String>,
}

/// Why a submission was not delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Credentials are missing from the configuration.
    NotConfigured,
    /// The service answered with a failure; the message is shown as is.
    Rejected(String),
    /// The request did not reach the service or the answer was unreadable.
    Transport(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::NotConfigured => write!(f, "submission service is not configured"),
            SubmissionError::Rejected(msg) => write!(f, "{msg}"),
            SubmissionError::Transport(msg) => write!(f, "submission failed: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Delivers the prepared form.
pub trait FormSubmitter: Send + Sync {
    fn submit(
        &self,
        submission: PreparedSubmission,
    ) -> BoxFuture<'static, Result<SubmissionReceipt, SubmissionError>>;
}

// =============================================================================
// Image hosting
// =============================================================================

/// Why one file was not uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// No hosting account is configured.
    NotConfigured,
    /// The local file could not be read.
    Unreadable(String),
    /// The host refused the file.
    Rejected(String),
    /// Network failure.
    Transport(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NotConfigured => write!(f, "image hosting is not configured"),
            UploadError::Unreadable(msg) => write!(f, "file unreadable: {msg}"),
            UploadError::Rejected(msg) => write!(f, "upload rejected: {msg}"),
            UploadError::Transport(msg) => write!(f, "upload failed: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Result for one file of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub path: PathBuf,
    /// Hosted URL, or the reason this file failed.
    pub result: Result<String, UploadError>,
}

/// Uploads local images and returns their hosted URLs.
///
/// The returned vector has one outcome per input file, in input order. A
/// failure for one file does not stop the others.
pub trait ImageHost: Send + Sync {
    fn upload(&self, files: Vec<PathBuf>) -> BoxFuture<'static, Vec<UploadOutcome>>;
}

/// URLs of the successful uploads, in input order.
#[must_use]
pub fn hosted_urls(outcomes: &[UploadOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_submission_displays_service_message_verbatim() {
        let err = SubmissionError::Rejected("x".into());
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn hosted_urls_skip_failures_and_keep_order() {
        let outcomes = vec![
            UploadOutcome {
                path: "a.jpg".into(),
                result: Ok("https://host/a".into()),
            },
            UploadOutcome {
                path: "b.jpg".into(),
                result: Err(UploadError::Rejected("too large".into())),
            },
            UploadOutcome {
                path: "c.jpg".into(),
                result: Ok("https://host/c".into()),
            },
        ];

        assert_eq!(hosted_urls(&outcomes), vec!["https://host/a", "https://host/c"]);
    }
}
