// SPDX-License-Identifier: MPL-2.0
//! Contribution delivery: upload the chosen images, then submit the form.
//!
//! Upload failures are per file and never stop the submission; only the
//! submission result decides whether the contribution went through.

use crate::application::port::{
    hosted_urls, FormSubmitter, ImageHost, SubmissionError, SubmissionReceipt,
};
use crate::domain::form::{FormFields, PreparedSubmission};
use std::path::PathBuf;
use std::sync::Arc;

/// What happened to one contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionReport {
    /// Number of images the visitor chose.
    pub images: usize,
    /// Images the host did not accept.
    pub failed_uploads: usize,
    pub result: Result<SubmissionReceipt, SubmissionError>,
}

impl ContributionReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Uploads `files` through `host`, then submits `fields` with the hosted
/// URLs through `submitter`.
pub async fn deliver(
    host: Arc<dyn ImageHost>,
    submitter: Arc<dyn FormSubmitter>,
    fields: FormFields,
    files: Vec<PathBuf>,
    timestamp: String,
) -> ContributionReport {
    let images = files.len();

    let (urls, failed_uploads) = if files.is_empty() {
        (Vec::new(), 0)
    } else {
        let outcomes = host.upload(files).await;
        let urls = hosted_urls(&outcomes);
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            tracing::warn!(failed, total = images, "some images were not uploaded");
        }
        (urls, failed)
    };

    let prepared = PreparedSubmission::prepare(&fields, images, urls, timestamp);
    let result = submitter.submit(prepared).await;
    match &result {
        Ok(_) => tracing::info!(images, "contribution submitted"),
        Err(err) => tracing::warn!(%err, "contribution rejected"),
    }

    ContributionReport {
        images,
        failed_uploads,
        result,
    }
}
