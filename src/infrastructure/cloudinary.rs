// SPDX-License-Identifier: MPL-2.0
//! Image hosting through Cloudinary unsigned uploads.
//!
//! Files of a batch are uploaded concurrently. Each file gets its own
//! outcome so a single refused image never hides the others.

use crate::app::config::HostingConfig;
use crate::application::port::{ImageHost, UploadError, UploadOutcome};
use futures_util::future::{self, BoxFuture, FutureExt};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct Account {
    cloud_name: String,
    upload_preset: String,
    folder: String,
}

impl Account {
    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Cloudinary client. Without a cloud name every file fails with
/// [`UploadError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct CloudinaryHost {
    http: reqwest::Client,
    account: Option<Account>,
}

impl CloudinaryHost {
    #[must_use]
    pub fn new(config: &HostingConfig) -> Self {
        let account = config.is_configured().then(|| Account {
            cloud_name: config.cloud_name.clone().unwrap_or_default(),
            upload_preset: config.upload_preset().to_string(),
            folder: config.folder().to_string(),
        });
        if account.is_none() {
            tracing::info!("image hosting is not configured");
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self { http, account }
    }
}

impl ImageHost for CloudinaryHost {
    fn upload(&self, files: Vec<PathBuf>) -> BoxFuture<'static, Vec<UploadOutcome>> {
        let Some(account) = self.account.clone() else {
            let outcomes = files
                .into_iter()
                .map(|path| UploadOutcome {
                    path,
                    result: Err(UploadError::NotConfigured),
                })
                .collect();
            return future::ready(outcomes).boxed();
        };

        let http = self.http.clone();
        let batch = chrono::Utc::now().timestamp_millis();

        async move {
            let uploads = files.into_iter().enumerate().map(|(index, path)| {
                let http = http.clone();
                let account = account.clone();
                async move {
                    let public_id = public_id(batch, index);
                    let result = upload_one(&http, &account, &path, public_id).await;
                    if let Err(e) = &result {
                        tracing::warn!(file = %path.display(), error = %e, "image upload failed");
                    }
                    UploadOutcome { path, result }
                }
            });
            future::join_all(uploads).await
        }
        .boxed()
    }
}

fn public_id(batch_millis: i64, index: usize) -> String {
    format!("image_{batch_millis}_{index}")
}

async fn upload_one(
    http: &reqwest::Client,
    account: &Account,
    path: &Path,
    public_id: String,
) -> Result<String, UploadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| UploadError::Unreadable(e.to_string()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().into_owned());

    let form = Form::new()
        .part("file", Part::bytes(bytes).file_name(file_name))
        .text("upload_preset", account.upload_preset.clone())
        .text("folder", account.folder.clone())
        .text("public_id", public_id);

    let response = http
        .post(account.upload_url())
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map_or_else(|_| format!("HTTP error! status: {status}"), |body| body.error.message);
        return Err(UploadError::Rejected(message));
    }

    response
        .json::<UploadResponse>()
        .await
        .map(|body| body.secure_url)
        .map_err(|e| UploadError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ids_share_the_batch_stamp() {
        assert_eq!(public_id(1_700_000_000_000, 0), "image_1700000000000_0");
        assert_eq!(public_id(1_700_000_000_000, 12), "image_1700000000000_12");
    }

    #[test]
    fn upload_url_targets_the_cloud() {
        let account = Account {
            cloud_name: "demo".into(),
            upload_preset: "ml_default".into(),
            folder: "before-life-after-life".into(),
        };
        assert_eq!(
            account.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[tokio::test]
    async fn unconfigured_host_fails_every_file() {
        let host = CloudinaryHost::new(&HostingConfig::default());
        let outcomes = host
            .upload(vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")])
            .await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|outcome| outcome.result == Err(UploadError::NotConfigured)));
        assert_eq!(outcomes[1].path, PathBuf::from("b.jpg"));
    }

    #[tokio::test]
    async fn unreadable_file_is_reported_per_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let account = Account {
            cloud_name: "demo".into(),
            upload_preset: "ml_default".into(),
            folder: "f".into(),
        };

        let result = upload_one(
            &reqwest::Client::new(),
            &account,
            &dir.path().join("missing.jpg"),
            "image_0_0".into(),
        )
        .await;

        assert!(matches!(result, Err(UploadError::Unreadable(_))));
    }

    #[test]
    fn error_body_message_is_extracted() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":{"message":"Invalid image file"}}"#).expect("json");
        assert_eq!(body.error.message, "Invalid image file");
    }
}
