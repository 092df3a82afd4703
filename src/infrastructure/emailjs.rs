// SPDX-License-Identifier: MPL-2.0
//! Form delivery through the `EmailJS` REST API.
//!
//! The request carries flat template parameters for the mail template plus a
//! pretty-printed JSON copy of the whole submission in `message`.

use crate::app::config::SubmissionConfig;
use crate::application::port::{FormSubmitter, SubmissionError, SubmissionReceipt};
use crate::domain::form::PreparedSubmission;
use futures_util::future::{self, BoxFuture, FutureExt};
use serde_json::{json, Value};
use std::time::Duration;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown to the visitor for every failed delivery.
pub const FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";

const NOT_SPECIFIED: &str = "Not specified";
const NOT_PROVIDED: &str = "Not provided";
const ANONYMOUS: &str = "Anonymous";
const NO_EMAIL: &str = "no-email@provided.com";
const NO_IMAGES: &str = "No images were uploaded";

#[derive(Debug, Clone)]
struct Credentials {
    service_id: String,
    template_id: String,
    public_key: String,
}

/// `EmailJS` submitter. Without credentials every submission fails with
/// [`SubmissionError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct EmailJsSubmitter {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl EmailJsSubmitter {
    #[must_use]
    pub fn new(config: &SubmissionConfig) -> Self {
        let credentials = config.is_configured().then(|| Credentials {
            service_id: config.service_id.clone().unwrap_or_default(),
            template_id: config.template_id.clone().unwrap_or_default(),
            public_key: config.public_key.clone().unwrap_or_default(),
        });
        if credentials.is_none() {
            tracing::info!("form submission is not configured");
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self { http, credentials }
    }
}

impl FormSubmitter for EmailJsSubmitter {
    fn submit(
        &self,
        submission: PreparedSubmission,
    ) -> BoxFuture<'static, Result<SubmissionReceipt, SubmissionError>> {
        let Some(credentials) = self.credentials.clone() else {
            return future::ready(Err(SubmissionError::NotConfigured)).boxed();
        };
        let http = self.http.clone();

        async move {
            let body = json!({
                "service_id": credentials.service_id,
                "template_id": credentials.template_id,
                "user_id": credentials.public_key,
                "template_params": template_params(&submission),
            });

            let response = http
                .post(SEND_URL)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "form submission request failed");
                    SubmissionError::Rejected(FAILURE_MESSAGE.to_string())
                })?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if status.is_success() {
                tracing::info!(images = submission.images_count, "form submitted");
                Ok(SubmissionReceipt {
                    message: (!text.is_empty()).then_some(text),
                })
            } else {
                tracing::warn!(%status, body = %text, "form submission rejected");
                Err(SubmissionError::Rejected(FAILURE_MESSAGE.to_string()))
            }
        }
        .boxed()
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Numbered URL list, one per line.
fn url_list(urls: &[String]) -> String {
    if urls.is_empty() {
        return NO_IMAGES.to_string();
    }
    urls.iter()
        .enumerate()
        .map(|(i, url)| format!("{}. {url}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full submission as the JSON document embedded in the mail.
fn submission_document(submission: &PreparedSubmission) -> Value {
    json!({
        "name": submission.name,
        "email": submission.email,
        "origin": submission.origin,
        "customPrompt": submission.custom_prompt,
        "payment": submission.payment,
        "paypal": submission.paypal,
        "trainAi": submission.train_ai,
        "publicly": submission.publicly,
        "imagesCount": submission.images_count,
        "cloudinaryUrls": submission.hosted_urls,
        "cloudinaryUrlsCount": submission.hosted_urls.len(),
        "timestamp": submission.timestamp,
    })
}

fn template_params(submission: &PreparedSubmission) -> Value {
    let message = serde_json::to_string_pretty(&submission_document(submission))
        .unwrap_or_default();

    json!({
        "from_name": or_default(&submission.name, ANONYMOUS),
        "from_email": or_default(&submission.email, NO_EMAIL),
        "origin": or_default(&submission.origin, NOT_SPECIFIED),
        "custom_prompt": or_default(&submission.custom_prompt, NOT_PROVIDED),
        "payment": or_default(&submission.payment, NOT_SPECIFIED),
        "train_ai": or_default(&submission.train_ai, NOT_SPECIFIED),
        "publicly": or_default(&submission.publicly, NOT_SPECIFIED),
        "images_count": submission.images_count.to_string(),
        "cloudinary_urls_count": submission.hosted_urls.len().to_string(),
        "cloudinary_urls": url_list(&submission.hosted_urls),
        "timestamp": submission.timestamp,
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> PreparedSubmission {
        PreparedSubmission {
            name: String::new(),
            email: "ana@example.org".into(),
            origin: "Lisbon".into(),
            custom_prompt: String::new(),
            payment: "yes".into(),
            paypal: "ana@pay.example".into(),
            train_ai: "no".into(),
            publicly: "yes".into(),
            images_count: 2,
            hosted_urls: vec!["https://img/1".into(), "https://img/2".into()],
            timestamp: "2025-03-01T10:00:00+00:00".into(),
        }
    }

    #[test]
    fn empty_fields_use_placeholders() {
        let params = template_params(&submission());

        assert_eq!(params["from_name"], "Anonymous");
        assert_eq!(params["from_email"], "ana@example.org");
        assert_eq!(params["custom_prompt"], "Not provided");
        assert_eq!(params["origin"], "Lisbon");
        assert_eq!(params["images_count"], "2");
        assert_eq!(params["cloudinary_urls_count"], "2");
    }

    #[test]
    fn urls_are_numbered_lines() {
        let params = template_params(&submission());
        assert_eq!(params["cloudinary_urls"], "1. https://img/1\n2. https://img/2");
        assert_eq!(url_list(&[]), NO_IMAGES);
    }

    #[test]
    fn message_embeds_the_full_submission() {
        let params = template_params(&submission());
        let message = params["message"].as_str().expect("message string");
        let document: Value = serde_json::from_str(message).expect("valid json");

        assert_eq!(document["paypal"], "ana@pay.example");
        assert_eq!(document["cloudinaryUrlsCount"], 2);
    }

    #[tokio::test]
    async fn unconfigured_submitter_refuses() {
        let submitter = EmailJsSubmitter::new(&SubmissionConfig::default());
        let result = submitter.submit(submission()).await;
        assert_eq!(result, Err(SubmissionError::NotConfigured));
    }
}
