// SPDX-License-Identifier: MPL-2.0
//! Contribution form model.
//!
//! The form walks through a fixed sequence of steps. Each forward move is
//! gated by a precondition that lives here, next to the data it inspects,
//! so the view only asks "may I advance?" and never re-implements the rule.

use super::catalog::PROMPT_COUNT;
use std::path::PathBuf;

/// Number of image slots offered on the upload step, one per prompt.
pub const IMAGE_SLOT_COUNT: usize = PROMPT_COUNT;

// =============================================================================
// Steps
// =============================================================================

/// Position in the form flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    /// Intro loader typing the title.
    #[default]
    Loading,
    /// Step 1: scripted introduction.
    Intro,
    /// Step 2: image slots.
    Upload,
    /// Step 3: personal details and consent.
    Details,
    /// Step 4: thank-you text. Terminal for the session.
    Completed,
}

impl FormStep {
    /// Number shown by the step indicator, `None` while loading.
    #[must_use]
    pub fn number(self) -> Option<u8> {
        match self {
            FormStep::Loading => None,
            FormStep::Intro => Some(1),
            FormStep::Upload => Some(2),
            FormStep::Details => Some(3),
            FormStep::Completed => Some(4),
        }
    }

    /// Total number of numbered steps.
    pub const TOTAL: u8 = 4;
}

// =============================================================================
// Fields
// =============================================================================

/// Yes/no answer to a form question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Lowercase wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }
}

/// Values entered on the details step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// 2.1 name or nickname.
    pub name: String,
    /// 2.2 e-mail.
    pub email: String,
    /// 2.3 place of origin.
    pub origin: String,
    /// 2.4 the contributor's own prompt.
    pub custom_prompt: String,
    /// 2.5 whether the contributor wants the participation fee.
    pub payment: Option<Answer>,
    /// PayPal address, only meaningful when `payment` is yes.
    pub paypal: String,
    /// 2.6 consent to training (required).
    pub train_ai: Option<Answer>,
    /// 2.7 consent to public display (required).
    pub publicly: Option<Answer>,
}

impl FormFields {
    /// Whether every required question has an answer.
    #[must_use]
    pub fn required_present(&self) -> bool {
        self.train_ai.is_some() && self.publicly.is_some()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Best-effort progress snapshot, saved right before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    /// Chosen image per slot, `IMAGE_SLOT_COUNT` entries.
    pub images: Vec<Option<PathBuf>>,
    /// Milliseconds since the Unix epoch.
    pub saved_at_millis: i64,
}

impl FormSnapshot {
    /// Number of filled image slots.
    #[must_use]
    pub fn filled_slots(&self) -> usize {
        self.images.iter().filter(|slot| slot.is_some()).count()
    }
}

// =============================================================================
// Submission payload
// =============================================================================

/// Field values handed to the submission collaborator.
///
/// Empty answers stay empty here; placeholders such as "Not specified" are
/// a concern of the adapter that formats the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub name: String,
    pub email: String,
    pub origin: String,
    pub custom_prompt: String,
    pub payment: String,
    pub paypal: String,
    pub train_ai: String,
    pub publicly: String,
    pub images_count: usize,
    pub hosted_urls: Vec<String>,
    /// RFC 3339 timestamp of preparation.
    pub timestamp: String,
}

impl PreparedSubmission {
    /// Builds the payload from the form state and the hosting results.
    #[must_use]
    pub fn prepare(
        fields: &FormFields,
        images_count: usize,
        hosted_urls: Vec<String>,
        timestamp: String,
    ) -> Self {
        let answer = |value: Option<Answer>| value.map(Answer::as_str).unwrap_or_default().to_string();
        let paypal = if fields.payment == Some(Answer::Yes) {
            fields.paypal.trim().to_string()
        } else {
            String::new()
        };

        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            origin: fields.origin.trim().to_string(),
            custom_prompt: fields.custom_prompt.trim().to_string(),
            payment: answer(fields.payment),
            paypal,
            train_ai: answer(fields.train_ai),
            publicly: answer(fields.publicly),
            images_count,
            hosted_urls,
            timestamp,
        }
    }
}
