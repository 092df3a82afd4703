// SPDX-License-Identifier: MPL-2.0
//! Form progress snapshot stored as CBOR in the data directory.
//!
//! The snapshot lives next to nothing else the user edits, so it uses the
//! binary format rather than `settings.toml`.

use crate::app::paths;
use crate::application::port::{ProgressError, ProgressStore};
use crate::domain::form::{Answer, FormFields, FormSnapshot, IMAGE_SLOT_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

/// Snapshot file name within the app data directory.
const PROGRESS_FILE: &str = "form_progress.cbor";

/// On-disk shape of a [`FormSnapshot`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSnapshot {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    custom_prompt: String,
    #[serde(default)]
    payment: Option<String>,
    #[serde(default)]
    paypal: String,
    #[serde(default)]
    train_ai: Option<String>,
    #[serde(default)]
    publicly: Option<String>,
    #[serde(default)]
    images: Vec<Option<PathBuf>>,
    #[serde(default)]
    saved_at_millis: i64,
}

fn answer_to_stored(answer: Option<Answer>) -> Option<String> {
    answer.map(|answer| answer.as_str().to_string())
}

fn answer_from_stored(value: Option<&str>) -> Option<Answer> {
    match value? {
        "yes" => Some(Answer::Yes),
        "no" => Some(Answer::No),
        _ => None,
    }
}

impl From<&FormSnapshot> for StoredSnapshot {
    fn from(snapshot: &FormSnapshot) -> Self {
        let fields = &snapshot.fields;
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            origin: fields.origin.clone(),
            custom_prompt: fields.custom_prompt.clone(),
            payment: answer_to_stored(fields.payment),
            paypal: fields.paypal.clone(),
            train_ai: answer_to_stored(fields.train_ai),
            publicly: answer_to_stored(fields.publicly),
            images: snapshot.images.clone(),
            saved_at_millis: snapshot.saved_at_millis,
        }
    }
}

impl From<StoredSnapshot> for FormSnapshot {
    fn from(stored: StoredSnapshot) -> Self {
        let mut images = stored.images;
        images.resize(IMAGE_SLOT_COUNT, None);

        Self {
            fields: FormFields {
                name: stored.name,
                email: stored.email,
                origin: stored.origin,
                custom_prompt: stored.custom_prompt,
                payment: answer_from_stored(stored.payment.as_deref()),
                paypal: stored.paypal,
                train_ai: answer_from_stored(stored.train_ai.as_deref()),
                publicly: answer_from_stored(stored.publicly.as_deref()),
            },
            images,
            saved_at_millis: stored.saved_at_millis,
        }
    }
}

/// Single-slot CBOR snapshot store.
#[derive(Debug, Clone)]
pub struct CborProgressStore {
    path: Option<PathBuf>,
}

impl CborProgressStore {
    /// Store in the resolved app data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::in_dir(None)
    }

    /// Store in `base_dir`, or the resolved data directory when `None`.
    #[must_use]
    pub fn in_dir(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PROGRESS_FILE);
            path
        });
        Self { path }
    }

    fn path(&self) -> Result<&PathBuf, ProgressError> {
        self.path.as_ref().ok_or(ProgressError::Unavailable)
    }
}

impl Default for CborProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for CborProgressStore {
    fn load(&self) -> Result<Option<FormSnapshot>, ProgressError> {
        let path = self.path()?;
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProgressError::Io(e.to_string())),
        };

        let stored: StoredSnapshot = ciborium::from_reader(BufReader::new(file))
            .map_err(|e| ProgressError::Corrupt(e.to_string()))?;
        Ok(Some(stored.into()))
    }

    fn save(&self, snapshot: &FormSnapshot) -> Result<(), ProgressError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ProgressError::Io(e.to_string()))?;
        }

        let file = fs::File::create(path).map_err(|e| ProgressError::Io(e.to_string()))?;
        ciborium::into_writer(&StoredSnapshot::from(snapshot), BufWriter::new(file))
            .map_err(|e| ProgressError::Corrupt(e.to_string()))?;
        tracing::debug!(path = %path.display(), "form progress saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), ProgressError> {
        let path = self.path()?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProgressError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn snapshot() -> FormSnapshot {
        let mut images = vec![None; IMAGE_SLOT_COUNT];
        images[0] = Some(PathBuf::from("/photos/a.jpg"));
        images[44] = Some(PathBuf::from("/photos/z.jpg"));
        FormSnapshot {
            fields: FormFields {
                name: "Ana".into(),
                payment: Some(Answer::Yes),
                paypal: "ana@pay.example".into(),
                train_ai: Some(Answer::No),
                ..FormFields::default()
            },
            images,
            saved_at_millis: 1_700_000_000_000,
        }
    }

    #[test]
    fn empty_store_loads_nothing() {
        let dir = tempdir().expect("temp dir");
        let store = CborProgressStore::in_dir(Some(dir.path().to_path_buf()));
        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn saved_snapshot_is_restored() {
        let dir = tempdir().expect("temp dir");
        let store = CborProgressStore::in_dir(Some(dir.path().to_path_buf()));

        store.save(&snapshot()).expect("save");
        let loaded = store.load().expect("load").expect("snapshot present");

        assert_eq!(loaded, snapshot());
        assert_eq!(loaded.filled_slots(), 2);
    }

    #[test]
    fn clear_removes_snapshot_and_is_idempotent() {
        let dir = tempdir().expect("temp dir");
        let store = CborProgressStore::in_dir(Some(dir.path().to_path_buf()));
        store.save(&snapshot()).expect("save");

        store.clear().expect("clear");
        store.clear().expect("second clear");

        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(PROGRESS_FILE), b"\xff\x00garbage").expect("write");
        let store = CborProgressStore::in_dir(Some(dir.path().to_path_buf()));

        assert!(matches!(store.load(), Err(ProgressError::Corrupt(_))));
    }

    #[test]
    fn short_image_list_is_padded_to_every_slot() {
        let stored = StoredSnapshot {
            images: vec![Some(PathBuf::from("a.jpg"))],
            ..StoredSnapshot::default()
        };
        let snapshot = FormSnapshot::from(stored);
        assert_eq!(snapshot.images.len(), IMAGE_SLOT_COUNT);
        assert_eq!(snapshot.filled_slots(), 1);
    }
}
