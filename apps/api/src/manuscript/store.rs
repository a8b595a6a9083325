use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::manuscript::extract::MediaType;

/// The extracted text of the most recent upload, plus what we know about where it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manuscript {
    pub id: Uuid,
    pub file_name: Option<String>,
    pub media_type: MediaType,
    /// Number of Unicode scalar values in `text`. This differs from a UTF-16 length for
    /// characters outside the BMP: an emoji counts once here, twice in a browser string.
    pub length: usize,
    pub uploaded_at: DateTime<Utc>,
    #[serde(skip)]
    pub text: String,
}

impl Manuscript {
    pub fn new(text: String, file_name: Option<String>, media_type: MediaType) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            media_type,
            length: text.chars().count(),
            uploaded_at: Utc::now(),
            text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Single process-wide slot holding at most one manuscript.
///
/// Writes replace the slot wholesale (last write wins). Readers get an `Arc` snapshot, so a
/// generation that already started keeps the text it began with even if a new upload lands.
#[derive(Clone, Default)]
pub struct ManuscriptStore {
    slot: Arc<RwLock<Option<Arc<Manuscript>>>>,
}

impl ManuscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored manuscript. An empty text leaves the store empty, since nothing
    /// could be generated from it anyway.
    pub async fn put(&self, manuscript: Manuscript) -> Arc<Manuscript> {
        let manuscript = Arc::new(manuscript);
        let mut slot = self.slot.write().await;
        *slot = if manuscript.is_empty() {
            None
        } else {
            Some(Arc::clone(&manuscript))
        };
        manuscript
    }

    pub async fn get(&self) -> Option<Arc<Manuscript>> {
        self.slot.read().await.clone()
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}
