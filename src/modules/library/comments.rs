use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

use super::store::KeyValueStore;

/// A user comment with its 1-10 rating, keyed by entity id plus creation
/// time. Comments are append-only per entity, listed newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentEntry {
    pub mal_id: i64,
    pub text: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

pub struct CommentsService {
    store: Arc<dyn KeyValueStore>,
}

impl CommentsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(mal_id: i64) -> String {
        format!("comments:{}", mal_id)
    }

    pub async fn list(&self, mal_id: i64) -> AppResult<Vec<CommentEntry>> {
        let records = self.store.read_list(&Self::key(mal_id)).await?;
        let mut comments = Vec::with_capacity(records.len());
        for record in records {
            comments.push(serde_json::from_value(record)?);
        }
        Ok(comments)
    }

    /// Prepend a new comment. Text must be non-empty, rating within 1-10.
    pub async fn add(&self, mal_id: i64, text: &str, rating: u8) -> AppResult<CommentEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "Comment text cannot be empty".to_string(),
            ));
        }
        if !(1..=10).contains(&rating) {
            return Err(AppError::InvalidInput(
                "Rating must be between 1 and 10".to_string(),
            ));
        }

        let entry = CommentEntry {
            mal_id,
            text: text.to_string(),
            rating,
            created_at: Utc::now(),
        };

        // Newest first
        let mut comments = self.list(mal_id).await?;
        comments.insert(0, entry.clone());

        let records = comments
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.write_list(&Self::key(mal_id), records).await?;
        Ok(entry)
    }
}
