//! CSV file implementation of the feedback sink.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::csv_file::append_row;
use crate::domain::entities::FeedbackEntry;
use crate::domain::repositories::{FeedbackRepository, StoreError, StoreResult};

/// Header row written when the feedback file is first created.
pub const FEEDBACK_HEADER: [&str; 2] = ["SEAT", "FEEDBACK"];

/// Feedback sink backed by a two-column CSV file (`SEAT,FEEDBACK`).
pub struct CsvFeedbackRepository {
    path: Arc<PathBuf>,
    write_lock: Mutex<()>,
}

impl CsvFeedbackRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl FeedbackRepository for CsvFeedbackRepository {
    async fn append(&self, entry: &FeedbackEntry) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        let entry = entry.clone();
        tokio::task::spawn_blocking(move || append_row(&path, &FEEDBACK_HEADER, &entry))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }

    async fn health_check(&self) -> bool {
        if self.path.exists() {
            return self.path.is_file();
        }
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
            _ => true,
        }
    }
}
