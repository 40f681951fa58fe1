//! CSV file implementation of the credential repository.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::csv_file::{append_row, ensure_header};
use crate::domain::entities::Credential;
use crate::domain::repositories::{CredentialRepository, StoreError, StoreResult};

/// Header row of the credential file.
pub const CREDENTIAL_HEADER: [&str; 2] = ["number", "password"];

/// Credential store backed by a two-column CSV file (`number,password`).
///
/// Reads scan the whole file on every call. Appends from this process are
/// serialized through an internal lock; other processes writing the same file
/// are not coordinated with.
pub struct CsvCredentialRepository {
    path: Arc<PathBuf>,
    write_lock: Mutex<()>,
}

impl CsvCredentialRepository {
    /// Creates a repository over the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates the file with its header row when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be created.
    pub fn ensure_exists(&self) -> StoreResult<()> {
        if ensure_header(&self.path, &CREDENTIAL_HEADER)? {
            tracing::info!(path = %self.path.display(), "created credential store");
        }
        Ok(())
    }
}

/// Reads every well-formed row in file order.
///
/// The header is read up front so an unreadable file fails here instead of
/// looking like an empty store. Rows that do not deserialize, such as a line
/// without a password column, are skipped with a warning.
fn read_all(path: &Path) -> StoreResult<Vec<Credential>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut credentials = Vec::new();
    for row in reader.records() {
        let record = row?;
        match record.deserialize::<Credential>(Some(&headers)) {
            Ok(credential) => credentials.push(credential),
            Err(e) => tracing::warn!(
                path = %path.display(),
                line = record.position().map(|p| p.line()).unwrap_or(0),
                error = %e,
                "skipping malformed credential row"
            ),
        }
    }

    Ok(credentials)
}

fn find_first(path: &Path, identifier: &str) -> StoreResult<Option<Credential>> {
    Ok(read_all(path)?
        .into_iter()
        .find(|credential| credential.identifier == identifier))
}

async fn blocking<T, F>(f: F) -> StoreResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> StoreResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}

#[async_trait]
impl CredentialRepository for CsvCredentialRepository {
    async fn find(&self, identifier: &str) -> StoreResult<Option<Credential>> {
        let path = self.path.clone();
        let identifier = identifier.to_string();
        blocking(move || find_first(&path, &identifier)).await
    }

    async fn append(&self, credential: &Credential) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        let credential = credential.clone();
        blocking(move || append_row(&path, &CREDENTIAL_HEADER, &credential)).await
    }

    async fn list(&self) -> StoreResult<Vec<Credential>> {
        let path = self.path.clone();
        blocking(move || read_all(&path)).await
    }

    async fn health_check(&self) -> bool {
        self.path.is_file()
    }
}
