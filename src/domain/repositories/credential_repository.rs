//! Repository trait for account credentials.

use async_trait::async_trait;

use super::store_error::StoreResult;
use crate::domain::entities::Credential;

/// Storage interface for registered accounts.
///
/// Lookup is a linear scan in storage order; the first row with a matching
/// identifier wins. Nothing here enforces uniqueness, callers that need it
/// must check with [`find`](CredentialRepository::find) before appending.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CsvCredentialRepository`] - CSV file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Finds the first credential with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] if the store cannot be read.
    async fn find(&self, identifier: &str) -> StoreResult<Option<Credential>>;

    /// Appends a credential to the store.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] if the store cannot be written.
    async fn append(&self, credential: &Credential) -> StoreResult<()>;

    /// Lists every stored credential in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] if the store cannot be read.
    async fn list(&self) -> StoreResult<Vec<Credential>>;

    /// Checks that the store is readable.
    async fn health_check(&self) -> bool;
}
