//! Account verification and registration against the credential store.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::Credential;
use crate::domain::entities::credential::IDENTIFIER_LEN;
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    WrongPassword,
    NoSuchAccount,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Success",
            LoginOutcome::WrongPassword => "Wrong password",
            LoginOutcome::NoSuchAccount => "Account does not exist",
        }
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    IdentifierLengthInvalid,
    SecretMismatch,
    AlreadyExists,
}

impl RegistrationOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RegistrationOutcome::Created => "Account created successfully! Please login.",
            RegistrationOutcome::IdentifierLengthInvalid => "Number must be exactly 10 digits.",
            RegistrationOutcome::SecretMismatch => "Passwords do not match.",
            RegistrationOutcome::AlreadyExists => "Account already exists. Please login.",
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, RegistrationOutcome::Created)
    }
}

/// Service for verifying and registering accounts.
///
/// Secrets are compared and stored in plaintext. Business outcomes are
/// returned as values; only store failures surface as [`AppError`].
pub struct AuthService<R: CredentialRepository> {
    repository: Arc<R>,
    registration_lock: Mutex<()>,
}

impl<R: CredentialRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            registration_lock: Mutex::new(()),
        }
    }

    /// Checks `secret` against the first stored account with `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be read.
    pub async fn verify(&self, identifier: &str, secret: &str) -> Result<LoginOutcome, AppError> {
        let outcome = match self.repository.find(identifier).await? {
            Some(credential) if credential.secret == secret => LoginOutcome::Success,
            Some(_) => LoginOutcome::WrongPassword,
            None => LoginOutcome::NoSuchAccount,
        };

        tracing::info!(identifier, outcome = ?outcome, "login attempt");
        Ok(outcome)
    }

    /// Registers a new account.
    ///
    /// Checks run in order: identifier length, secret confirmation, duplicate
    /// identifier. The duplicate check and the append happen under one lock,
    /// so two concurrent registrations of the same identifier in this process
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be read or written.
    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        confirm_secret: &str,
    ) -> Result<RegistrationOutcome, AppError> {
        let credential = Credential::new(identifier, secret);

        if !credential.has_valid_identifier() {
            tracing::debug!(
                length = identifier.chars().count(),
                expected = IDENTIFIER_LEN,
                "rejected registration: identifier length"
            );
            return Ok(RegistrationOutcome::IdentifierLengthInvalid);
        }

        if secret != confirm_secret {
            tracing::debug!(identifier, "rejected registration: secret mismatch");
            return Ok(RegistrationOutcome::SecretMismatch);
        }

        let _guard = self.registration_lock.lock().await;

        if self.repository.find(identifier).await?.is_some() {
            tracing::info!(identifier, "rejected registration: account exists");
            return Ok(RegistrationOutcome::AlreadyExists);
        }

        self.repository.append(&credential).await?;
        tracing::info!(identifier, "account registered");

        Ok(RegistrationOutcome::Created)
    }

    /// Lists stored identifiers in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be read.
    pub async fn list_identifiers(&self) -> Result<Vec<String>, AppError> {
        let credentials = self.repository.list().await?;
        Ok(credentials.into_iter().map(|c| c.identifier).collect())
    }

    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
