//! Signup credential-registration flow.

use anyhow::Error;
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::Arc;

use super::hasher::CredentialHasher;
use super::store::{StoreError, UserStore};
use super::types::{SigninResponse, SignupRequest, SignupUser};

#[derive(Debug)]
pub enum SignupError {
    /// The request is missing a required field. Client-fixable.
    InvalidInput(&'static str),
    /// The email is already registered.
    CredentialsTaken,
    /// The hashing primitive failed; not recoverable at this layer.
    Hashing(Error),
    /// The store failed for a reason other than the email conflict; the
    /// original cause is preserved for diagnostics.
    Persistence(Error),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "{reason}"),
            Self::CredentialsTaken => write!(f, "Credentials taken"),
            Self::Hashing(err) => write!(f, "password hashing failed: {err}"),
            Self::Persistence(err) => write!(f, "persistence failure: {err}"),
        }
    }
}

impl std::error::Error for SignupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(_) | Self::CredentialsTaken => None,
            Self::Hashing(err) | Self::Persistence(err) => Some(err.as_ref()),
        }
    }
}

/// Orchestrates signup: validate presence, hash, persist, project. The hasher
/// and store are passed in at construction; the flow holds no other state.
pub struct SignupFlow {
    hasher: Arc<dyn CredentialHasher>,
    store: Arc<dyn UserStore>,
}

impl SignupFlow {
    #[must_use]
    pub fn new(hasher: Arc<dyn CredentialHasher>, store: Arc<dyn UserStore>) -> Self {
        Self { hasher, store }
    }

    /// Register a new user.
    ///
    /// The store is never called with an unhashed password, and a failed call
    /// leaves no partial record behind: the single INSERT is the only write.
    /// Concurrent signups for one email race at the store's uniqueness
    /// constraint; the loser surfaces here as [`SignupError::CredentialsTaken`].
    /// No failure is retried.
    ///
    /// # Errors
    /// Every rejected input yields an explicit error; there is no silent
    /// no-op path.
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupUser, SignupError> {
        if request.email.is_empty() {
            return Err(SignupError::InvalidInput("Missing email"));
        }

        let digest = self
            .hasher
            .hash(request.password.expose_secret())
            .map_err(SignupError::Hashing)?;

        match self.store.create_user(&request.email, &digest).await {
            Ok(user) => Ok(SignupUser::from(user)),
            Err(StoreError::EmailTaken) => Err(SignupError::CredentialsTaken),
            Err(StoreError::Other(err)) => Err(SignupError::Persistence(err)),
        }
    }

    /// Signin stub: a fixed acknowledgement, no verification, no side effects.
    #[must_use]
    pub fn signin(&self) -> SigninResponse {
        SigninResponse {
            msg: "I have signed in".to_string(),
        }
    }
}
