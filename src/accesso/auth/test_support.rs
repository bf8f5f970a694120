//! In-memory collaborators for exercising the flow without Postgres.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use super::hasher::CredentialHasher;
use super::store::{StoreError, StoredUser, UserStore};
use super::types::SignupRequest;

pub(crate) fn signup_request(email: &str, password: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: password.to_string().into(),
    }
}

/// Store with the same uniqueness contract as Postgres, minus the database.
#[derive(Default)]
pub(crate) struct InMemoryUserStore {
    users: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self) -> usize {
        self.users.lock().expect("lock").len()
    }

    pub(crate) fn records_for(&self, email: &str) -> usize {
        self.users
            .lock()
            .expect("lock")
            .iter()
            .filter(|user| user.email == email)
            .count()
    }

    pub(crate) fn password_hash_for(&self, email: &str) -> Option<String> {
        self.users
            .lock()
            .expect("lock")
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.password_hash.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<StoredUser, StoreError> {
        let mut users = self.users.lock().expect("lock");
        if users.iter().any(|user| user.email == email) {
            return Err(StoreError::EmailTaken);
        }
        let user = StoredUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// Store that fails every call with a generic persistence error.
pub(crate) struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn create_user(
        &self,
        _email: &str,
        _password_hash: &str,
    ) -> Result<StoredUser, StoreError> {
        Err(StoreError::Other(anyhow!("connection reset by peer")))
    }
}

/// Deterministic hasher that records how often it ran.
#[derive(Default)]
pub(crate) struct CountingHasher {
    calls: AtomicUsize,
}

impl CountingHasher {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialHasher for CountingHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("digest-{call}-{}", plaintext.len()))
    }
}

/// Hasher that simulates a failure of the hashing primitive.
pub(crate) struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _plaintext: &str) -> Result<String> {
        Err(anyhow!("hashing primitive failure"))
    }
}
