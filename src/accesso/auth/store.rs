//! Persistent user store backed by Postgres.

use anyhow::Error;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::fmt;
use tracing::Instrument;
use uuid::Uuid;

/// Name of the unique constraint on users.email. Only a violation of this
/// constraint means "email taken"; any other violation propagates unchanged.
const USERS_EMAIL_KEY: &str = "users_email_key";

/// Persisted user record as returned by the store. Carries the digest; callers
/// must project it into [`super::SignupUser`] before it leaves the service.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub enum StoreError {
    /// Unique constraint violation on the email column.
    EmailTaken,
    /// Any other persistence failure, with the original cause preserved.
    Other(Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailTaken => write!(f, "email already registered"),
            Self::Other(err) => write!(f, "store error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmailTaken => None,
            Self::Other(err) => Some(err.as_ref()),
        }
    }
}

/// Mapping from email to stored user record, with a uniqueness constraint on
/// the email column enforced by the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user record in a single atomic write.
    ///
    /// # Errors
    /// Returns [`StoreError::EmailTaken`] when the email is already
    /// registered, [`StoreError::Other`] for any other persistence failure.
    async fn create_user(&self, email: &str, password_hash: &str)
    -> Result<StoredUser, StoreError>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<StoredUser, StoreError> {
        let query = r"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .instrument(span)
            .await;

        match row {
            Ok(row) => Ok(StoredUser {
                id: row.get("id"),
                email: row.get("email"),
                password_hash: row.get("password_hash"),
            }),
            Err(err) if is_email_unique_violation(&err) => Err(StoreError::EmailTaken),
            Err(err) => Err(StoreError::Other(
                Error::from(err).context("failed to insert user"),
            )),
        }
    }
}

/// True only for SQLSTATE 23505 on the users.email constraint. A unique
/// violation on any other constraint is not an email conflict.
fn is_email_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().is_some_and(|code| code.as_ref() == "23505")
                && db_err.constraint() == Some(USERS_EMAIL_KEY)
        }
        _ => false,
    }
}
