//! Credential registration: hasher and store contracts plus the signup flow
//! that composes them.

mod flow;
mod hasher;
mod store;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use flow::{SignupError, SignupFlow};
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use store::{PgUserStore, StoreError, StoredUser, UserStore};
pub use types::{SigninResponse, SignupRequest, SignupUser};
