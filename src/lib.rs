//! # Accesso
//!
//! `accesso` is a minimal signup/signin backend. It exposes two endpoints:
//!
//! - `POST /auth/signup` registers a user: the password is hashed with
//!   Argon2id (salted, memory-hard) and the record is inserted behind a
//!   uniqueness constraint on the email column. A duplicate email surfaces as
//!   `409 Conflict`; the returned record never carries the digest.
//! - `POST /auth/signin` is a documented stub that returns a fixed
//!   acknowledgement without verifying credentials.
//!
//! The database is the single arbiter of concurrent signups for the same
//! email; the flow maps the losing insert to a conflict and performs no
//! retries.

pub mod accesso;
pub mod cli;
