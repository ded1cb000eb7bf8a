//! `amigo-auth` — the admin gate and the match cipher.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod gate;
pub mod match_cipher;

pub use gate::{extract_bearer, AdminGate, AuthError};
pub use match_cipher::{CipherError, MatchCipher};
