//! Encryption of the `matched` link between two people.
//!
//! A person's `matched` field holds the id of the person they were paired
//! with, sealed with ChaCha20-Poly1305 so the pairing can be stored next to
//! the record without being readable. Payload layout is
//! base64url(nonce[12] || ciphertext).

use amigo_core::PersonId;
use base64::{engine::general_purpose, Engine as _};
use chacha20poly1305::{aead::Aead, aead::KeyInit, ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

const NONCE_LEN: usize = 12;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid ciphertext")]
    InvalidCiphertext,

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("encryption failed")]
    EncryptionFailed,

    #[error("decrypted value is not a person id: {0}")]
    InvalidPayload(String),
}

/// Seals and opens `matched` references.
#[derive(Clone)]
pub struct MatchCipher {
    key: [u8; 32],
}

impl MatchCipher {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Build a cipher from configured key material.
    ///
    /// Accepts 64 hex chars, base64 (url-safe or standard) of 32 bytes, or a
    /// raw 32-byte string. Anything else is treated as a passphrase and
    /// stretched with SHA-256.
    pub fn from_key_material(raw: &str) -> Self {
        match parse_key_material(raw) {
            Some(key) => Self::new(key),
            None => {
                let digest = Sha256::digest(raw.trim().as_bytes());
                Self::new(digest.into())
            }
        }
    }

    pub fn encrypt_match(&self, id: PersonId) -> Result<String, CipherError> {
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.key));
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, id.to_string().as_bytes())
            .map_err(|_| CipherError::EncryptionFailed)?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        Ok(general_purpose::URL_SAFE_NO_PAD.encode(payload))
    }

    pub fn decrypt_match(&self, encoded: &str) -> Result<PersonId, CipherError> {
        let payload = general_purpose::URL_SAFE_NO_PAD
            .decode(encoded.trim())
            .map_err(|_| CipherError::InvalidCiphertext)?;

        if payload.len() <= NONCE_LEN {
            return Err(CipherError::InvalidCiphertext);
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LEN);
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&self.key));
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CipherError::DecryptionFailed)?;

        let text = String::from_utf8(plaintext).map_err(|e| CipherError::InvalidPayload(e.to_string()))?;
        text.parse::<PersonId>()
            .map_err(|e| CipherError::InvalidPayload(e.to_string()))
    }
}

impl core::fmt::Debug for MatchCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatchCipher").field("key", &"<redacted>").finish()
    }
}

fn parse_key_material(raw: &str) -> Option<[u8; 32]> {
    let trimmed = raw.trim();

    if trimmed.len() == 64 && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        let bytes = hex::decode(trimmed).ok()?;
        return bytes.as_slice().try_into().ok();
    }

    if let Ok(bytes) = general_purpose::URL_SAFE_NO_PAD.decode(trimmed) {
        if bytes.len() == 32 {
            return bytes.as_slice().try_into().ok();
        }
    }

    if let Ok(bytes) = general_purpose::STANDARD.decode(trimmed) {
        if bytes.len() == 32 {
            return bytes.as_slice().try_into().ok();
        }
    }

    let raw_bytes = trimmed.as_bytes();
    if raw_bytes.len() == 32 {
        return raw_bytes.try_into().ok();
    }

    None
}
