//! Owner secrets.
//!
//! Whoever knows a profile's owner secret may read it for editing and update
//! it. The secret itself is never stored: only its SHA-256 digest is.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Secret presented by the owner of a profile.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerSecret(String);

impl OwnerSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest stored alongside the profile and compared on every owner check.
    #[must_use]
    pub fn digest(&self) -> OwnerSecretDigest {
        OwnerSecretDigest(format!("{:x}", Sha256::digest(self.0.as_bytes())))
    }
}

impl Drop for OwnerSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Debug for OwnerSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("OwnerSecret(<redacted>)")
    }
}

/// Lowercase hex SHA-256 of an [`OwnerSecret`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSecretDigest(String);

impl OwnerSecretDigest {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
