//! Stored password representations.

use subtle::ConstantTimeEq;

/// Prefixes bcrypt writes at the start of every hash.
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

/// How a user's password is kept in the `password_hash` column.
///
/// `LegacyPlaintext` exists only for accounts provisioned before hashing was
/// introduced. New credentials are always `Hashed`.
#[derive(Clone, PartialEq, Eq)]
pub enum StoredCredential {
    /// bcrypt hash.
    Hashed(String),
    /// Plaintext password. Migration debt.
    LegacyPlaintext(String),
}

impl StoredCredential {
    /// Classify a raw column value by its bcrypt prefix marker.
    pub fn from_stored(value: String) -> Self {
        if BCRYPT_PREFIXES.iter().any(|p| value.starts_with(p)) {
            Self::Hashed(value)
        } else {
            Self::LegacyPlaintext(value)
        }
    }

    pub fn hash(password: &str, cost: u32) -> Result<Self, bcrypt::BcryptError> {
        bcrypt::hash(password, cost).map(Self::Hashed)
    }

    pub fn verify(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        match self {
            Self::Hashed(hash) => bcrypt::verify(password, hash),
            Self::LegacyPlaintext(stored) => {
                Ok(bool::from(stored.as_bytes().ct_eq(password.as_bytes())))
            }
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyPlaintext(_))
    }

    /// Value to persist in the `password_hash` column.
    pub fn as_stored(&self) -> &str {
        match self {
            Self::Hashed(value) | Self::LegacyPlaintext(value) => value,
        }
    }
}

impl std::fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hashed(_) => f.write_str("Hashed(..)"),
            Self::LegacyPlaintext(_) => f.write_str("LegacyPlaintext(..)"),
        }
    }
}
