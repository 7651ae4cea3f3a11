//! Credential hashing behind a trait, with an Argon2id implementation.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use invitehub_core::error::AppError;

/// An opaque one-way function over passwords.
///
/// The login flow only needs to produce a stored credential and later check
/// a candidate against it; how that is done is up to the implementation.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Produce a storable credential for `password`.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Check `password` against a stored credential.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for credentials
    /// that cannot be parsed.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError>;
}

/// Argon2id with a random salt per credential.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Creates a hasher with the library's default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
