//! # Auth State
//!
//! Local accounts and the signed-in user for this session.
//!
//! ## Session Lifecycle
//! ```text
//! startup ──► restore() ── persisted "currentUser"? ──► signed in
//!                                  │
//!                                  └── none / unknown account ──► signed out
//!
//! register(email, pw, confirm) ──► validate ──► argon2 hash ──► users.insert
//! login(email, pw) ──► validate ──► users.find ──► argon2 verify ──► persist
//! logout() ──► forget user ──► remove "currentUser"
//! ```
//!
//! Accounts live in the injected store; nothing here touches a global.

use std::sync::Mutex;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use storefront_core::validation::{validate_login, validate_registration};
use storefront_core::{User, ValidationError};
use storefront_store::{PreferenceRepository, StoreError, StoredUser, UserRepository};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Form input rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Registration with an email that already has an account.
    #[error("account already exists: {0}")]
    EmailTaken(String),

    /// Unknown email or wrong password; the two are not told apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A private command was called while signed out.
    #[error("not signed in")]
    NotAuthenticated,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Local storage error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { value, .. } => AuthError::EmailTaken(value),
            other => AuthError::Store(other),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Session authentication state.
pub struct AuthState {
    users: UserRepository,
    preferences: PreferenceRepository,
    current: Mutex<Option<User>>,
}

impl AuthState {
    /// Creates a signed-out auth state over the given repositories.
    pub fn new(users: UserRepository, preferences: PreferenceRepository) -> Self {
        AuthState {
            users,
            preferences,
            current: Mutex::new(None),
        }
    }

    /// Creates a local account. Does not sign the new user in.
    pub fn register(&self, email: &str, password: &str, confirm: &str) -> AuthResult<User> {
        validate_registration(email, password, confirm)?;
        let email = email.trim();

        let password_hash = hash_password(password)?;
        let stored = self.users.insert(StoredUser {
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        })?;

        info!(email = %stored.email, "Registered account");
        Ok(User::new(stored.email))
    }

    /// Signs in and remembers the session across restarts.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        validate_login(email, password)?;

        let stored = self
            .users
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &stored.password_hash)?;

        self.preferences.set_session_email(&stored.email)?;
        let user = User::new(stored.email);
        self.set_current(Some(user.clone()));

        info!(email = %user.email, "Signed in");
        Ok(user)
    }

    pub fn logout(&self) -> AuthResult<()> {
        if let Some(user) = self.current() {
            info!(email = %user.email, "Signed out");
        }
        self.set_current(None);
        self.preferences.clear_session_email()?;
        Ok(())
    }

    /// Re-establishes the session saved by a previous run.
    ///
    /// A saved email with no matching account is discarded.
    pub fn restore(&self) -> AuthResult<Option<User>> {
        let Some(email) = self.preferences.session_email()? else {
            debug!("No saved session");
            return Ok(None);
        };

        match self.users.find_by_email(&email)? {
            Some(stored) => {
                let user = User::new(stored.email);
                self.set_current(Some(user.clone()));
                info!(email = %user.email, "Restored session");
                Ok(Some(user))
            }
            None => {
                warn!(%email, "Saved session refers to an unknown account");
                self.preferences.clear_session_email()?;
                Ok(None)
            }
        }
    }

    pub fn current(&self) -> Option<User> {
        self.current
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Guard for private commands (dashboard, checkout).
    pub fn require_user(&self) -> AuthResult<User> {
        self.current().ok_or(AuthError::NotAuthenticated)
    }

    fn set_current(&self, user: Option<User>) {
        *self.current.lock().unwrap_or_else(|p| p.into_inner()) = user;
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AuthResult<()> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_store::Storage;

    fn auth(storage: &Storage) -> AuthState {
        AuthState::new(storage.users(), storage.preferences())
    }

    #[test]
    fn test_register_then_login() {
        let storage = Storage::in_memory();
        let auth = auth(&storage);

        auth.register("ana@example.com", "secret1", "secret1").unwrap();
        assert!(!auth.is_authenticated());

        let user = auth.login("ANA@example.com", "secret1").unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert!(auth.is_authenticated());

        let stored = storage.users().find_by_email("ana@example.com").unwrap().unwrap();
        assert!(stored.password_hash.starts_with("$argon2"));
        assert_ne!(stored.password_hash, "secret1");
    }

    #[test]
    fn test_register_duplicate_email() {
        let storage = Storage::in_memory();
        let auth = auth(&storage);
        auth.register("ana@example.com", "secret1", "secret1").unwrap();

        let err = auth.register("ana@example.com", "other12", "other12").unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(_)));
    }

    #[test]
    fn test_register_validation_runs_first() {
        let storage = Storage::in_memory();
        let err = auth(&storage).register("ana@example.com", "abc", "abd").unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::Mismatch { .. })
        ));
        assert!(storage.users().list().unwrap().is_empty());
    }

    #[test]
    fn test_login_failures_look_the_same() {
        let storage = Storage::in_memory();
        let auth = auth(&storage);
        auth.register("ana@example.com", "secret1", "secret1").unwrap();

        assert!(matches!(
            auth.login("ana@example.com", "wrong-pw"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("bob@example.com", "secret1"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("", "secret1"),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_session_is_restored_and_cleared() {
        let storage = Storage::in_memory();
        {
            let first = auth(&storage);
            first.register("ana@example.com", "secret1", "secret1").unwrap();
            first.login("ana@example.com", "secret1").unwrap();
        }

        let second = auth(&storage);
        assert!(second.require_user().is_err());
        let restored = second.restore().unwrap().unwrap();
        assert_eq!(restored.email, "ana@example.com");
        assert_eq!(second.require_user().unwrap(), restored);

        second.logout().unwrap();
        assert!(matches!(
            second.require_user(),
            Err(AuthError::NotAuthenticated)
        ));
        assert!(auth(&storage).restore().unwrap().is_none());
    }

    #[test]
    fn test_restore_discards_unknown_account() {
        let storage = Storage::in_memory();
        storage.preferences().set_session_email("ghost@example.com").unwrap();

        assert!(auth(&storage).restore().unwrap().is_none());
        assert_eq!(storage.preferences().session_email().unwrap(), None);
    }
}
