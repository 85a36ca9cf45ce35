//! # User Repository
//!
//! Local accounts created through the registration form.
//!
//! Only a password hash is stored; hashing and verification happen in the
//! app's auth state. Emails are compared case-insensitively.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{load_json, save_json};
use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

const USERS_KEY: &str = "users";

/// An account as kept in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: String,
    /// PHC string (`$argon2id$...`).
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        UserRepository { store }
    }

    pub fn list(&self) -> StoreResult<Vec<StoredUser>> {
        load_json(self.store.as_ref(), USERS_KEY)
    }

    pub fn find_by_email(&self, email: &str) -> StoreResult<Option<StoredUser>> {
        let email = email.trim();
        Ok(self
            .list()?
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    /// Adds an account.
    ///
    /// ## Errors
    /// `StoreError::Duplicate` when an account with the same email exists.
    pub fn insert(&self, user: StoredUser) -> StoreResult<StoredUser> {
        let mut users = self.list()?;

        if users
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::duplicate("email", user.email));
        }

        debug!(email = %user.email, "Inserting user");
        users.push(user.clone());
        save_json(self.store.as_ref(), USERS_KEY, &users)?;
        Ok(user)
    }
}
