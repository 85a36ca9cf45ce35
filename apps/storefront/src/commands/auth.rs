//! # Auth Commands
//!
//! Registration, sign-in and sign-out for local accounts.

use serde::Serialize;
use storefront_core::User;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AuthState;

/// Who is signed in, if anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl SessionInfo {
    fn of(auth: &AuthState) -> Self {
        let user = auth.current();
        SessionInfo {
            authenticated: user.is_some(),
            user,
        }
    }
}

/// Creates an account. The caller still has to `login` afterwards.
pub fn register(
    auth: &AuthState,
    email: &str,
    password: &str,
    confirm: &str,
) -> ApiResult<User> {
    debug!(email, "register command");
    Ok(auth.register(email, password, confirm)?)
}

pub fn login(auth: &AuthState, email: &str, password: &str) -> ApiResult<SessionInfo> {
    debug!(email, "login command");
    auth.login(email, password)?;
    Ok(SessionInfo::of(auth))
}

pub fn logout(auth: &AuthState) -> ApiResult<SessionInfo> {
    debug!("logout command");
    auth.logout()?;
    Ok(SessionInfo::of(auth))
}

pub fn whoami(auth: &AuthState) -> SessionInfo {
    SessionInfo::of(auth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_store::Storage;

    #[test]
    fn test_session_round() {
        let storage = Storage::in_memory();
        let auth = AuthState::new(storage.users(), storage.preferences());

        assert!(!whoami(&auth).authenticated);
        register(&auth, "ana@example.com", "secret1", "secret1").unwrap();

        let info = login(&auth, "ana@example.com", "secret1").unwrap();
        assert!(info.authenticated);
        assert_eq!(info.user, Some(User::new("ana@example.com")));

        let info = logout(&auth).unwrap();
        assert_eq!(info, SessionInfo { authenticated: false, user: None });
    }

    #[test]
    fn test_error_codes() {
        let storage = Storage::in_memory();
        let auth = AuthState::new(storage.users(), storage.preferences());
        register(&auth, "ana@example.com", "secret1", "secret1").unwrap();

        let dup = register(&auth, "ana@example.com", "secret1", "secret1").unwrap_err();
        assert_eq!(dup.code, ErrorCode::Conflict);

        let bad = login(&auth, "ana@example.com", "nope123").unwrap_err();
        assert_eq!(bad.code, ErrorCode::Unauthorized);

        let short = register(&auth, "bob@example.com", "abc", "abc").unwrap_err();
        assert_eq!(short.code, ErrorCode::ValidationError);
    }
}
