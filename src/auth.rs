use tracing::{debug, info};

use crate::core::errors::AuthError;
use crate::core::helpers::IdGenerator;
use crate::models::models::{SessionState, SignInCredentials, SignUpCredentials, User};
use crate::users::{username_from_email, KnownUsers};

/// Owns the authentication state and its three transitions.
///
/// Starts signed out. A successful `sign_in` or `sign_up` replaces whatever
/// user was signed in before; `sign_out` always lands in `SignedOut`.
#[derive(Debug)]
pub struct SessionStore {
    known: KnownUsers,
    state: SessionState,
    ids: IdGenerator,
}

impl SessionStore {
    pub fn new(known: KnownUsers) -> Self {
        let mut ids = IdGenerator::new();
        ids.reserve(known.ids());
        Self {
            known,
            state: SessionState::SignedOut,
            ids,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn known_users(&self) -> &KnownUsers {
        &self.known
    }

    /// Check credentials against the known-users table without touching state.
    pub fn authenticate(&self, creds: &SignInCredentials) -> Result<User, AuthError> {
        self.known
            .find_by_credentials(&creds.email, &creds.password)
            .map(|u| u.to_user())
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Build a new user for a sign-up request without touching state.
    ///
    /// The known-users table is left as is, so the account only lives in the
    /// session that created it.
    pub fn register(&mut self, creds: &SignUpCredentials) -> Result<User, AuthError> {
        if creds.password != creds.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.known.contains_email(&creds.email) {
            return Err(AuthError::EmailTaken);
        }
        Ok(User {
            id: self.ids.next_id(),
            email: creds.email.clone(),
            username: username_from_email(&creds.email).to_string(),
        })
    }

    /// Make `user` the signed-in user, replacing any previous one.
    pub(crate) fn adopt(&mut self, user: User) {
        info!(user_id = %user.id, username = %user.username, "signed in");
        self.state = SessionState::SignedIn(user);
    }

    pub fn sign_in(&mut self, creds: &SignInCredentials) -> bool {
        match self.authenticate(creds) {
            Ok(user) => {
                self.adopt(user);
                true
            }
            Err(e) => {
                debug!(email = %creds.email, reason = %e, "sign-in rejected");
                false
            }
        }
    }

    pub fn sign_up(&mut self, creds: &SignUpCredentials) -> bool {
        match self.register(creds) {
            Ok(user) => {
                self.adopt(user);
                true
            }
            Err(e) => {
                debug!(email = %creds.email, reason = %e, "sign-up rejected");
                false
            }
        }
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.state.user() {
            info!(user_id = %user.id, "signed out");
        }
        self.state = SessionState::SignedOut;
    }
}
