//! Mock authentication and the stored session.
//!
//! There is no credential store: login accepts only the demo account, and
//! signup opens a session for any well-formed new user. The signed-in user
//! is kept under [`keys::SESSION`] until logout.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ReelError, Result};
use crate::model::User;
use crate::storage::keys;
use crate::storage::KeyValueStore;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";
pub const DEMO_USERNAME: &str = "DemoUser";

/// Fixed so the demo account's movie key is the same on every login.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(1);

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Authentication status as the UI sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    SignupStart,
    SignupSuccess(User),
    SignupFailure(String),
    Logout,
}

impl AuthState {
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginStart | AuthAction::SignupStart => Self {
                is_loading: true,
                error: None,
                ..self
            },
            AuthAction::LoginSuccess(user) | AuthAction::SignupSuccess(user) => Self {
                user: Some(user),
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            AuthAction::LoginFailure(message) | AuthAction::SignupFailure(message) => Self {
                user: None,
                is_authenticated: false,
                is_loading: false,
                error: Some(message),
            },
            AuthAction::Logout => Self::default(),
        }
    }
}

/// The demo account's user record.
pub fn demo_user(created_at: DateTime<Utc>) -> User {
    User {
        id: DEMO_USER_ID,
        email: DEMO_EMAIL.to_string(),
        username: DEMO_USERNAME.to_string(),
        created_at,
    }
}

/// Session service over a key-value store.
pub struct Session<S: KeyValueStore> {
    store: S,
    state: AuthState,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: AuthState::default(),
        }
    }

    fn dispatch(&mut self, action: AuthAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Load the stored session, if any.
    ///
    /// A stored value that does not parse is discarded and treated as
    /// signed out.
    pub fn restore(&mut self) -> Result<Option<User>> {
        let raw = match self.store.get(keys::SESSION)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                debug!(user = %user.id, "restored session");
                self.dispatch(AuthAction::LoginSuccess(user.clone()));
                Ok(Some(user))
            }
            Err(err) => {
                warn!(error = %err, "discarding unreadable session");
                self.store.remove(keys::SESSION)?;
                self.dispatch(AuthAction::Logout);
                Ok(None)
            }
        }
    }

    /// Sign in with the demo credentials.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::Auth("Invalid email or password")` for any other
    /// credentials.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        self.dispatch(AuthAction::LoginStart);

        if email.trim() != DEMO_EMAIL || password != DEMO_PASSWORD {
            info!("login rejected");
            self.dispatch(AuthAction::LoginFailure(INVALID_CREDENTIALS.to_string()));
            return Err(ReelError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        let user = demo_user(Utc::now());
        if let Err(err) = self.store.set_json(keys::SESSION, &user) {
            self.dispatch(AuthAction::LoginFailure(err.to_string()));
            return Err(err);
        }
        info!(user = %user.id, "signed in");
        self.dispatch(AuthAction::LoginSuccess(user.clone()));
        Ok(user)
    }

    /// Create a new user and sign in as them.
    pub fn signup(&mut self, email: &str, username: &str, password: &str) -> Result<User> {
        self.dispatch(AuthAction::SignupStart);

        let email = email.trim();
        let username = username.trim();
        let problem = if email.is_empty() || username.is_empty() || password.is_empty() {
            Some("Email, username and password are required")
        } else if !email.contains('@') {
            Some("Email address must contain '@'")
        } else {
            None
        };
        if let Some(message) = problem {
            self.dispatch(AuthAction::SignupFailure(message.to_string()));
            return Err(ReelError::InvalidInput(message.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        if let Err(err) = self.store.set_json(keys::SESSION, &user) {
            self.dispatch(AuthAction::SignupFailure(err.to_string()));
            return Err(err);
        }
        info!(user = %user.id, "created account");
        self.dispatch(AuthAction::SignupSuccess(user.clone()));
        Ok(user)
    }

    /// End the session. Signing out with no session is not an error.
    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(keys::SESSION)?;
        self.dispatch(AuthAction::Logout);
        debug!("signed out");
        Ok(())
    }

    /// The signed-in user, or `ReelError::Auth` when signed out.
    pub fn require_user(&self) -> Result<&User> {
        self.state
            .user
            .as_ref()
            .ok_or_else(|| ReelError::Auth("Not signed in".to_string()))
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
