//! Authentication service — demo login, logout and session lookup.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use delivery_core::error::DeliveryResult;
use delivery_core::models::session::Session;
use delivery_core::models::user::User;
use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
struct Account {
    user: User,
    password_hash: String,
}

#[derive(Debug)]
struct OpenSession {
    session: Session,
    expires_at: DateTime<Utc>,
}

impl OpenSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Authentication service over a fixed set of demo accounts.
///
/// Sessions expire `session_lifetime_secs` after login. Expired sessions
/// are dropped on lookup and swept on every login, so the table never
/// outgrows the set of live sessions plus those expired since the last
/// login.
pub struct AuthService {
    accounts: HashMap<String, Account>,
    sessions: RwLock<HashMap<Uuid, OpenSession>>,
    pepper: Option<String>,
    session_lifetime: Duration,
}

impl AuthService {
    /// Hash every configured password and build the account directory.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let pepper = config.pepper;
        let session_lifetime = i64::try_from(config.session_lifetime_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        let mut accounts = HashMap::with_capacity(config.accounts.len());

        for demo in config.accounts {
            if accounts.contains_key(&demo.email) {
                return Err(AuthError::DuplicateAccount(demo.email));
            }
            let password_hash = password::hash_password(&demo.password, pepper.as_deref())?;
            let user = User {
                id: Uuid::new_v4(),
                name: demo.name,
                email: demo.email.clone(),
                role: demo.role,
            };
            accounts.insert(
                demo.email,
                Account {
                    user,
                    password_hash,
                },
            );
        }

        info!(accounts = accounts.len(), "Demo account directory loaded");

        Ok(Self {
            accounts,
            sessions: RwLock::new(HashMap::new()),
            pepper,
            session_lifetime,
        })
    }

    /// Check the credentials and open a session.
    ///
    /// An unknown email and a wrong password fail identically.
    pub fn login(&self, input: LoginInput) -> DeliveryResult<Session> {
        let Some(account) = self.accounts.get(&input.email) else {
            warn!(email = %input.email, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = password::verify_password(
            &input.password,
            &account.password_hash,
            self.pepper.as_deref(),
        )?;
        if !valid {
            warn!(email = %input.email, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        let session = Session::new(account.user.clone());
        let expires_at = now
            .checked_add_signed(self.session_lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        info!(
            session_id = %session.id(),
            role = %session.role(),
            %expires_at,
            "Session opened"
        );

        let mut sessions = self.sessions.write();
        sweep(&mut sessions, now);
        sessions.insert(
            session.id(),
            OpenSession {
                session: session.clone(),
                expires_at,
            },
        );

        Ok(session)
    }

    /// Look up an open session. An expired session is removed and
    /// reported as expired.
    pub fn session(&self, session_id: Uuid) -> DeliveryResult<Session> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read();
            match sessions.get(&session_id) {
                None => return Err(AuthError::SessionNotFound.into()),
                Some(open) if !open.is_expired(now) => return Ok(open.session.clone()),
                Some(_) => {}
            }
        }

        self.sessions.write().remove(&session_id);
        debug!(session_id = %session_id, "Expired session removed");
        Err(AuthError::SessionExpired.into())
    }

    /// Close a session (logout).
    pub fn logout(&self, session_id: Uuid) -> DeliveryResult<()> {
        match self.sessions.write().remove(&session_id) {
            Some(open) => {
                info!(session_id = %session_id, role = %open.session.role(), "Session closed");
                Ok(())
            }
            None => Err(AuthError::SessionNotFound.into()),
        }
    }

    /// Drop every expired session and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        sweep(&mut self.sessions.write(), Utc::now())
    }

    /// Number of sessions currently held, expired or not.
    pub fn open_sessions(&self) -> usize {
        self.sessions.read().len()
    }
}

fn sweep(sessions: &mut HashMap<Uuid, OpenSession>, now: DateTime<Utc>) -> usize {
    let before = sessions.len();
    sessions.retain(|_, open| !open.is_expired(now));
    let removed = before - sessions.len();
    if removed > 0 {
        debug!(removed, "Expired sessions swept");
    }
    removed
}
