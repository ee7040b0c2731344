use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use campus_config::AuthConfig;
use campus_core::entities::SessionUser;
use campus_core::enums::Role;
use campus_core::ids;

use crate::error::AuthError;

const ADMIN_DISPLAY_NAME: &str = "Admin User";
const MEMBER_DISPLAY_NAME: &str = "John Doe";

/// Holder of the single signed-in user.
///
/// A store starts signed out. `sign_in` and `sign_up` resolve after the
/// configured latency; while one is in flight, further submissions fail with
/// [`AuthError::SubmitPending`]. `sign_out` is the only teardown.
#[derive(Debug)]
pub struct SessionStore {
    config: AuthConfig,
    current: RwLock<Option<SessionUser>>,
    accounts: Mutex<HashSet<String>>,
    pending: AtomicBool,
}

/// Clears the pending flag when the submission finishes or is dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AuthError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| AuthError::SubmitPending)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            current: RwLock::new(None),
            accounts: Mutex::new(HashSet::new()),
            pending: AtomicBool::new(false),
        }
    }

    /// Snapshot of the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Whether a sign-in or sign-up is in flight. Submit controls should be
    /// disabled while this is true.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Sign in with `email`. The configured admin email always yields an
    /// administrator; everyone else gets `role_hint` or the default role.
    ///
    /// # Errors
    ///
    /// - [`AuthError::SubmitPending`] if another submission is in flight.
    /// - [`AuthError::InvalidCredentials`] for blank credentials when
    ///   `enforce_credentials` is on.
    /// - [`AuthError::Timeout`] if the simulated call exceeds `timeout_ms`.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        role_hint: Option<Role>,
    ) -> Result<SessionUser, AuthError> {
        let _guard = self.begin_submit()?;

        if self.config.enforce_credentials && (email.trim().is_empty() || password.is_empty()) {
            tracing::warn!("sign-in rejected: blank credentials");
            return Err(AuthError::InvalidCredentials);
        }

        self.simulate_round_trip().await?;

        let user = if self.config.is_admin_email(email) {
            SessionUser {
                id: ids::new_user_id()?,
                name: ADMIN_DISPLAY_NAME.to_string(),
                email: email.to_string(),
                role: Role::Admin,
                is_authenticated: true,
            }
        } else {
            SessionUser {
                id: ids::new_user_id()?,
                name: MEMBER_DISPLAY_NAME.to_string(),
                email: email.to_string(),
                role: role_hint.unwrap_or(self.config.default_role),
                is_authenticated: true,
            }
        };

        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        self.replace(Some(user.clone()));
        Ok(user)
    }

    /// Create an account and sign it in. Sign-up never grants `Admin`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::SubmitPending`] if another submission is in flight.
    /// - [`AuthError::AdminSignUp`] if `role` is `Admin`.
    /// - [`AuthError::InvalidCredentials`] / [`AuthError::DuplicateAccount`]
    ///   when `enforce_credentials` is on.
    /// - [`AuthError::Timeout`] if the simulated call exceeds `timeout_ms`.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<SessionUser, AuthError> {
        let _guard = self.begin_submit()?;

        if role.is_admin() {
            tracing::warn!("sign-up rejected: admin role requested");
            return Err(AuthError::AdminSignUp);
        }

        let account_key = email.trim().to_lowercase();
        if self.config.enforce_credentials {
            if name.trim().is_empty() || account_key.is_empty() || password.is_empty() {
                tracing::warn!("sign-up rejected: blank fields");
                return Err(AuthError::InvalidCredentials);
            }
            if self.known_account(&account_key) {
                tracing::warn!("sign-up rejected: duplicate account");
                return Err(AuthError::DuplicateAccount {
                    email: email.to_string(),
                });
            }
        }

        self.simulate_round_trip().await?;

        let user = SessionUser {
            id: ids::new_user_id()?,
            name: name.to_string(),
            email: email.to_string(),
            role,
            is_authenticated: true,
        };

        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(account_key);

        tracing::info!(user_id = %user.id, role = %user.role, "signed up");
        self.replace(Some(user.clone()));
        Ok(user)
    }

    /// Clear the session. Signing out while signed out is a no-op.
    pub fn sign_out(&self) {
        if let Some(user) = self.replace(None) {
            tracing::info!(user_id = %user.id, "signed out");
        }
    }

    fn begin_submit(&self) -> Result<PendingGuard<'_>, AuthError> {
        PendingGuard::acquire(&self.pending).inspect_err(|_| {
            tracing::warn!("submission ignored: another request is pending");
        })
    }

    async fn simulate_round_trip(&self) -> Result<(), AuthError> {
        tracing::debug!(latency_ms = self.config.latency_ms, "simulating auth round trip");
        tokio::time::timeout(
            self.config.timeout(),
            tokio::time::sleep(self.config.latency()),
        )
        .await
        .map_err(|_| AuthError::Timeout {
            after_ms: self.config.timeout_ms,
        })
    }

    fn known_account(&self, account_key: &str) -> bool {
        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(account_key)
    }

    fn replace(&self, user: Option<SessionUser>) -> Option<SessionUser> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, user)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(AuthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> AuthConfig {
        AuthConfig {
            latency_ms: 0,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn new_store_is_signed_out() {
        let store = SessionStore::default();
        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
        assert!(!store.is_pending());
    }

    #[test]
    fn pending_guard_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);
        let guard = PendingGuard::acquire(&flag).expect("first acquire");
        assert!(matches!(
            PendingGuard::acquire(&flag),
            Err(AuthError::SubmitPending)
        ));
        drop(guard);
        assert!(PendingGuard::acquire(&flag).is_ok());
    }

    #[tokio::test]
    async fn sign_out_clears_user() {
        let store = SessionStore::new(instant_config());
        store
            .sign_in("sarah.johnson@email.com", "pw", None)
            .await
            .expect("sign in");
        assert!(store.is_authenticated());

        store.sign_out();
        assert!(store.current_user().is_none());

        // Second sign-out is a no-op.
        store.sign_out();
        assert!(!store.is_authenticated());
    }
}
