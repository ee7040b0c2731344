use campus_auth::{AuthError, SessionStore};
use campus_core::entities::SessionUser;
use campus_core::enums::Role;

use crate::context::AppContext;

/// Surface the user-facing message first, with the detailed error as cause.
pub fn auth_failure(error: AuthError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

/// Fresh session store for one invocation.
pub fn new_store(ctx: &AppContext) -> SessionStore {
    SessionStore::new(ctx.config.auth.clone())
}

/// Sign in on `store` when an email is given; otherwise stay signed out.
pub async fn sign_in_if_requested(
    store: &SessionStore,
    email: Option<&str>,
    password: &str,
    role_hint: Option<Role>,
) -> anyhow::Result<Option<SessionUser>> {
    let Some(email) = email else {
        return Ok(None);
    };
    let user = store
        .sign_in(email, password, role_hint)
        .await
        .map_err(auth_failure)?;
    Ok(Some(user))
}
