use campus_auth::SessionStore;
use campus_core::entities::SessionUser;
use campus_core::enums::Role;
use campus_core::routes::{NavLink, Route, nav_links};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::{auth_failure, new_store};
use crate::context::AppContext;
use crate::output::output_page;

#[derive(Debug, Serialize)]
struct LoginResponse {
    user: SessionUser,
    navigation: Vec<NavLink>,
}

pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = new_store(ctx);
    let user = authenticate(args, &store, ctx.config.auth.default_role).await?;

    let response = LoginResponse {
        navigation: nav_links(Some(&user), Route::Landing.path()),
        user,
    };
    output_page(&response, &response.user, flags.format)
}

/// Sign up or sign in on `store` according to the flags.
async fn authenticate(
    args: &LoginArgs,
    store: &SessionStore,
    default_role: Role,
) -> anyhow::Result<SessionUser> {
    let role = args
        .role
        .as_deref()
        .map(|raw| parse_enum::<Role>(raw, "role"))
        .transpose()?;

    if args.sign_up {
        let name = args.name.as_deref().unwrap_or_default();
        store
            .sign_up(name, &args.email, &args.password, role.unwrap_or(default_role))
            .await
    } else {
        store.sign_in(&args.email, &args.password, role).await
    }
    .map_err(auth_failure)
}
