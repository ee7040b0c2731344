use campus_core::entities::SessionUser;
use campus_core::routes::{NavLink, Route, nav_links};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoutesArgs;
use crate::commands::shared::session::{new_store, sign_in_if_requested};
use crate::context::AppContext;
use crate::output::output_page;

#[derive(Debug, Serialize)]
struct RouteEntry {
    path: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct RoutesResponse {
    routes: Vec<RouteEntry>,
    current: &'static str,
    navigation: Vec<NavLink>,
}

pub async fn handle(args: &RoutesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = new_store(ctx);
    let user = sign_in_if_requested(&store, args.email.as_deref(), &args.password, None).await?;
    let response = route_table(&args.current, user.as_ref())?;
    output_page(&response, &response.navigation, flags.format)
}

/// Every route, plus the navigation `user` sees from `current`.
fn route_table(current: &str, user: Option<&SessionUser>) -> anyhow::Result<RoutesResponse> {
    let current = Route::from_path(current)
        .ok_or_else(|| anyhow::anyhow!("unknown route '{current}'"))?;

    Ok(RoutesResponse {
        routes: Route::ALL
            .iter()
            .map(|route| RouteEntry {
                path: route.path(),
                label: route.nav_label(),
            })
            .collect(),
        current: current.path(),
        navigation: nav_links(user, current.path()),
    })
}
