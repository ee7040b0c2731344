use campus_views::admin::{AdminScreen, AdminTab, AdminTable, render_admin};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdminArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::session::{new_store, sign_in_if_requested};
use crate::context::AppContext;
use crate::output::output_page;

pub async fn handle(args: &AdminArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab = parse_enum::<AdminTab>(&args.tab, "tab")?;
    let store = new_store(ctx);
    let user = sign_in_if_requested(&store, args.email.as_deref(), &args.password, None).await?;

    let screen = render_admin(user.as_ref(), &ctx.fixtures, tab, &args.search);
    match &screen {
        AdminScreen::AccessDenied { .. } => {
            tracing::warn!("admin console requires an admin sign-in (--email)");
        }
        AdminScreen::Dashboard {
            empty_state: Some(empty),
            ..
        } => tracing::info!(title = %empty.title, "{}", empty.message),
        AdminScreen::Dashboard { .. } => {}
    }
    output_page(&screen, &admin_rows(&screen)?, flags.format)
}

/// Table-mode rows: the denial itself, or the active tab's records.
fn admin_rows(screen: &AdminScreen<'_>) -> anyhow::Result<Value> {
    let rows = match screen {
        AdminScreen::AccessDenied { .. } => serde_json::to_value(screen)?,
        AdminScreen::Dashboard { table, .. } => match table {
            AdminTable::Alumni(rows) => serde_json::to_value(rows)?,
            AdminTable::Events(rows) => serde_json::to_value(rows)?,
            AdminTable::Donations(rows) => serde_json::to_value(rows)?,
        },
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use campus_auth::SessionStore;
    use campus_core::entities::SessionUser;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::commands::shared::testing::context;

    async fn signed_in(store: &SessionStore, email: &str) -> Option<SessionUser> {
        sign_in_if_requested(store, Some(email), "pw", None)
            .await
            .expect("sign in")
    }

    #[tokio::test]
    async fn member_sees_the_denial_as_its_only_row() {
        let ctx = context();
        let store = new_store(&ctx);
        let user = signed_in(&store, "sarah.johnson@email.com").await;

        let screen = render_admin(user.as_ref(), &ctx.fixtures, AdminTab::Alumni, "");
        assert_eq!(
            admin_rows(&screen).expect("rows"),
            json!({
                "screen": "access_denied",
                "title": "Access Denied",
                "message": "You need admin privileges to access this page.",
            })
        );
    }

    #[tokio::test]
    async fn admin_rows_follow_the_tab() {
        let ctx = context();
        let store = new_store(&ctx);
        let user = signed_in(&store, &ctx.config.auth.admin_email).await;

        let screen = render_admin(user.as_ref(), &ctx.fixtures, AdminTab::Donations, "");
        let rows = admin_rows(&screen).expect("rows");
        let donors: Vec<&str> = rows
            .as_array()
            .expect("donation rows")
            .iter()
            .filter_map(|row| row["donor"].as_str())
            .collect();
        assert_eq!(donors, vec!["Anonymous Donor", "Sarah Johnson", "Michael Chen"]);
    }

    #[tokio::test]
    async fn unmatched_search_yields_no_rows() {
        let ctx = context();
        let store = new_store(&ctx);
        let user = signed_in(&store, &ctx.config.auth.admin_email).await;

        let screen = render_admin(user.as_ref(), &ctx.fixtures, AdminTab::Events, "zzz-no-match");
        assert_eq!(admin_rows(&screen).expect("rows"), json!([]));
    }
}
