use campus_core::entities::AlumniRecord;
use campus_views::directory::{DirectoryFacets, DirectoryPage, DirectoryView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DirectoryArgs;
use crate::context::AppContext;
use crate::output::output_page;

#[derive(Debug, Serialize)]
struct DirectoryResponse<'a> {
    #[serde(flatten)]
    page: DirectoryPage<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<DirectoryFacets>,
}

pub fn handle(args: &DirectoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = search(args, &ctx.fixtures.alumni);
    if let Some(empty) = &response.page.empty_state {
        tracing::info!(title = %empty.title, "{}", empty.message);
    }
    output_page(&response, &response.page.alumni, flags.format)
}

fn search<'a>(args: &DirectoryArgs, alumni: &'a [AlumniRecord]) -> DirectoryResponse<'a> {
    let mut view = DirectoryView::new(alumni);
    view.set_query(args.search.as_str());
    view.set_batch(args.batch.as_str());
    view.set_profession(args.profession.as_str());
    view.set_city(args.city.as_str());
    view.set_graduation_year(args.year.as_str());

    DirectoryResponse {
        page: view.render(),
        facets: args.facets.then(|| view.facets()),
    }
}
