use anyhow::Context;
use campus_views::mentorship::{MentorCard, MentorshipPage, MentorshipView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MentorsArgs;
use crate::context::AppContext;
use crate::output::output_page;

#[derive(Debug, Serialize)]
struct RequestResult<'a> {
    mentor_id: &'a str,
    /// False when a request had already been sent this session.
    newly_requested: bool,
}

#[derive(Serialize)]
struct MentorsResponse<'a> {
    requests: Vec<RequestResult<'a>>,
    #[serde(flatten)]
    page: MentorshipPage<'a>,
}

#[derive(Debug, Serialize)]
struct MentorRow<'a> {
    id: &'a str,
    name: &'a str,
    employer: &'a str,
    expertise: String,
    mentees: u32,
    rating: f64,
    status: &'static str,
}

pub fn handle(args: &MentorsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = MentorshipView::new(&ctx.fixtures.mentors);
    if let Some(expertise) = &args.expertise {
        view.select_expertise(expertise.as_str());
    }

    let response = MentorsResponse {
        requests: send_requests(&mut view, &args.request)?,
        page: view.render(),
    };
    let rows = mentor_rows(&response.page);
    output_page(&response, &rows, flags.format)
}

/// Request each mentor in order, stopping at the first rejection.
fn send_requests<'a>(
    view: &mut MentorshipView<'_>,
    ids: &'a [String],
) -> anyhow::Result<Vec<RequestResult<'a>>> {
    let mut requests = Vec::with_capacity(ids.len());
    for id in ids {
        let newly_requested = view
            .request(id)
            .with_context(|| format!("mentorship request to {id} failed"))?;
        requests.push(RequestResult {
            mentor_id: id,
            newly_requested,
        });
    }
    Ok(requests)
}

/// Available mentors first, then unavailable ones.
fn mentor_rows<'a>(page: &'a MentorshipPage<'_>) -> Vec<MentorRow<'a>> {
    let available = page.available.iter().map(|card| (card, true));
    let unavailable = page.unavailable.iter().map(|card| (card, false));
    available
        .chain(unavailable)
        .map(|(card, is_available)| MentorRow {
            id: &card.mentor.id,
            name: &card.mentor.name,
            employer: &card.mentor.employer,
            expertise: card.mentor.expertise.join(", "),
            mentees: card.mentor.mentee_count,
            rating: card.mentor.rating,
            status: status(card, is_available),
        })
        .collect()
}

const fn status(card: &MentorCard<'_>, is_available: bool) -> &'static str {
    match (is_available, card.requested) {
        (false, _) => "unavailable",
        (true, true) => "requested",
        (true, false) => "available",
    }
}
