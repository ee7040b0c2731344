use anyhow::Context;
use campus_views::events::{EventTab, EventsPage, EventsView, RsvpOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EventsArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_page;

#[derive(Debug, Serialize)]
struct RsvpResult {
    event_id: String,
    outcome: RsvpOutcome,
}

#[derive(Serialize)]
struct EventsResponse<'a> {
    rsvps: Vec<RsvpResult>,
    registrations: Vec<&'a str>,
    #[serde(flatten)]
    page: EventsPage<'a>,
}

#[derive(Debug, Serialize)]
struct EventRow<'a> {
    id: &'a str,
    title: &'a str,
    date: &'a str,
    time: &'a str,
    mode: &'static str,
    location: &'a str,
    seats: String,
    registered: bool,
}

pub fn handle(args: &EventsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab = parse_enum::<EventTab>(&args.tab, "tab")?;
    let now = args.now.unwrap_or_else(Utc::now);
    let mut view = EventsView::new(&ctx.fixtures.events, &ctx.config.events);

    let response = EventsResponse {
        rsvps: apply_toggles(&mut view, &args.toggle, now)?,
        registrations: view.registrations().iter().collect(),
        page: view.render(tab, now),
    };
    let rows = event_rows(&response.page);
    output_page(&response, &rows, flags.format)
}

/// Toggle each id in order. The first rejected toggle aborts the command.
fn apply_toggles(
    view: &mut EventsView<'_>,
    ids: &[String],
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<RsvpResult>> {
    let mut rsvps = Vec::with_capacity(ids.len());
    for id in ids {
        let outcome = view
            .toggle_rsvp(id, now)
            .with_context(|| format!("rsvp for event {id} failed"))?;
        rsvps.push(RsvpResult {
            event_id: id.clone(),
            outcome,
        });
    }
    Ok(rsvps)
}

fn event_rows<'a>(page: &'a EventsPage<'_>) -> Vec<EventRow<'a>> {
    page.events
        .iter()
        .map(|card| EventRow {
            id: &card.event.id,
            title: &card.event.title,
            date: &card.formatted_date,
            time: &card.event.time,
            mode: card.event.mode.as_str(),
            location: &card.event.location,
            seats: format!("{}/{}", card.event.registered_count, card.event.max_capacity),
            registered: card.registered,
        })
        .collect()
}
