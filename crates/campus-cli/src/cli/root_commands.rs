use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args, Subcommand};

/// Top-level command tree. Each invocation starts from a fresh session.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search and filter the alumni directory.
    Directory(DirectoryArgs),
    /// List events and toggle RSVPs.
    Events(EventsArgs),
    /// Browse mentors and send mentorship requests.
    Mentors(MentorsArgs),
    /// Show the donation summary or submit a donation.
    Donate(DonateArgs),
    /// Admin console tables (requires an admin sign-in).
    Admin(AdminArgs),
    /// Sign in or sign up and show the resulting session.
    Login(LoginArgs),
    /// List routes and the navigation links for a session.
    Routes(RoutesArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DirectoryArgs {
    /// Free-text search over name, profession and employer
    #[arg(long, default_value = "")]
    pub search: String,
    /// Exact batch label, e.g. 2014-2018
    #[arg(long, default_value = "")]
    pub batch: String,
    /// Exact profession
    #[arg(long, default_value = "")]
    pub profession: String,
    /// Exact city
    #[arg(long, default_value = "")]
    pub city: String,
    /// Exact graduation year
    #[arg(long, default_value = "")]
    pub year: String,
    /// Include the filter choices in the output
    #[arg(long)]
    pub facets: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EventsArgs {
    /// Which tab to render: upcoming or past
    #[arg(long, default_value = "upcoming")]
    pub tab: String,
    /// Evaluation instant (RFC 3339); defaults to the current time
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
    /// Toggle the RSVP for an event id; repeatable
    #[arg(long)]
    pub toggle: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MentorsArgs {
    /// Only show mentors with this expertise tag
    #[arg(long)]
    pub expertise: Option<String>,
    /// Request mentorship from a mentor id; repeatable
    #[arg(long)]
    pub request: Vec<String>,
}

// Without an amount the command prints the donation overview, so the
// donor flags are only accepted alongside `--preset` or `--custom`.
#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("amount").args(["preset", "custom"])))]
pub struct DonateArgs {
    /// Preset amount
    #[arg(long)]
    pub preset: Option<u64>,
    /// Custom amount
    #[arg(long)]
    pub custom: Option<String>,
    /// Purpose, e.g. scholarship or student-activities
    #[arg(long, requires = "amount")]
    pub purpose: Option<String>,
    /// Donate without name and email
    #[arg(long, requires = "amount")]
    pub anonymous: bool,
    #[arg(long, requires = "amount")]
    pub name: Option<String>,
    #[arg(long, requires = "amount")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AdminArgs {
    /// Sign in with this email before rendering
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, default_value = "")]
    pub password: String,
    /// Table to show: alumni, events or donations
    #[arg(long, default_value = "alumni")]
    pub tab: String,
    /// Case-insensitive query over the tab's searchable columns
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    /// Role: alumni, student or admin (sign-up rejects admin)
    #[arg(long)]
    pub role: Option<String>,
    /// Create an account instead of signing in
    #[arg(long, requires = "name")]
    pub sign_up: bool,
    /// Display name for sign-up
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RoutesArgs {
    /// Path to mark as active in the navigation
    #[arg(long, default_value = "/")]
    pub current: String,
    /// Build navigation for a signed-in user with this email
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, default_value = "")]
    pub password: String,
}
