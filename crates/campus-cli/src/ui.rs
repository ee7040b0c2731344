//! Terminal preferences for table output, resolved once per invocation.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// `COLUMNS` below this leaves tables unclipped.
const MIN_TABLE_WIDTH: usize = 40;

/// How `campus --format table` lays out rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color status cells such as `registered`, `full` or `unavailable`.
    pub table_color: bool,
    /// Clip the widest columns to fit this width.
    pub term_width: Option<usize>,
}

/// What the process can observe about its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal<'a> {
    is_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: Terminal<'_>) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.is_tty && table && !flags.quiet && !terminal.no_color,
        };

        let term_width = terminal
            .columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let terminal = Terminal {
        is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: columns.as_deref(),
    };
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, terminal));
}

/// Preferences set by [`init`], or plain unclipped tables before it runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
