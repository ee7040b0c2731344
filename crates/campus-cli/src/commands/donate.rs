use anyhow::Context;
use campus_config::DonationsConfig;
use campus_core::entities::DonationRecord;
use campus_core::enums::DonationPurpose;
use campus_views::donations::{DonationForm, DonationReceipt, DonationSummary, summarize};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DonateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_page};

#[derive(Debug, Serialize)]
struct PurposeOption {
    value: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct DonationOverview {
    presets: Vec<u64>,
    default_purpose: DonationPurpose,
    purposes: Vec<PurposeOption>,
    #[serde(flatten)]
    summary: DonationSummary,
}

pub fn handle(args: &DonateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !wants_submission(args) {
        let overview = overview(&ctx.config.donations, &ctx.fixtures.donations);
        return output_page(&overview, &overview.summary.recent, flags.format);
    }
    let receipt = submit(args, &ctx.config.donations)?;
    output(&receipt, flags.format)
}

/// An amount turns the command from the overview into a submission.
const fn wants_submission(args: &DonateArgs) -> bool {
    args.preset.is_some() || args.custom.is_some()
}

fn overview(config: &DonationsConfig, donations: &[DonationRecord]) -> DonationOverview {
    let form = DonationForm::new(config);
    DonationOverview {
        presets: form.presets().to_vec(),
        default_purpose: form.purpose,
        purposes: DonationPurpose::ALL
            .iter()
            .map(|purpose| PurposeOption {
                value: purpose.as_str(),
                label: purpose.label(),
            })
            .collect(),
        summary: summarize(donations),
    }
}

/// Fill the form from the flags and submit it.
fn submit(args: &DonateArgs, config: &DonationsConfig) -> anyhow::Result<DonationReceipt> {
    let mut form = DonationForm::new(config);
    if let Some(preset) = args.preset {
        form.select_preset(preset)?;
    }
    if let Some(custom) = &args.custom {
        form.enter_custom_amount(custom);
    }
    if let Some(purpose) = &args.purpose {
        form.set_purpose(parse_enum(purpose, "purpose")?);
    }
    form.set_anonymous(args.anonymous);
    form.set_donor(
        args.name.clone().unwrap_or_default(),
        args.email.clone().unwrap_or_default(),
    );

    form.submit()
        .with_context(|| format!("'{}' was not accepted", form.button_label()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::Commands;
    use crate::commands::shared::testing::{command, context};

    fn donate(args: &[&str]) -> DonateArgs {
        let argv: Vec<&str> = std::iter::once("donate").chain(args.iter().copied()).collect();
        match command(&argv) {
            Commands::Donate(args) => args,
            other => panic!("expected donate, got {other:?}"),
        }
    }

    #[test]
    fn bare_donate_shows_the_overview() {
        let ctx = context();
        let args = donate(&[]);
        assert!(!wants_submission(&args));

        let overview = overview(&ctx.config.donations, &ctx.fixtures.donations);
        assert_eq!(overview.presets, vec![25, 50, 100, 250, 500, 1000]);
        assert_eq!(overview.default_purpose, DonationPurpose::Scholarship);
        assert_eq!(overview.purposes.len(), DonationPurpose::ALL.len());
        assert_eq!(overview.summary.total_donated, 4000);
    }

    #[test]
    fn an_amount_switches_to_submission() {
        assert!(wants_submission(&donate(&["--preset", "100"])));
        assert!(wants_submission(&donate(&["--custom", "75"])));
    }

    #[test]
    fn anonymous_preset_is_acknowledged() {
        let ctx = context();
        let args = donate(&["--preset", "250", "--purpose", "research", "--anonymous"]);
        let receipt = submit(&args, &ctx.config.donations).expect("valid donation");
        assert!((receipt.amount - 250.0).abs() < f64::EPSILON);
        assert_eq!(receipt.purpose, DonationPurpose::Research);
        assert!(receipt.donor.is_none());
    }

    #[test]
    fn missing_donor_details_name_the_button() {
        let ctx = context();
        let args = donate(&["--custom", "75"]);
        let error = submit(&args, &ctx.config.donations).expect_err("donor details required");
        assert_eq!(error.to_string(), "'Donate $75' was not accepted");
        assert!(format!("{error:#}").contains("donor name and email are required"));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let ctx = context();
        let args = donate(&["--preset", "42", "--anonymous"]);
        let error = submit(&args, &ctx.config.donations).expect_err("42 is not offered");
        assert_eq!(error.to_string(), "42 is not one of the preset amounts");
    }
}
