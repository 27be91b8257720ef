//! Compress and stretch commands.
//!
//! Both commands read a work item file, pull every item's duration toward a
//! target, and either write the result to a new file or print it as a table.
//! The input file is never modified.
//!
//! ## Target Resolution
//!
//! 1. `--target` on the command line
//! 2. The configured default for the mode (`worknorm init`)
//! 3. An interactive prompt, unless `--force` is given
//!
//! Zero and negative targets are accepted by the parser and rejected by the
//! normalizer, so the user sees the same error whichever way the value
//! arrived.

use super::read_input;
use crate::{
    libs::{
        config::Config,
        formatter::{format_duration, parse_duration},
        messages::Message,
        normalizer::{validate_date_range, NormalizeMode, NormalizeSummary},
        records::{RecordFile, RecordFormat},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Duration;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Work item file to read (.csv or .json)
    input: PathBuf,

    /// Target duration (e.g. 2h, 90m, 1h30m, 01:30)
    #[arg(long, short, value_parser = parse_duration, allow_hyphen_values = true)]
    target: Option<Duration>,

    /// File to write the result to; prints a table when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Record format, overriding the file extensions
    #[arg(long, short, value_enum)]
    format: Option<RecordFormat>,

    /// Overwrite the output file and never prompt
    #[arg(long)]
    force: bool,
}

pub fn cmd(mode: NormalizeMode, args: NormalizeArgs) -> Result<()> {
    let config = Config::read()?;
    let (_, items) = read_input(&args.input, args.format)?;

    if items.is_empty() {
        msg_info!(Message::NoItemsToNormalize);
    }

    let invalid = items.iter().filter(|item| !validate_date_range(Some(*item))).count();
    if invalid > 0 {
        msg_warning!(Message::InvalidItemsWarning(invalid));
    }

    let target = resolve_target(mode, args.target, &config, args.force)?;
    msg_info!(Message::NormalizeStarted {
        mode: mode.to_string(),
        count: items.len(),
        target: format_duration(&target),
    });

    let result = mode
        .apply(Some(items.as_slice()), target)
        .map_err(|e| msg_error_anyhow!(Message::NormalizeFailed(e.to_string())))?;
    let summary = NormalizeSummary::between(&items, &result);

    match args.output {
        Some(path) => {
            let format = args.format.or_else(|| RecordFormat::from_path(&path)).unwrap_or(config.output_format());
            let output = RecordFile::new(path, Some(format))?;

            if output.exists() && !args.force {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmOverwrite(output.path().display().to_string()).to_string())
                    .default(false)
                    .interact()?;

                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }

            output.write(&result)?;
            msg_success!(Message::ResultWritten(result.len(), output.path().display().to_string()));
        }
        None => {
            msg_print!(Message::NormalizePreviewHeader, true);
            View::items(&result)?;
        }
    }

    View::summary(&summary)?;
    msg_success!(Message::ItemsNormalized {
        mode: mode.to_string(),
        adjusted: summary.adjusted,
        total: summary.total,
    });
    Ok(())
}

fn resolve_target(mode: NormalizeMode, flag: Option<Duration>, config: &Config, force: bool) -> Result<Duration> {
    if let Some(target) = flag.or_else(|| config.target_for(mode)) {
        return Ok(target);
    }
    if force {
        msg_bail_anyhow!(Message::TargetDurationNotSet(mode.to_string()));
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTargetDuration(mode.to_string()).to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_duration(input) {
                Ok(duration) if duration > Duration::zero() => Ok(()),
                _ => Err(Message::InvalidDurationInput.to_string()),
            }
        })
        .interact_text()?;

    Ok(parse_duration(&input)?)
}
