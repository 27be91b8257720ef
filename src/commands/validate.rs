//! Date range validation command.
//!
//! Prints every work item with a VALID column and fails when the list is
//! empty or any item ends at or before its start, so the command can gate a
//! pipeline step through its exit status.

use super::read_input;
use crate::{
    libs::{
        messages::Message,
        normalizer::{validate_date_range, validate_items},
        records::RecordFormat,
        view::View,
    },
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Work item file to check (.csv or .json)
    input: PathBuf,

    /// Record format, overriding the file extension
    #[arg(long, short, value_enum)]
    format: Option<RecordFormat>,
}

pub fn cmd(args: ValidateArgs) -> Result<()> {
    let (_, items) = read_input(&args.input, args.format)?;

    if items.is_empty() {
        msg_bail_anyhow!(Message::NoItemsToValidate);
    }

    msg_print!(Message::ValidationHeader, true);
    View::validation(&items)?;

    if !validate_items(Some(items.as_slice())) {
        let invalid = items.iter().filter(|item| !validate_date_range(Some(*item))).count();
        msg_bail_anyhow!(Message::ItemsInvalid(invalid, items.len()));
    }

    msg_success!(Message::ItemsValid(items.len()));
    Ok(())
}
