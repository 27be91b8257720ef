use super::read_input;
use crate::{
    libs::{messages::Message, records::RecordFormat, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Work item file to display (.csv or .json)
    input: PathBuf,

    /// Record format, overriding the file extension
    #[arg(long, short, value_enum)]
    format: Option<RecordFormat>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let (input, items) = read_input(&args.input, args.format)?;

    msg_print!(Message::ItemsHeader(input.path().display().to_string()), true);
    View::items(&items)?;
    Ok(())
}
