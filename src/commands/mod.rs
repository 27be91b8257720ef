pub mod init;
pub mod normalize;
pub mod show;
pub mod validate;

use crate::{
    libs::{
        messages::Message,
        normalizer::NormalizeMode,
        records::{RecordFile, RecordFormat},
        work_item::WorkItem,
    },
    msg_bail_anyhow, msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Shorten work items longer than the target duration")]
    Compress(normalize::NormalizeArgs),
    #[command(about = "Lengthen work items shorter than the target duration")]
    Stretch(normalize::NormalizeArgs),
    #[command(about = "Check that every work item ends after it starts")]
    Validate(validate::ValidateArgs),
    #[command(about = "Display work items from a file")]
    Show(show::ShowArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Compress(args) => normalize::cmd(NormalizeMode::Compress, args),
            Commands::Stretch(args) => normalize::cmd(NormalizeMode::Stretch, args),
            Commands::Validate(args) => validate::cmd(args),
            Commands::Show(args) => show::cmd(args),
        }
    }
}

/// Opens `path` and loads its work items, failing early when the file is missing.
fn read_input(path: &Path, format: Option<RecordFormat>) -> Result<(RecordFile, Vec<WorkItem>)> {
    let input = RecordFile::new(path, format)?;
    if !input.exists() {
        msg_bail_anyhow!(Message::InputFileNotFound(path.display().to_string()));
    }

    let items = input.read()?;
    msg_debug!(Message::RecordsLoaded(items.len(), path.display().to_string()));
    Ok((input, items))
}
