//! Reading and writing work item files.
//!
//! Work items enter and leave worknorm as CSV or JSON files. Both formats carry
//! the same fields in the same order:
//!
//! ```text
//! id,product,start,end,km,amount
//! 1,Product A,2026-01-01T08:00:00,2026-01-01T12:00:00,100.0,1000.0
//! ```
//!
//! JSON files hold an array of objects with those keys. Timestamps use
//! chrono's serde form (ISO 8601 without an offset).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worknorm::libs::records::{RecordFile, RecordFormat};
//!
//! let input = RecordFile::new("items.csv", None)?;
//! let items = input.read()?;
//! RecordFile::new("items.json", Some(RecordFormat::Json))?.write(&items)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::messages::Message;
use super::work_item::WorkItem;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// CSV header, also written for empty files so they read back cleanly.
pub const CSV_HEADER: [&str; 6] = ["id", "product", "start", "end", "km", "amount"];

/// On-disk representation of a list of work items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl RecordFormat {
    /// Infers the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(RecordFormat::Csv),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Json => "json",
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A work item file together with the format used to read or write it.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    format: RecordFormat,
}

impl RecordFile {
    /// Binds `path` to an explicit format, or to the one implied by its extension.
    ///
    /// # Errors
    ///
    /// Fails when no format is given and the extension is neither `csv` nor `json`.
    pub fn new(path: impl Into<PathBuf>, format: Option<RecordFormat>) -> Result<Self> {
        let path = path.into();
        let format = match format.or_else(|| RecordFormat::from_path(&path)) {
            Some(format) => format,
            None => return Err(msg_error_anyhow!(Message::UnknownRecordFormat(path.display().to_string()))),
        };
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads every work item from the file, in file order.
    pub fn read(&self) -> Result<Vec<WorkItem>> {
        let context = || Message::RecordFileReadFailed(self.path.display().to_string()).to_string();

        let items = match self.format {
            RecordFormat::Csv => {
                let mut reader = csv::Reader::from_path(&self.path).with_context(context)?;
                reader
                    .deserialize::<WorkItem>()
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(context)?
            }
            RecordFormat::Json => {
                let file = File::open(&self.path).with_context(context)?;
                serde_json::from_reader::<_, Vec<WorkItem>>(BufReader::new(file)).with_context(context)?
            }
        };

        tracing::debug!(path = %self.path.display(), format = %self.format, count = items.len(), "read work items");
        Ok(items)
    }

    /// Replaces the file's contents with `items`.
    pub fn write(&self, items: &[WorkItem]) -> Result<()> {
        let context = || Message::RecordFileWriteFailed(self.path.display().to_string()).to_string();

        match self.format {
            RecordFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_path(&self.path)
                    .with_context(context)?;
                writer.write_record(CSV_HEADER).with_context(context)?;
                for item in items {
                    writer.serialize(item).with_context(context)?;
                }
                writer.flush().with_context(context)?;
            }
            RecordFormat::Json => {
                let file = File::create(&self.path).with_context(context)?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, items).with_context(context)?;
                writer.flush().with_context(context)?;
            }
        }

        tracing::debug!(path = %self.path.display(), format = %self.format, count = items.len(), "wrote work items");
        Ok(())
    }
}
