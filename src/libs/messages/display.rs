//! Display implementation for worknorm messages.
//!
//! Every piece of user-facing text is produced here, so wording stays in one
//! place and each message variant has to make an explicit formatting choice.
//!
//! ## Message Categories
//!
//! - **Normalize Messages**: Compress/stretch progress, results and previews
//! - **Validation Messages**: Date range validation outcomes
//! - **Record File Messages**: Loading and writing CSV/JSON work item files
//! - **Configuration Messages**: Setup wizard and persisted defaults
//! - **Prompts**: Interactive questions asked through dialoguer
//!
//! ## Usage Integration
//!
//! ```rust
//! use worknorm::libs::messages::Message;
//!
//! let message = Message::ItemsValid(10);
//! assert_eq!(message.to_string(), "All 10 work items have valid date ranges");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into human-readable text.
    ///
    /// Parameters are interpolated as-is; callers format dates and durations
    /// before building the message.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === NORMALIZE MESSAGES ===
            Message::NormalizeStarted { mode, count, target } => {
                format!("Running {} on {} work item(s) with target duration {}", mode, count, target)
            }
            Message::ItemsNormalized { mode, adjusted, total } => {
                format!("{}: adjusted {} of {} work item(s)", mode, adjusted, total)
            }
            Message::NormalizeFailed(error) => format!("Normalization failed: {}", error),
            Message::NormalizePreviewHeader => "Work items after normalization:".to_string(),
            Message::InvalidItemsWarning(count) => {
                format!("{} work item(s) end at or before their start and will be processed as-is", count)
            }
            Message::NoItemsToNormalize => "No work items to normalize.".to_string(),
            Message::TargetDurationNotSet(mode) => {
                format!("No target duration for {}. Pass --target or run 'worknorm init'.", mode)
            }

            // === VALIDATION MESSAGES ===
            Message::ValidationHeader => "Date range validation:".to_string(),
            Message::ItemsValid(count) => format!("All {} work items have valid date ranges", count),
            Message::ItemsInvalid(invalid, total) => {
                format!("{} of {} work item(s) have an end that is not after their start", invalid, total)
            }
            Message::NoItemsToValidate => "No work items found; an empty list is not valid.".to_string(),

            // === RECORD FILE MESSAGES ===
            Message::InputFileNotFound(path) => format!("Input file not found: {}", path),
            Message::RecordsLoaded(count, path) => format!("Loaded {} work item(s) from {}", count, path),
            Message::ResultWritten(count, path) => format!("Wrote {} work item(s) to {}", count, path),
            Message::RecordFileReadFailed(path) => format!("Failed to read work items from {}", path),
            Message::RecordFileWriteFailed(path) => format!("Failed to write work items to {}", path),
            Message::UnknownRecordFormat(path) => {
                format!("Cannot tell the format of '{}'. Use a .csv or .json extension or pass --format.", path)
            }
            Message::ConfirmOverwrite(path) => format!("{} already exists. Overwrite it?", path),
            Message::ItemsHeader(path) => format!("Work items in {}:", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleNormalizer => "Normalizer".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigTargetOutOfRange(mode, minutes) => {
                format!("Configured {} target of {} minutes is out of range", mode, minutes)
            }

            // === PROMPTS ===
            Message::PromptTargetDuration(mode) => format!("Target duration to {} to (e.g. 2h, 90m, 01:30)", mode),
            Message::PromptCompressTarget => "Default compress target (e.g. 2h, 90m, 01:30)".to_string(),
            Message::PromptStretchTarget => "Default stretch target (e.g. 8h, 480m, 08:00)".to_string(),
            Message::PromptOutputFormat => "Default output format".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::InvalidDurationInput => "Enter a positive duration such as 2h, 90m or 01:30".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
