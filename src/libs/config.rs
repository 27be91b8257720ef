//! Persistent configuration for worknorm.
//!
//! Settings live in `config.json` inside the directory resolved by
//! [`DataStorage`]. A missing file is not an error: [`Config::read`] falls back
//! to [`Config::default`], which leaves every module unset so that command-line
//! flags and interactive prompts decide.
//!
//! ## Modules
//!
//! - **Normalizer**: default compress and stretch targets (in minutes) and the
//!   default output format for result files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worknorm::libs::config::Config;
//! use worknorm::libs::normalizer::NormalizeMode;
//!
//! let config = Config::read()?;
//! if let Some(target) = config.target_for(NormalizeMode::Compress) {
//!     println!("compressing to {}", target);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::{format_duration, parse_duration};
use super::messages::Message;
use super::normalizer::NormalizeMode;
use super::records::RecordFormat;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::{Context, Result};
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Defaults applied by the `compress` and `stretch` commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormalizerConfig {
    /// Target duration for `compress`, in minutes.
    pub compress_target: u64,

    /// Target duration for `stretch`, in minutes.
    pub stretch_target: u64,

    /// Format used for result files whose extension says nothing.
    #[serde(default)]
    pub output_format: RecordFormat,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<NormalizerConfig>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            compress_target: 120,
            stretch_target: 480,
            output_format: RecordFormat::Csv,
        }
    }
}

impl NormalizerConfig {
    pub fn minutes_for(&self, mode: NormalizeMode) -> u64 {
        match mode {
            NormalizeMode::Compress => self.compress_target,
            NormalizeMode::Stretch => self.stretch_target,
        }
    }

    /// Configured target for `mode`, `None` when the minutes do not fit a `Duration`.
    ///
    /// A stored value of zero is returned as a zero duration and rejected
    /// later by the normalizer.
    pub fn target_for(&self, mode: NormalizeMode) -> Option<Duration> {
        i64::try_from(self.minutes_for(mode)).ok().and_then(Duration::try_minutes)
    }

    /// Fails when a stored target is too large to be used as a duration.
    pub fn check(&self) -> Result<()> {
        for mode in [NormalizeMode::Compress, NormalizeMode::Stretch] {
            if self.target_for(mode).is_none() {
                msg_bail_anyhow!(Message::ConfigTargetOutOfRange(mode.to_string(), self.minutes_for(mode)));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let parse_error = || Message::ConfigParseError(config_file_path.display().to_string()).to_string();
        let config: Config = serde_json::from_str(&config_str).with_context(parse_error)?;
        if let Some(normalizer) = &config.normalizer {
            normalizer.check().with_context(parse_error)?;
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Configured target for `mode`, if the normalizer module is set up.
    pub fn target_for(&self, mode: NormalizeMode) -> Option<Duration> {
        self.normalizer.as_ref().and_then(|normalizer| normalizer.target_for(mode))
    }

    /// Default output format, CSV when nothing is configured.
    pub fn output_format(&self) -> RecordFormat {
        self.normalizer.as_ref().map(|normalizer| normalizer.output_format).unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ConfigModule {
            key: "normalizer".to_string(),
            name: Message::ConfigModuleNormalizer.to_string(),
        }];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            if modules[selection].key == "normalizer" {
                let default = config.normalizer.clone().unwrap_or_default();
                msg_print!(Message::ConfigModuleNormalizer);

                let compress_target = prompt_minutes(Message::PromptCompressTarget, default.compress_target)?;
                let stretch_target = prompt_minutes(Message::PromptStretchTarget, default.stretch_target)?;

                let formats = [RecordFormat::Csv, RecordFormat::Json];
                let format_index = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptOutputFormat.to_string())
                    .items(&formats)
                    .default(formats.iter().position(|format| *format == default.output_format).unwrap_or(0))
                    .interact()?;

                config.normalizer = Some(NormalizerConfig {
                    compress_target,
                    stretch_target,
                    output_format: formats[format_index],
                });
            }
        }

        Ok(config)
    }
}

// Asks for a positive duration and returns it in whole minutes.
fn prompt_minutes(prompt: Message, default_minutes: u64) -> Result<u64> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(format_duration(&Duration::minutes(default_minutes as i64)))
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_duration(input) {
                Ok(duration) if duration.num_minutes() > 0 => Ok(()),
                _ => Err(Message::InvalidDurationInput.to_string()),
            }
        })
        .interact_text()?;

    let duration = parse_duration(&input)?;
    Ok(duration.num_minutes() as u64)
}
