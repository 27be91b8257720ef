//! Configuration initialization command.
//!
//! Runs the interactive setup wizard and saves the answers, so later
//! `compress` and `stretch` runs can omit `--target`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
