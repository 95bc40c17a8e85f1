//! # API Facade
//!
//! Thin dispatch layer between UIs and the command layer. It owns the
//! configured [`Codec`] and the config directory so callers never have to
//! thread them through by hand.
//!
//! The API does not print, format or exit; it returns [`CmdResult`]s. Tests
//! here only check dispatch; behaviour is covered in `commands/*.rs`.

use crate::codec::Codec;
use crate::commands;
use crate::config::InvisinkConfig;
use crate::error::Result;
use std::path::PathBuf;

pub struct InvisinkApi {
    codec: Codec,
    config_dir: PathBuf,
}

impl InvisinkApi {
    pub fn new(codec: Codec, config_dir: PathBuf) -> Self {
        Self { codec, config_dir }
    }

    /// Build the API from the config stored in `config_dir`.
    pub fn from_config_dir(config_dir: PathBuf) -> Result<Self> {
        let config = InvisinkConfig::load(&config_dir)?;
        Ok(Self::new(Codec::from_config(&config), config_dir))
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn encode(&self, plaintext: &str) -> Result<CmdResult> {
        commands::encode::run(&self.codec, plaintext)
    }

    pub fn decode(&self, hidden: &str) -> Result<CmdResult> {
        commands::decode::run(&self.codec, hidden)
    }

    pub fn wrap<I: AsRef<str>>(
        &self,
        entries: &[I],
        details_json: Option<&str>,
    ) -> Result<CmdResult> {
        commands::wrap::run(&self.codec, entries, details_json)
    }

    pub fn unwrap_note(&self, note: &str) -> Result<CmdResult> {
        commands::unwrap::run(&self.codec, note)
    }

    pub fn inspect(&self, note: &str) -> Result<CmdResult> {
        commands::inspect::run(note)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, InspectReport, MessageLevel};
