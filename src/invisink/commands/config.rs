use crate::commands::{CmdMessage, CmdResult};
use crate::config::InvisinkConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Every action reads the file without validating it, so `config` stays
/// usable while the stored values are out of range.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config = InvisinkConfig::load_unchecked(dir)?;
    match action {
        ConfigAction::ShowAll => {
            let mut result = CmdResult::default();
            warn_if_invalid(&config, &mut result);
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    InvisinkConfig::keys().join(", ")
                ))),
            }
            warn_if_invalid(&config, &mut result);
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = config;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

fn warn_if_invalid(config: &InvisinkConfig, result: &mut CmdResult) {
    if let Err(e) = config.validate() {
        result.add_message(CmdMessage::warning(format!(
            "{}; other commands will refuse this config until it is fixed",
            e
        )));
    }
}
