use crate::commands::{CmdMessage, CmdResult};
use crate::config::SnipzConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SnipzConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SnipzConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SnipzConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query::SortOrder;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_reports() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("default-sort".into(), "oldest".into()),
        )
        .unwrap();
        assert_eq!(result.config.unwrap().default_sort, SortOrder::Oldest);
        assert_eq!(result.messages[0].content, "default-sort set to oldest");

        let shown = run(dir.path(), ConfigAction::ShowKey("default-sort".into())).unwrap();
        assert_eq!(shown.messages[0].content, "oldest");
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }

    #[test]
    fn invalid_set_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(
            dir.path(),
            ConfigAction::Set("seed-samples".into(), "perhaps".into())
        )
        .is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
