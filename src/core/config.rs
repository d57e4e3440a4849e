use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print() -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            // Nothing on disk yet: show the effective defaults.
            let yaml = serde_yaml::to_string(&Config::load()?)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
            return Ok(());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "nano".into());

        Command::new(ed)
            .arg(Config::config_file())
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}
