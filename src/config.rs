use crate::errors::{CabinetError, CabinetResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub lawyer_name: String,
    pub practice_name: String,
    pub city: String,
    pub reply_delay_ms: u64,
    pub analysis_delay_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lawyer_name: "Me. Abousaid".to_string(),
            practice_name: "Cabinet Abousaid Taher".to_string(),
            city: "Marrakech".to_string(),
            reply_delay_ms: 1_000,
            analysis_delay_ms: 2_500,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> CabinetResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config = load_config_from(&config_path)?;
        validate_config(&config)?;
        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            CabinetError::config_error(format!("Failed to create config directory: {}", e))
        })?;
        write_config_to(&config_path, &config)?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> CabinetResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| CabinetError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("cabinet").join("config.json"))
}

fn load_config_from(path: &Path) -> CabinetResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| CabinetError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| CabinetError::config_error(format!("Failed to parse config: {}", e)))
}

fn write_config_to(path: &Path, config: &Config) -> CabinetResult<()> {
    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| CabinetError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| CabinetError::config_error(format!("Failed to write config file: {}", e)))
}

fn validate_config(config: &Config) -> CabinetResult<()> {
    if config.lawyer_name.is_empty() {
        return Err(CabinetError::config_error("lawyer_name is required"));
    }

    if config.practice_name.is_empty() {
        return Err(CabinetError::config_error("practice_name is required"));
    }

    if config.reply_delay_ms == 0 {
        return Err(CabinetError::config_error(
            "reply_delay_ms must be greater than 0",
        ));
    }

    if config.analysis_delay_ms == 0 {
        return Err(CabinetError::config_error(
            "analysis_delay_ms must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> CabinetResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    write_config_to(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_lawyer_name() {
        let mut config = Config::default();
        config.lawyer_name = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_reply_delay() {
        let mut config = Config::default();
        config.reply_delay_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.reply_delay_ms = 250;
        config.city = "Rabat".to_string();

        write_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.reply_delay_ms, 250);
        assert_eq!(loaded.city, "Rabat");
        assert_eq!(loaded.lawyer_name, config.lawyer_name);
    }
}
