pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flagquiz")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("flagquiz-no-such-dir").join("config.toml");
        let cfg = load_config_from(&path).unwrap();
        assert!(cfg.ui.animate_flags);
        assert_eq!(cfg.game.seed, None);
    }

    #[test]
    fn test_reads_file() {
        let dir = std::env::temp_dir().join(format!("flagquiz-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[game]\nseed = 7\n").unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.game.seed, Some(7));

        std::fs::write(&path, "[game\nseed = ").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
