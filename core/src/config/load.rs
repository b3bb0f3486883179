use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Path of the per-user config file: ~/.kvsplit/config.toml
pub fn home_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".kvsplit").join("config.toml"))
}

/// Loads configuration without side effects.
///
/// Priority: ~/.kvsplit/config.toml, then ./kvsplit.toml, then built-in
/// defaults. Nothing is created on disk; the defaults leave the convert
/// operation reading only standard input.
pub fn load_default() -> anyhow::Result<AppConfig> {
    if let Ok(home_config) = home_config_path() {
        if home_config.exists() {
            return load_from(&home_config);
        }
    }

    let local_config = Path::new("kvsplit.toml");
    if local_config.exists() {
        return load_from(local_config);
    }

    Ok(AppConfig::default())
}

fn load_from(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
