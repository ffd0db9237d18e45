//! Path utilities for startingxi.
//!
//! User data lives under `~/.startingxi/`:
//! - `~/.startingxi/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the startingxi home directory (`~/.startingxi/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".startingxi")
}

/// Returns the default config file path (`~/.startingxi/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_under_home() {
        let path = default_config();
        assert!(path.starts_with(home_dir()));
        assert!(path.ends_with(".startingxi/config.toml"));
    }
}
