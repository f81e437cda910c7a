//! Simple configuration persistence for the demo
//!
//! Stores user toggles like whether show/hide runs animated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Demo application configuration
#[derive(Debug)]
pub struct AppConfig {
    /// Animate show/hide transitions
    pub animations: bool,
    /// Forward haptic impulses (logged on desktop)
    pub haptics: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            animations: true,
            haptics: true,
        }
    }
}

impl AppConfig {
    /// Load config from the default location
    ///
    /// Returns default config if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path()).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Save config to the default location
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.serialize())
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flexpad")
            .join("config.txt")
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim() == "true";
                match key.trim() {
                    "animations" => config.animations = value,
                    "haptics" => config.haptics = value,
                    _ => {} // Ignore unknown keys
                }
            }
        }

        config
    }

    /// Serialize config to simple key=value format
    fn serialize(&self) -> String {
        format!(
            "# Flexpad configuration\nanimations={}\nhaptics={}",
            self.animations, self.haptics
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_gives_defaults() {
        let config = AppConfig::parse("");
        assert!(config.animations);
        assert!(config.haptics);
    }

    #[test]
    fn test_parse_toggles() {
        let config = AppConfig::parse("animations=false\nhaptics=true");
        assert!(!config.animations);
        assert!(config.haptics);
    }

    #[test]
    fn test_parse_ignores_comments_and_unknown_keys() {
        let config = AppConfig::parse("# comment\nfuture_key=7\nhaptics=false");
        assert!(config.animations);
        assert!(!config.haptics);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig {
            animations: false,
            haptics: true,
        };
        let parsed = AppConfig::parse(&config.serialize());
        assert!(!parsed.animations);
        assert!(parsed.haptics);
    }
}
