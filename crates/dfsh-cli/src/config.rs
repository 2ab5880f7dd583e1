use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use eyre::{Context, Result};

/// Shell configuration, read from `dfsh.toml` in the config directory.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShellConfig {
    /// Filesystem URI to attach when --fs is not given
    pub filesystem: Option<String>,
    /// Diagnostic log destination when --log-file is not given
    pub log_file: Option<PathBuf>,
}

impl ShellConfig {
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;

        let config: ShellConfig =
            toml::from_str(&content).wrap_err("failed to parse config file")?;

        Ok(config)
    }

    /// Load the default config file; absent file means defaults.
    pub fn load_default() -> Result<Self> {
        let path = dfsh_core::config::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}
