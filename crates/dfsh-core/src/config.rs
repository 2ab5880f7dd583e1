use directories::{BaseDirs, ProjectDirs};
use eyre::{eyre, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

static CONFIG_DIR_OVERRIDE: Lazy<RwLock<Option<PathBuf>>> = Lazy::new(|| RwLock::new(None));

/// Override the configuration directory for the current process.
/// Subsequent calls replace the previous override.
pub fn set_config_dir<P: AsRef<Path>>(path: P) {
    *CONFIG_DIR_OVERRIDE.write() = Some(path.as_ref().to_path_buf());
}

/// Clear any previously configured override.
pub fn clear_config_dir_override() {
    CONFIG_DIR_OVERRIDE.write().take();
}

/// Resolve the configuration directory.
/// Priority: explicit override -> platform standard -> ~/.config/dfsh
pub fn config_dir() -> Result<PathBuf> {
    if let Some(path) = CONFIG_DIR_OVERRIDE.read().clone() {
        return Ok(path);
    }

    if let Some(proj) = ProjectDirs::from("com", "dfsh", "dfsh") {
        return Ok(proj.config_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".config").join("dfsh"));
    }

    Err(eyre!(
        "unable to determine configuration directory for dfsh (no override and no platform default)"
    ))
}

/// Default location of the shell configuration file.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("dfsh.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_clears() {
        set_config_dir("/tmp/dfsh-test-config");
        assert_eq!(
            config_dir().unwrap(),
            PathBuf::from("/tmp/dfsh-test-config")
        );
        assert_eq!(
            config_file().unwrap(),
            PathBuf::from("/tmp/dfsh-test-config/dfsh.toml")
        );
        clear_config_dir_override();
    }
}
