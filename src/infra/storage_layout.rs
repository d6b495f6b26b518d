use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "caseboard";
const LOG_FILE_NAME: &str = "caseboard.log";

/// Filesystem locations used by the dashboard. Case data is never written;
/// only logs land on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        let config_dir = config_base.join(APP_DIR_NAME);
        let log_dir = config_dir.join("logs");

        Ok(Self {
            config_dir,
            log_dir,
        })
    }

    /// Replaces the log directory, e.g. from `[logging] directory`.
    pub fn with_log_dir(mut self, log_dir: Option<PathBuf>) -> Self {
        if let Some(log_dir) = log_dir {
            self.log_dir = log_dir;
        }
        self
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn log_file_name(&self) -> &'static str {
        LOG_FILE_NAME
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{env_lock, EnvVarGuard};

    #[test]
    fn logs_are_under_config_dir() {
        let _guard = env_lock();
        let layout = StorageLayout::resolve().expect("layout should resolve");

        assert!(layout.log_dir.starts_with(&layout.config_dir));
        assert!(layout.config_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn xdg_config_home_takes_precedence() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let _xdg = EnvVarGuard::set("XDG_CONFIG_HOME", dir.path());

        let layout = StorageLayout::resolve().expect("layout should resolve");

        assert_eq!(layout.config_dir, dir.path().join(APP_DIR_NAME));
    }

    #[test]
    fn ensure_dirs_creates_overridden_log_dir() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let _xdg = EnvVarGuard::set("XDG_CONFIG_HOME", dir.path());
        let custom = dir.path().join("custom-logs");

        let layout = StorageLayout::resolve()
            .expect("layout should resolve")
            .with_log_dir(Some(custom.clone()));
        layout.ensure_dirs().expect("dirs should be created");

        assert!(custom.is_dir());
        assert!(layout.config_dir.is_dir());
    }
}
