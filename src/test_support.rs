use std::{
    env,
    ffi::{OsStr, OsString},
    sync::{Mutex, MutexGuard},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets an environment variable for the guard's lifetime. Hold `env_lock`
/// while this is alive.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            // SAFETY: restoring env while guard is held.
            Some(value) => unsafe { env::set_var(self.key, value) },
            // SAFETY: restoring env while guard is held.
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
