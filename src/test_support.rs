use crate::context::{DataContext, DATA_DIR_ENV};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Points `PROMPTFLOW_DIR` at a fresh temp directory for the lifetime of a
/// test, restoring the previous value on drop.
pub(crate) struct DataDirGuard {
    dir: TempDir,
    previous: Option<std::ffi::OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirGuard {
    pub(crate) fn new() -> Self {
        // Mutating the process environment is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let dir = TempDir::new().unwrap();
        let previous = std::env::var_os(DATA_DIR_ENV);
        unsafe { std::env::set_var(DATA_DIR_ENV, dir.path()) };
        Self {
            dir,
            previous,
            _lock: lock,
        }
    }

    /// A context resolving to the guarded temp directory.
    pub(crate) fn ctx(&self) -> DataContext {
        DataContext::at(self.dir.path())
    }
}

impl Drop for DataDirGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(DATA_DIR_ENV, value),
                None => std::env::remove_var(DATA_DIR_ENV),
            }
        }
    }
}
