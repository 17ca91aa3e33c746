#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use std::ffi::OsString;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that modify environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary test directory that is removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that sets an environment variable for a test scope and restores
/// the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another
/// thread may read the environment concurrently. The guard holds `ENV_LOCK` for
/// its whole lifetime, so tests touching the environment run one at a time, and
/// the original value is restored on drop even if the test panics.
pub struct EnvVarGuard {
    key: &'static str,
    original: Option<OsString>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation serialized by ENV_LOCK"
)]
impl EnvVarGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &'static str, value: impl AsRef<Path>) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(key);
        // SAFETY: ENV_LOCK is held, no other test mutates the environment concurrently.
        unsafe {
            std::env::set_var(key, value.as_ref());
        }
        Self {
            key,
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only environment mutation serialized by ENV_LOCK"
)]
impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: ENV_LOCK is still held by this guard.
        unsafe {
            match &self.original {
                Some(original) => std::env::set_var(self.key, original),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_guard_restores_value() {
        let key = "HLR_UNITS_TEST_GUARD";
        {
            let dir = create_test_dir();
            let _guard = EnvVarGuard::set(key, dir.path());
            assert_eq!(std::env::var_os(key).unwrap(), dir.path().as_os_str());
        }
        assert!(std::env::var_os(key).is_none());
    }
}
