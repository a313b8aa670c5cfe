#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::HOME_ENV_VAR;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the data directory environment
/// variable. Parallel tests would otherwise observe each other's values.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points the data directory at a temp directory for a test
/// scope and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another
/// thread may read the environment concurrently. Every test that touches the
/// variable holds `HOME_LOCK` through this guard, so modifications are serial,
/// and the original value is restored on drop, including on panic.
pub struct HomeGuard {
    original: Option<String>,
    // Held for the lifetime of the guard
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under HOME_LOCK"
)]
impl HomeGuard {
    /// Create a new guard that sets the data directory base to `temp_dir`.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A previous test panicking while holding the lock must not poison the rest
        let lock = HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(HOME_ENV_VAR).ok();
        // SAFETY: HOME_LOCK is held, so no other test reads or writes the variable.
        unsafe {
            std::env::set_var(HOME_ENV_VAR, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: HOME_LOCK is still held by this guard.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV_VAR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_guard_restores_value() {
        let before = std::env::var(HOME_ENV_VAR).ok();
        {
            let temp_dir = create_test_dir();
            let _guard = HomeGuard::new(&temp_dir);
            assert_eq!(
                std::env::var(HOME_ENV_VAR).unwrap(),
                temp_dir.path().to_string_lossy()
            );
        }
        // Another test may hold the lock now, so only check when unset before
        if before.is_none() {
            let _lock = HOME_LOCK
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            assert!(std::env::var(HOME_ENV_VAR).is_err());
        }
    }
}
