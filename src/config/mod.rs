//! On-disk configuration: directory layout and `settings.toml`.

pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir, session_path, settings_path};
pub use settings::{SKELETON_SETTINGS_CONTENT, Settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
