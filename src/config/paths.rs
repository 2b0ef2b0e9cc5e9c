use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config base.
const APP_DIR: &str = "storefront";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    home_default
        .iter()
        .fold(PathBuf::from(home), |base, seg| base.join(seg))
}

/// Create `dir` if missing; failures are logged and the path returned anyway.
fn ensure(dir: PathBuf) -> PathBuf {
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "[Config] Could not create directory");
    }
    dir
}

/// Config directory: `$XDG_CONFIG_HOME/storefront`, else `$HOME/.config/storefront` (ensured to exist)
pub fn config_dir() -> PathBuf {
    ensure(xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR))
}

/// Logs directory under config (ensured to exist)
pub fn logs_dir() -> PathBuf {
    ensure(config_dir().join("logs"))
}

/// `settings.toml` inside `dir`.
#[must_use]
pub fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join("settings.toml")
}

/// `session.json` inside `dir`.
#[must_use]
pub fn session_path_in(dir: &Path) -> PathBuf {
    dir.join("session.json")
}

/// Settings file in the config directory.
pub fn settings_path() -> PathBuf {
    settings_path_in(&config_dir())
}

/// Persisted session token file in the config directory.
pub fn session_path() -> PathBuf {
    session_path_in(&config_dir())
}
