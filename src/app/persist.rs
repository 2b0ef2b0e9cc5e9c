//! Session token file (`session.json`) in the config directory.
//!
//! Persistence is best-effort: every failure is logged and otherwise ignored,
//! so a read-only config directory only costs the user a re-login.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// On-disk shape of the token file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    /// Opaque bearer token.
    token: String,
}

/// What: Read a previously saved token.
///
/// Inputs:
/// - `path`: Token file location
///
/// Output:
/// - `Some(token)` for a readable, well-formed, non-blank file; `None` otherwise.
pub fn load_session_token(path: &Path) -> Option<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Persist] Failed to read session file");
            return None;
        }
    };
    match serde_json::from_str::<SessionFile>(&raw) {
        Ok(SessionFile { token }) if !token.trim().is_empty() => {
            tracing::debug!(path = %path.display(), "[Persist] Restored session token");
            Some(token)
        }
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Persist] Ignoring malformed session file");
            None
        }
    }
}

/// What: Save `token` so the next start is already logged in.
///
/// Inputs:
/// - `path`: Token file location
/// - `token`: Token to store
///
/// Output: None; failures are logged.
///
/// Details:
/// - On unix the file is restricted to the owner (`0o600`).
pub fn save_session_token(path: &Path, token: &str) {
    let body = match serde_json::to_string(&SessionFile {
        token: token.to_string(),
    }) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "[Persist] Failed to encode session file");
            return;
        }
    };
    if let Err(e) = fs::write(path, body) {
        tracing::warn!(path = %path.display(), error = %e, "[Persist] Failed to write session file");
        return;
    }
    restrict_to_owner(path);
    tracing::debug!(path = %path.display(), "[Persist] Session token persisted");
}

/// Owner-only read/write on the token file.
#[cfg(unix)]
fn restrict_to_owner(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        tracing::warn!(path = %path.display(), error = %e, "[Persist] Failed to restrict session file mode");
    }
}

#[cfg(not(unix))]
const fn restrict_to_owner(_path: &Path) {}

/// What: Forget the saved token.
///
/// Inputs:
/// - `path`: Token file location
///
/// Output: None; a missing file is not an error.
pub fn clear_session_token(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "[Persist] Session token removed"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Persist] Failed to remove session file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Save, load, clear cycle
    ///
    /// - Input: Token "abc" written to a temp dir
    /// - Output: Loaded back; gone after clear; clearing twice is fine
    fn save_load_clear() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        assert_eq!(load_session_token(&path), None);
        save_session_token(&path, "abc");
        assert_eq!(load_session_token(&path).as_deref(), Some("abc"));
        clear_session_token(&path);
        assert!(!path.exists());
        clear_session_token(&path);
        assert_eq!(load_session_token(&path), None);
    }

    #[cfg(unix)]
    #[test]
    /// What: Saved token file is readable by the owner only
    ///
    /// - Input: Token saved over a pre-existing 0644 file
    /// - Output: Mode 0600
    fn saved_token_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").expect("write");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");
        save_session_token(&path, "abc");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(load_session_token(&path).as_deref(), Some("abc"));
    }

    #[test]
    /// What: Malformed and blank files are ignored
    ///
    /// - Input: Non-JSON content; JSON with a blank token
    /// - Output: `None` both times
    fn malformed_files_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").expect("write");
        assert_eq!(load_session_token(&path), None);
        fs::write(&path, r#"{"token":"  "}"#).expect("write");
        assert_eq!(load_session_token(&path), None);
    }
}
