//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`; `RUST_LOG` still wins when set.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Read a password from the argument or an interactive prompt.
///
/// Inputs:
/// - `given`: Password passed on the command line, if any
///
/// Output: Password wrapped so it is wiped on drop.
///
/// # Errors
/// - Returns `Err` when the prompt cannot read from the terminal
pub fn password_or_prompt(given: Option<&str>) -> std::io::Result<zeroize::Zeroizing<String>> {
    match given {
        Some(p) => Ok(zeroize::Zeroizing::new(p.to_string())),
        None => rpassword::prompt_password("Password: ").map(zeroize::Zeroizing::new),
    }
}
