//! Resolver Configuration
//!
//! Locates the skills directory. The CLI flag wins, then the
//! `SKILLDEP_SKILLS_DIR` environment variable, then `./skills`.

use std::path::PathBuf;

/// Environment variable overriding the default skills directory.
pub const SKILLS_DIR_ENV: &str = "SKILLDEP_SKILLS_DIR";

/// Default skills directory relative to the working directory.
pub const DEFAULT_SKILLS_DIR: &str = "skills";

/// Resolve the skills directory from an optional CLI override.
pub fn skills_dir(cli_override: Option<&str>) -> String {
    if let Some(dir) = cli_override {
        return resolve_path(dir);
    }
    match std::env::var(SKILLS_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => resolve_path(&dir),
        _ => DEFAULT_SKILLS_DIR.to_string(),
    }
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's home
/// directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}
