//! Catalog path resolution.
//!
//! - `/...` is absolute
//! - `~` and `~/...` are relative to the user's home directory
//! - anything else, including `./...`, is relative to the current directory

use crate::error::{MediaError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub fn resolve(raw: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    resolve_in(raw, &cwd, home.as_deref())
}

/// Resolves `raw` against explicit working and home directories.
pub fn resolve_in(raw: &str, cwd: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MediaError::InvalidPath("empty path".to_string()));
    }
    if raw.contains('\0') {
        return Err(MediaError::InvalidPath(raw.escape_default().to_string()));
    }

    if raw.starts_with('/') {
        return Ok(PathBuf::from(raw));
    }

    if let Some(rest) = raw.strip_prefix('~') {
        if !rest.is_empty() && !rest.starts_with('/') {
            // ~user is not supported
            return Err(MediaError::InvalidPath(raw.to_string()));
        }
        let home = home.ok_or_else(|| {
            MediaError::InvalidPath(format!("{}: home directory is unknown", raw))
        })?;
        let rest = rest.trim_start_matches('/');
        return Ok(if rest.is_empty() {
            home.to_path_buf()
        } else {
            home.join(rest)
        });
    }

    Ok(cwd.join(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/work")
    }

    fn home() -> PathBuf {
        PathBuf::from("/home/paul")
    }

    #[test]
    fn absolute_paths_are_kept() {
        let path = resolve_in("/data/lib.json", &cwd(), Some(&home())).unwrap();
        assert_eq!(path, PathBuf::from("/data/lib.json"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let path = resolve_in("~/lib.json", &cwd(), Some(&home())).unwrap();
        assert_eq!(path, PathBuf::from("/home/paul/lib.json"));
        assert_eq!(resolve_in("~", &cwd(), Some(&home())).unwrap(), home());
    }

    #[test]
    fn tilde_without_home_is_invalid() {
        let err = resolve_in("~/lib.json", &cwd(), None).unwrap_err();
        assert!(matches!(err, MediaError::InvalidPath(_)));
        let err = resolve_in("~paul/lib.json", &cwd(), Some(&home())).unwrap_err();
        assert!(matches!(err, MediaError::InvalidPath(_)));
    }

    #[test]
    fn dot_and_bare_paths_are_relative_to_cwd() {
        let dotted = resolve_in("./lib.json", &cwd(), Some(&home())).unwrap();
        assert_eq!(dotted, PathBuf::from("/work/./lib.json"));
        assert!(dotted.ends_with("lib.json"));

        let bare = resolve_in("lib.json", &cwd(), Some(&home())).unwrap();
        assert_eq!(bare, PathBuf::from("/work/lib.json"));

        let parent = resolve_in("../lib.json", &cwd(), Some(&home())).unwrap();
        assert_eq!(parent, PathBuf::from("/work/../lib.json"));
    }

    #[test]
    fn empty_path_is_invalid() {
        assert!(matches!(
            resolve_in("  ", &cwd(), None),
            Err(MediaError::InvalidPath(_))
        ));
    }
}
