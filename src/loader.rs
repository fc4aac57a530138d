//! User theme files: JSON theme definitions in a config directory.
//!
//! Each `*.json` file holds one [`ThemeDef`]. A bad file is reported and
//! skipped; it never prevents the other themes from loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::theme::{Theme, ThemeError};
use crate::types::ThemeDef;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid theme JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid theme in {path}: {source}")]
    Theme { path: PathBuf, source: ThemeError },
}

/// Themes found in a directory plus the files that failed.
#[derive(Debug, Default)]
pub struct LoadedThemes {
    pub themes: Vec<Theme>,
    pub failures: Vec<LoadError>,
}

/// Where user themes live by default.
pub fn default_theme_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nerv-theme")
        .join("themes")
}

/// Load a single theme file.
pub fn load_theme_file(path: &Path) -> Result<Theme, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let def: ThemeDef = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Theme::from_def(&def).map_err(|source| LoadError::Theme {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` theme in `dir`, in path order.
///
/// A missing directory is not an error: it yields no themes.
pub fn load_theme_dir(dir: &Path) -> LoadedThemes {
    let mut loaded = LoadedThemes::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "no user theme directory");
            return loaded;
        }
        Err(source) => {
            loaded.failures.push(LoadError::Io {
                path: dir.to_path_buf(),
                source,
            });
            return loaded;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        match load_theme_file(&path) {
            Ok(theme) => {
                debug!(theme = %theme.name(), path = %path.display(), "loaded user theme");
                loaded.themes.push(theme);
            }
            Err(e) => {
                warn!("{}", e);
                loaded.failures.push(e);
            }
        }
    }

    loaded
}

// ============================================================================
// TESTS
// ============================================================================
