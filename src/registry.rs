//! Theme registry: themes selectable by name, one of them active.
//!
//! The registry owns every registered theme and is never empty, so there
//! is always an active theme to paint with. Registering a theme under an
//! existing name replaces the old record.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::builtin;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
    /// Always a key of `themes`.
    active: String,
}

impl ThemeRegistry {
    /// A registry holding only `initial`, which is active.
    pub fn new(initial: Theme) -> Self {
        let active = initial.name().to_string();
        let mut themes = BTreeMap::new();
        themes.insert(active.clone(), initial);
        ThemeRegistry { themes, active }
    }

    /// Registry with every built-in theme; `textual-dark` is active.
    pub fn with_builtins() -> Self {
        let mut registry = ThemeRegistry::new(builtin::textual_dark());
        for theme in builtin::all() {
            registry.register(theme);
        }
        registry
    }

    /// Make a theme selectable by name, returning any theme it replaced.
    ///
    /// Replacing the active theme keeps it active under the new colors.
    pub fn register(&mut self, theme: Theme) -> Option<Theme> {
        let name = theme.name().to_string();
        let previous = self.themes.insert(name.clone(), theme);
        if previous.is_some() {
            debug!(theme = %name, "replaced registered theme");
        } else {
            debug!(theme = %name, "registered theme");
        }
        previous
    }

    /// Register several themes in order, returning the names that
    /// replaced an already registered theme.
    pub fn register_all(&mut self, themes: impl IntoIterator<Item = Theme>) -> Vec<String> {
        let mut replaced = Vec::new();
        for theme in themes {
            let name = theme.name().to_string();
            if self.register(theme).is_some() {
                replaced.push(name);
            }
        }
        replaced
    }

    /// Switch the active theme.
    pub fn set_active(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.themes.contains_key(name) {
            return Err(RegistryError::UnknownTheme(name.to_string()));
        }
        if self.active != name {
            info!(from = %self.active, to = %name, "switched theme");
            self.active = name.to_string();
        }
        Ok(())
    }

    pub fn active(&self) -> &Theme {
        self.themes
            .get(&self.active)
            .expect("active theme is always registered")
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Registered themes, sorted by name.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}

// ============================================================================
// TESTS
// ============================================================================
