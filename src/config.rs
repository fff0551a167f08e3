//! Configuration file support
//!
//! Loads theme overrides from ~/.setanta-highlight.toml (or
//! %USERPROFILE%\.setanta-highlight.toml on Windows)
//!
//! Each `[theme.<class>]` table restyles one token class. Fields left out
//! keep the class's default style.
//!
//! Example:
//! ```toml
//! [theme.keyword]
//! fg = "bright-magenta"
//! bold = true
//!
//! [theme.function-name]
//! fg = "yellow"
//! underline = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{HighlightError, Result};
use crate::syntax::{Color, Style, Theme, TokenClass};

const CONFIG_FILE: &str = ".setanta-highlight.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    theme: BTreeMap<String, StyleEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleEntry {
    fg: Option<String>,
    bg: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
}

impl StyleEntry {
    /// Apply the fields present in this entry on top of `base`
    fn apply(&self, base: Style) -> Result<Style> {
        let mut style = base;
        if let Some(fg) = &self.fg {
            style = style.with_fg(Color::from_name(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.with_bg(Color::from_name(bg)?);
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(italic) = self.italic {
            style.italic = italic;
        }
        if let Some(underline) = self.underline {
            style.underline = underline;
        }
        Ok(style)
    }
}

/// Configuration settings
#[derive(Debug, Clone, Default)]
pub struct Config {
    theme: Theme,
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried, and its absence just means the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::config_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => HighlightError::ConfigNotFound(path.to_path_buf()),
            _ => HighlightError::Io(err),
        })?;
        let config = Self::parse(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;

        let mut theme = Theme::default();
        for (name, entry) in &file.theme {
            let class = TokenClass::from_name(name)
                .ok_or_else(|| HighlightError::UnknownTokenClass(name.clone()))?;
            theme.set(class, entry.apply(class.default_style())?);
        }

        Ok(Self { theme })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
