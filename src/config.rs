use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::i18n::{BundleSource, Locale};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Dictionaries
    /// Directory holding `{code}/common.json` bundles; embedded bundles when unset
    pub locales_dir: Option<PathBuf>,
    pub dictionary_cache: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: '{value}'"))?,
            Err(_) => 8080,
        };

        let locales_dir = std::env::var("LOCALES_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        if let Some(dir) = &locales_dir {
            if !dir.is_dir() {
                bail!("LOCALES_DIR does not exist: {}", dir.display());
            }
        }

        Ok(Self {
            port,
            locales_dir,
            dictionary_cache: std::env::var("DICTIONARY_CACHE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        })
    }

    pub fn bundle_source(&self) -> BundleSource {
        match &self.locales_dir {
            Some(dir) => BundleSource::Directory(dir.clone()),
            None => BundleSource::Embedded,
        }
    }

    /// Locale codes whose bundle is missing from `locales_dir`.
    ///
    /// Startup only warns about these; requests for them fall back to the
    /// default locale.
    pub fn missing_bundles(&self) -> Vec<&'static str> {
        let Some(dir) = &self.locales_dir else {
            return Vec::new();
        };

        Locale::all()
            .into_iter()
            .filter(|locale| !crate::i18n::bundle_path(dir, *locale).is_file())
            .map(|locale| locale.code())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            locales_dir: None,
            dictionary_cache: true,
        }
    }
}
