use std::path::PathBuf;

use thiserror::Error;

/// A locale code that is not a member of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    Unsupported(String),

    #[error("Locale '{0}' is not enabled")]
    Disabled(String),
}

/// A translation bundle that could not be loaded.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no bundle compiled in for locale '{0}'")]
    Missing(&'static str),

    #[error("failed to read bundle {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bundle for locale '{locale}': {source}")]
    Malformed {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
