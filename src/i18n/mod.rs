//! Internationalization (i18n) module for the localized site.
//!
//! All locale-related logic lives here: which locales exist, how a URL path
//! maps to a locale, how a path is rewritten for another locale, and how the
//! per-locale dictionaries are loaded.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and the default
//! - `locale`: Validated `Locale` type
//! - `path`: Locale prefix detection, path resolution and path localization
//! - `dictionary`: Dictionary schema and the fallback-safe loader
//! - `metrics`: Dictionary loading counters
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_site::i18n::{localize_path, DictionaryLoader, Locale};
//!
//! let loader = DictionaryLoader::default();
//! let dict = loader.load(Some("en"));
//!
//! assert_eq!(localize_path("/de/about", Locale::ENGLISH), "/en/about");
//! ```

mod dictionary;
mod error;
mod locale;
mod metrics;
mod path;
mod registry;

pub use dictionary::{
    bundle_path, AboutPageStrings, AboutSection, BundleSource, ButtonStrings, CommonStrings,
    ContactFormLabels, ContactInfoStrings, ContactPageStrings, Dictionary, DictionaryLoader,
    FooterStrings, HomePageStrings, NavStrings, NotFoundStrings, PageStrings, ValidationMessages,
};
pub use error::{DictionaryError, LocaleError};
pub use locale::Locale;
pub use metrics::{DictionaryMetrics, MetricsReport};
pub use path::{localize_path, path_locale_prefix, resolve_locale_from_path};
pub use registry::{LocaleConfig, LocaleRegistry};
