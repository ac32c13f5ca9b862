//! Per-locale dictionaries and the loader that never fails its caller.
//!
//! A bundle is one JSON file per locale (`locales/{code}/common.json`). The
//! loader coerces bad locale candidates to the default locale, retries a
//! failed bundle with the default locale's bundle, and as a last resort
//! serves the default bundle compiled into the binary. A page therefore
//! always renders in some locale.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::i18n::{DictionaryError, DictionaryMetrics, Locale, MetricsReport};

// ==================== Dictionary Schema ====================

/// All display strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub brand: String,
    pub common: CommonStrings,
    pub pages: PageStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStrings {
    pub nav: NavStrings,
    pub footer: FooterStrings,
    pub buttons: ButtonStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavStrings {
    pub home: String,
    pub about: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterStrings {
    pub rights: String,
    pub privacy: String,
    pub terms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStrings {
    pub read_more: String,
    pub submit: String,
    pub cancel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStrings {
    pub home: HomePageStrings,
    pub about: AboutPageStrings,
    pub contact: ContactPageStrings,
    pub not_found: NotFoundStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomePageStrings {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageStrings {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<AboutSection>,
    pub values_title: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPageStrings {
    pub title: String,
    pub subtitle: String,
    pub form: ContactFormLabels,
    pub validation: ValidationMessages,
    pub success: String,
    pub info: ContactInfoStrings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormLabels {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submit: String,
    pub send_another: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessages {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub subject_required: String,
    pub message_required: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoStrings {
    pub title: String,
    pub address: String,
    pub address_value: String,
    pub email: String,
    pub email_value: String,
    pub phone: String,
    pub phone_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundStrings {
    pub title: String,
    pub description: String,
    pub back_home: String,
}

// ==================== Bundle Sources ====================

/// Where translation bundles are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSource {
    /// Bundles compiled into the binary
    Embedded,

    /// `{dir}/{code}/common.json` on disk, re-read on every cache miss
    Directory(PathBuf),
}

impl BundleSource {
    /// Read and parse the bundle for `locale`.
    pub fn read(&self, locale: Locale) -> Result<Dictionary, DictionaryError> {
        match self {
            BundleSource::Embedded => {
                let raw =
                    embedded_bundle(locale).ok_or(DictionaryError::Missing(locale.code()))?;
                parse_bundle(locale, raw)
            }
            BundleSource::Directory(dir) => {
                let path = bundle_path(dir, locale);
                let raw = std::fs::read_to_string(&path)
                    .map_err(|source| DictionaryError::Read { path, source })?;
                parse_bundle(locale, &raw)
            }
        }
    }
}

/// Location of a locale's bundle below a bundle directory.
pub fn bundle_path(dir: &Path, locale: Locale) -> PathBuf {
    dir.join(locale.code()).join("common.json")
}

fn embedded_bundle(locale: Locale) -> Option<&'static str> {
    match locale.code() {
        "de" => Some(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/locales/de/common.json"
        ))),
        "en" => Some(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/locales/en/common.json"
        ))),
        _ => None,
    }
}

fn parse_bundle(locale: Locale, raw: &str) -> Result<Dictionary, DictionaryError> {
    serde_json::from_str(raw).map_err(|source| DictionaryError::Malformed {
        locale: locale.code(),
        source,
    })
}

/// The default locale's compiled-in dictionary, or an empty one if even that
/// cannot be parsed.
fn last_resort_dictionary() -> Arc<Dictionary> {
    static LAST_RESORT: OnceLock<Arc<Dictionary>> = OnceLock::new();

    LAST_RESORT
        .get_or_init(|| {
            let locale = Locale::default_locale();
            match BundleSource::Embedded.read(locale) {
                Ok(dictionary) => Arc::new(dictionary),
                Err(err) => {
                    error!(
                        locale = %locale,
                        error = %err,
                        "Embedded default dictionary is unusable, serving empty dictionary"
                    );
                    Arc::new(Dictionary::default())
                }
            }
        })
        .clone()
}

// ==================== Loader ====================

/// Loads dictionaries by locale, caching successful loads.
#[derive(Debug)]
pub struct DictionaryLoader {
    source: BundleSource,
    cache: Option<RwLock<HashMap<Locale, Arc<Dictionary>>>>,
    metrics: DictionaryMetrics,
}

impl DictionaryLoader {
    /// Create a caching loader.
    pub fn new(source: BundleSource) -> Self {
        Self {
            source,
            cache: Some(RwLock::new(HashMap::new())),
            metrics: DictionaryMetrics::new(),
        }
    }

    /// Create a loader that reads the bundle on every call.
    pub fn uncached(source: BundleSource) -> Self {
        Self {
            source,
            cache: None,
            metrics: DictionaryMetrics::new(),
        }
    }

    pub fn source(&self) -> &BundleSource {
        &self.source
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    /// Load the dictionary for an unvalidated locale candidate.
    ///
    /// An absent or unsupported candidate is replaced by the default locale
    /// with a warning. Never fails.
    pub fn load(&self, candidate: Option<&str>) -> Arc<Dictionary> {
        let locale = match candidate.map(Locale::from_code) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                self.metrics.record_invalid_locale();
                warn!(
                    error = %err,
                    "Invalid locale provided to dictionary loader, falling back to default"
                );
                Locale::default_locale()
            }
            None => {
                self.metrics.record_invalid_locale();
                warn!("No locale provided to dictionary loader, falling back to default");
                Locale::default_locale()
            }
        };

        self.load_locale(locale)
    }

    /// Load the dictionary for a validated locale. Never fails.
    pub fn load_locale(&self, locale: Locale) -> Arc<Dictionary> {
        let err = match self.fetch(locale) {
            Ok(dictionary) => return dictionary,
            Err(err) => err,
        };

        self.metrics.record_load_failure();
        self.metrics.record_fallback();
        error!(
            locale = %locale,
            error = %err,
            "Error loading dictionary, falling back to default locale"
        );

        let default = Locale::default_locale();
        if locale != default {
            match self.fetch(default) {
                Ok(dictionary) => return dictionary,
                Err(err) => {
                    self.metrics.record_load_failure();
                    error!(
                        locale = %default,
                        error = %err,
                        "Error loading default dictionary, using embedded bundle"
                    );
                }
            }
        }

        last_resort_dictionary()
    }

    fn fetch(&self, locale: Locale) -> Result<Arc<Dictionary>, DictionaryError> {
        let Some(cache) = &self.cache else {
            return self.source.read(locale).map(Arc::new);
        };

        if let Some(dictionary) = cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
        {
            self.metrics.record_cache_hit();
            return Ok(Arc::clone(dictionary));
        }

        self.metrics.record_cache_miss();
        let dictionary = Arc::new(self.source.read(locale)?);
        debug!(locale = %locale, "Dictionary loaded");

        let mut cache = cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(locale).or_insert(dictionary)))
    }
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new(BundleSource::Embedded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_bundle(dir: &Path, locale: Locale, contents: &str) {
        let path = bundle_path(dir, locale);
        std::fs::create_dir_all(path.parent().expect("bundle path has a parent"))
            .expect("Failed to create bundle dir");
        std::fs::write(path, contents).expect("Failed to write bundle");
    }

    fn embedded_json(locale: Locale) -> &'static str {
        embedded_bundle(locale).expect("bundle is compiled in")
    }

    // ==================== Embedded Bundle Tests ====================

    #[test]
    fn test_embedded_bundles_parse_for_every_locale() {
        for locale in Locale::all() {
            let dictionary = BundleSource::Embedded
                .read(locale)
                .unwrap_or_else(|e| panic!("bundle {locale} should parse: {e}"));
            assert!(!dictionary.pages.home.title.is_empty());
            assert!(!dictionary.common.nav.contact.is_empty());
        }
    }

    #[test]
    fn test_embedded_bundles_are_translated() {
        let de = BundleSource::Embedded.read(Locale::GERMAN).unwrap();
        let en = BundleSource::Embedded.read(Locale::ENGLISH).unwrap();

        assert_eq!(de.pages.about.title, "Über uns");
        assert_eq!(en.pages.about.title, "About Us");
        assert_eq!(de.pages.about.values.len(), en.pages.about.values.len());
        assert_eq!(de.pages.about.sections.len(), en.pages.about.sections.len());
    }

    #[test]
    fn test_last_resort_is_default_locale_bundle() {
        let dictionary = last_resort_dictionary();
        assert_eq!(dictionary.common.nav.home, "Startseite");
    }

    // ==================== Loader Coercion Tests ====================

    #[test]
    fn test_load_supported_locale() {
        let loader = DictionaryLoader::default();
        let dictionary = loader.load(Some("en"));

        assert_eq!(dictionary.common.nav.home, "Home");
        assert_eq!(loader.metrics().invalid_locales, 0);
    }

    #[test]
    fn test_load_unsupported_locale_matches_default() {
        let loader = DictionaryLoader::default();

        let fallback = loader.load(Some("xx"));
        let default = loader.load(Some("de"));

        assert_eq!(fallback, default);
        assert_eq!(loader.metrics().invalid_locales, 1);
    }

    #[test]
    fn test_load_absent_locale_matches_default() {
        let loader = DictionaryLoader::default();

        assert_eq!(loader.load(None), loader.load_locale(Locale::GERMAN));
        assert_eq!(loader.metrics().invalid_locales, 1);
    }

    #[test]
    fn test_load_non_locale_path_segment() {
        let loader = DictionaryLoader::default();
        let dictionary = loader.load(Some("favicon.ico"));
        assert_eq!(dictionary.common.nav.home, "Startseite");
    }

    // ==================== Cache Tests ====================

    #[test]
    fn test_cache_returns_shared_instance() {
        let loader = DictionaryLoader::default();

        let first = loader.load_locale(Locale::ENGLISH);
        let second = loader.load_locale(Locale::ENGLISH);

        assert!(Arc::ptr_eq(&first, &second));
        let report = loader.metrics();
        assert_eq!(report.cache_misses, 1);
        assert_eq!(report.cache_hits, 1);
    }

    #[test]
    fn test_uncached_loader_reads_every_time() {
        let loader = DictionaryLoader::uncached(BundleSource::Embedded);

        let first = loader.load_locale(Locale::ENGLISH);
        let second = loader.load_locale(Locale::ENGLISH);

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(loader.metrics().cache_hits, 0);
    }

    // ==================== Directory Source Tests ====================

    #[test]
    fn test_directory_source_reads_bundle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let custom = embedded_json(Locale::ENGLISH).replace("\"Home\"", "\"Start\"");
        write_bundle(temp_dir.path(), Locale::ENGLISH, &custom);

        let loader = DictionaryLoader::new(BundleSource::Directory(temp_dir.path().into()));
        assert_eq!(loader.load_locale(Locale::ENGLISH).common.nav.home, "Start");
    }

    #[test]
    fn test_missing_bundle_falls_back_to_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_bundle(temp_dir.path(), Locale::GERMAN, embedded_json(Locale::GERMAN));

        let loader = DictionaryLoader::new(BundleSource::Directory(temp_dir.path().into()));
        let dictionary = loader.load_locale(Locale::ENGLISH);

        assert_eq!(dictionary.common.nav.home, "Startseite");
        let report = loader.metrics();
        assert_eq!(report.load_failures, 1);
        assert_eq!(report.fallbacks, 1);
    }

    #[test]
    fn test_malformed_bundle_falls_back_to_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_bundle(temp_dir.path(), Locale::GERMAN, embedded_json(Locale::GERMAN));
        write_bundle(temp_dir.path(), Locale::ENGLISH, "{ \"brand\": ");

        let loader = DictionaryLoader::new(BundleSource::Directory(temp_dir.path().into()));
        assert_eq!(loader.load_locale(Locale::ENGLISH).common.nav.home, "Startseite");
    }

    #[test]
    fn test_incomplete_bundle_is_malformed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_bundle(temp_dir.path(), Locale::ENGLISH, r#"{ "brand": "Only a brand" }"#);

        let source = BundleSource::Directory(temp_dir.path().into());
        let err = source.read(Locale::ENGLISH).unwrap_err();
        assert!(matches!(err, DictionaryError::Malformed { locale: "en", .. }));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_bundle(temp_dir.path(), Locale::GERMAN, embedded_json(Locale::GERMAN));

        let loader = DictionaryLoader::new(BundleSource::Directory(temp_dir.path().into()));
        assert_eq!(loader.load_locale(Locale::ENGLISH).common.nav.home, "Startseite");

        write_bundle(temp_dir.path(), Locale::ENGLISH, embedded_json(Locale::ENGLISH));
        assert_eq!(loader.load_locale(Locale::ENGLISH).common.nav.home, "Home");
    }

    #[test]
    fn test_default_bundle_missing_uses_embedded() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let loader = DictionaryLoader::new(BundleSource::Directory(temp_dir.path().into()));
        let dictionary = loader.load(Some("en"));

        assert_eq!(dictionary.common.nav.home, "Startseite");
        assert_eq!(loader.metrics().load_failures, 2);
    }

    #[test]
    fn test_read_error_names_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = BundleSource::Directory(temp_dir.path().into());

        let err = source.read(Locale::GERMAN).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("common.json"));
    }
}
