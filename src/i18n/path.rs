//! Locale-aware URL path handling.
//!
//! Paths are treated as `/`-separated segments. A path is "locale-prefixed"
//! when its first segment, directly after the leading slash, is exactly a
//! supported locale code: `/en` and `/en/about` are, `/english` is not.

use std::borrow::Cow;

use crate::i18n::Locale;

/// Return the locale whose `/{code}` prefix starts `path`, if any.
///
/// Only an exact first segment counts, and the path must start with `/`.
pub fn path_locale_prefix(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    Locale::from_code(segment).ok()
}

/// Determine which locale a request path is rendered in.
///
/// Empty segments are skipped, so `//en/about` still resolves to `en`. A
/// path with no locale segment and a path with an unsupported one both
/// resolve to the default locale; callers cannot tell the two apart.
pub fn resolve_locale_from_path(path: &str) -> Locale {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| Locale::from_code(segment).ok())
        .unwrap_or_else(Locale::default_locale)
}

/// Rewrite `path` so it is served in `target`.
///
/// An existing locale prefix is replaced rather than nested, and a path that
/// is already in `target` comes back unchanged, so the operation is
/// idempotent.
pub fn localize_path(path: &str, target: Locale) -> String {
    let path: Cow<'_, str> = if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    };

    let remainder = match path_locale_prefix(&path) {
        Some(current) if current == target => return path.into_owned(),
        Some(current) => &path[1 + current.code().len()..],
        None => &path[..],
    };

    if remainder.starts_with('/') {
        format!("/{target}{remainder}")
    } else {
        format!("/{target}/{remainder}")
    }
}
