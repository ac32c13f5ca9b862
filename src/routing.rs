//! Edge routing: runs before any handler and sends every content request
//! without a locale prefix to the default-locale URL.

use std::sync::OnceLock;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use regex::RegexSet;
use tracing::debug;

use crate::i18n::{path_locale_prefix, Locale};

/// What the dispatcher does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hand the request to the router unmodified
    PassThrough,

    /// Answer with a redirect to `location` (path plus original query)
    Redirect { location: String },
}

static STATIC_ASSET_PATTERNS: OnceLock<RegexSet> = OnceLock::new();

/// Paths served without locale handling: image/icon files, API routes and
/// the static asset directories.
pub fn is_static_asset(path: &str) -> bool {
    STATIC_ASSET_PATTERNS
        .get_or_init(|| {
            RegexSet::new([
                r"\.ico$",
                r"\.svg$",
                r"\.jpg$",
                r"\.jpeg$",
                r"\.png$",
                r"\.gif$",
                r"\.webp$",
                r"^/api(/|$)",
                r"^/static/",
                r"^/assets/",
            ])
            .unwrap()
        })
        .is_match(path)
}

/// Classify a request path. Stateless: the same input always yields the
/// same decision.
pub fn dispatch(path: &str, query: Option<&str>) -> RouteDecision {
    if is_static_asset(path) || path_locale_prefix(path).is_some() {
        return RouteDecision::PassThrough;
    }

    let default = Locale::default_locale();
    let mut location = if path.starts_with('/') {
        format!("/{default}{path}")
    } else {
        format!("/{default}/{path}")
    };

    if let Some(query) = query.filter(|query| !query.is_empty()) {
        location.push('?');
        location.push_str(query);
    }

    RouteDecision::Redirect { location }
}

/// Axum middleware wrapping [`dispatch`]. Redirects are 307 so the request
/// method survives (a form POST to `/contact` lands on `/de/contact`).
pub async fn locale_redirect(request: Request, next: Next) -> Response {
    let decision = dispatch(request.uri().path(), request.uri().query());

    match decision {
        RouteDecision::PassThrough => next.run(request).await,
        RouteDecision::Redirect { location } => {
            debug!(
                path = %request.uri().path(),
                location = %location,
                "Redirecting to default locale"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(location: &str) -> RouteDecision {
        RouteDecision::Redirect {
            location: location.to_string(),
        }
    }

    // ==================== Static Asset Tests ====================

    #[test]
    fn test_static_asset_extensions() {
        for path in [
            "/favicon.ico",
            "/images/logo.svg",
            "/a.jpg",
            "/a.jpeg",
            "/hero.png",
            "/x.gif",
            "/photo.webp",
        ] {
            assert!(is_static_asset(path), "{path} should be a static asset");
        }
    }

    #[test]
    fn test_static_asset_prefixes() {
        assert!(is_static_asset("/api/anything"));
        assert!(is_static_asset("/api"));
        assert!(is_static_asset("/static/site.css"));
        assert!(is_static_asset("/assets/app.js"));
    }

    #[test]
    fn test_content_paths_are_not_assets() {
        assert!(!is_static_asset("/about"));
        assert!(!is_static_asset("/apiary"));
        assert!(!is_static_asset("/static"));
        assert!(!is_static_asset("/de/photo.png.html"));
    }

    // ==================== Dispatch Tests ====================

    #[test]
    fn test_dispatch_favicon_passes_through() {
        assert_eq!(dispatch("/favicon.ico", None), RouteDecision::PassThrough);
    }

    #[test]
    fn test_dispatch_api_passes_through_regardless_of_locale() {
        assert_eq!(dispatch("/api/anything", None), RouteDecision::PassThrough);
        assert_eq!(dispatch("/api/en/deck", None), RouteDecision::PassThrough);
    }

    #[test]
    fn test_dispatch_locale_prefixed_passes_through() {
        assert_eq!(dispatch("/en/about", None), RouteDecision::PassThrough);
        assert_eq!(dispatch("/de", None), RouteDecision::PassThrough);
        assert_eq!(dispatch("/de/", None), RouteDecision::PassThrough);
    }

    #[test]
    fn test_dispatch_redirects_to_default_locale() {
        assert_eq!(dispatch("/about", None), redirect("/de/about"));
        assert_eq!(dispatch("/", None), redirect("/de/"));
    }

    #[test]
    fn test_dispatch_preserves_query() {
        assert_eq!(dispatch("/about", Some("ref=ad")), redirect("/de/about?ref=ad"));
        assert_eq!(
            dispatch("/contact", Some("a=1&b=x%20y&a=2")),
            redirect("/de/contact?a=1&b=x%20y&a=2")
        );
    }

    #[test]
    fn test_dispatch_drops_empty_query() {
        assert_eq!(dispatch("/about", Some("")), redirect("/de/about"));
    }

    #[test]
    fn test_dispatch_normalizes_missing_slash() {
        assert_eq!(dispatch("about", None), redirect("/de/about"));
    }

    #[test]
    fn test_dispatch_partial_locale_segment_redirects() {
        assert_eq!(dispatch("/english", None), redirect("/de/english"));
        assert_eq!(dispatch("/fr/about", None), redirect("/de/fr/about"));
    }

    #[test]
    fn test_dispatch_redirect_target_passes_through() {
        let RouteDecision::Redirect { location } = dispatch("/about", Some("ref=ad")) else {
            panic!("expected redirect");
        };
        let path = location.split('?').next().unwrap();
        assert_eq!(dispatch(path, Some("ref=ad")), RouteDecision::PassThrough);
    }
}
