//! HTTP surface: router, shared state and handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::contact::{validate, ContactForm};
use crate::deck::{generate_deck, Card};
use crate::i18n::{resolve_locale_from_path, DictionaryLoader, Locale, MetricsReport};
use crate::pages::{
    render_about, render_contact, render_home, render_not_found, ContactView, PageContext,
};
use crate::routing::locale_redirect;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dictionaries: Arc<DictionaryLoader>,
}

impl AppState {
    pub fn new(dictionaries: DictionaryLoader) -> Self {
        Self {
            dictionaries: Arc::new(dictionaries),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let source = config.bundle_source();
        let loader = if config.dictionary_cache {
            DictionaryLoader::new(source)
        } else {
            DictionaryLoader::uncached(source)
        };
        Self::new(loader)
    }
}

/// Build the site router. The locale redirect runs in front of every route,
/// the fallback included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/deck", get(deck))
        .route("/:locale", get(home))
        .route("/:locale/", get(home))
        .route("/:locale/about", get(about))
        .route("/:locale/contact", get(contact).post(submit_contact))
        .fallback(not_found)
        .layer(middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Page Handlers ====================

/// Render a page for a locale path segment, or the 404 page when the segment
/// is not a supported locale.
fn render_page(
    state: &AppState,
    segment: &str,
    uri: &Uri,
    render: impl FnOnce(&PageContext<'_>) -> String,
) -> Response {
    let Ok(locale) = Locale::from_code(segment) else {
        debug!(segment, "Unsupported locale segment");
        return not_found_page(state, uri);
    };

    let dict = state.dictionaries.load_locale(locale);
    let ctx = PageContext {
        locale,
        path: uri.path(),
        dict: &dict,
    };
    Html(render(&ctx)).into_response()
}

fn not_found_page(state: &AppState, uri: &Uri) -> Response {
    let locale = resolve_locale_from_path(uri.path());
    let dict = state.dictionaries.load_locale(locale);
    let ctx = PageContext {
        locale,
        path: uri.path(),
        dict: &dict,
    };
    (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response()
}

async fn home(State(state): State<AppState>, Path(locale): Path<String>, uri: Uri) -> Response {
    render_page(&state, &locale, &uri, render_home)
}

async fn about(State(state): State<AppState>, Path(locale): Path<String>, uri: Uri) -> Response {
    render_page(&state, &locale, &uri, render_about)
}

async fn contact(State(state): State<AppState>, Path(locale): Path<String>, uri: Uri) -> Response {
    render_page(&state, &locale, &uri, |ctx| {
        render_contact(ctx, &ContactView::Blank)
    })
}

async fn submit_contact(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    uri: Uri,
    Form(form): Form<ContactForm>,
) -> Response {
    render_page(&state, &locale, &uri, |ctx| {
        let errors = validate(&form, &ctx.dict.pages.contact.validation);
        let view = if errors.is_empty() {
            info!(locale = %ctx.locale, "Contact form accepted");
            ContactView::Submitted
        } else {
            debug!(locale = %ctx.locale, "Contact form rejected");
            ContactView::Invalid { form, errors }
        };
        render_contact(ctx, &view)
    })
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    not_found_page(&state, &uri)
}

// ==================== API Handlers ====================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    pub dictionary: MetricsReport,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        default_locale: Locale::default_locale(),
        locales: Locale::all(),
        dictionary: state.dictionaries.metrics(),
    })
}

async fn deck() -> Json<Vec<Card>> {
    Json(generate_deck())
}
