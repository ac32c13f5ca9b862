//! HTML rendering for the site pages and the shared shell around them.
//!
//! Every page is wrapped in the same document: header with brand link,
//! navigation and locale switch, then the page body, then the footer. All
//! dictionary text and user input goes through `html_escape`.

mod about;
mod contact;
mod home;
mod not_found;

use chrono::{Datelike, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::i18n::{localize_path, Dictionary, Locale};

pub use about::render_about;
pub use contact::{render_contact, ContactView};
pub use home::render_home;
pub use not_found::render_not_found;

/// Everything a page needs to know about the current request.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,

    /// Request path, used for navigation state and locale switch links
    pub path: &'a str,

    pub dict: &'a Dictionary,
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// Header navigation entries for a locale.
pub fn navigation(locale: Locale, dict: &Dictionary) -> Vec<NavItem> {
    let nav = &dict.common.nav;
    vec![
        NavItem {
            label: nav.home.clone(),
            href: format!("/{locale}"),
        },
        NavItem {
            label: nav.about.clone(),
            href: format!("/{locale}/about"),
        },
        NavItem {
            label: nav.contact.clone(),
            href: format!("/{locale}/contact"),
        },
    ]
}

/// A nav entry is active on its own path and on every path below it.
pub fn is_active(path: &str, href: &str) -> bool {
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Links to the current page in every other locale.
pub fn locale_switch_links(path: &str, current: Locale) -> Vec<(Locale, String)> {
    current
        .alternates()
        .into_iter()
        .map(|target| (target, localize_path(path, target)))
        .collect()
}

fn render_header(ctx: &PageContext<'_>) -> String {
    let nav_items: String = navigation(ctx.locale, ctx.dict)
        .iter()
        .map(|item| {
            let class = if is_active(ctx.path, &item.href) {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<li><a class="{class}" href="{}">{}</a></li>"#,
                attr(&item.href),
                text(&item.label)
            )
        })
        .collect();

    let switches: String = locale_switch_links(ctx.path, ctx.locale)
        .iter()
        .map(|(target, href)| {
            format!(
                r#"<a class="locale-switch" hreflang="{target}" href="{}">{}</a>"#,
                attr(href),
                text(target.flag())
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
<a class="brand" href="/{locale}"><img alt="Logo" src="/images/logo.svg" width="40" height="40"><span>{brand}</span></a>
<nav><ul>{nav_items}</ul></nav>
{switches}
</header>"#,
        locale = ctx.locale,
        brand = text(&ctx.dict.brand),
    )
}

fn render_footer(ctx: &PageContext<'_>, year: i32) -> String {
    let footer = &ctx.dict.common.footer;
    format!(
        r#"<footer class="site-footer">
<p>&copy; {year} {rights}</p>
<a href="/{locale}/privacy">{privacy}</a>
<a href="/{locale}/terms">{terms}</a>
</footer>"#,
        rights = text(&footer.rights),
        locale = ctx.locale,
        privacy = text(&footer.privacy),
        terms = text(&footer.terms),
    )
}

/// Page title in the layout's `"{page} | {site}"` form; the home page uses
/// the site title alone.
pub fn page_title(dict: &Dictionary, page_title: Option<&str>) -> String {
    let site = &dict.pages.home.title;
    match page_title {
        Some(page) => format!("{page} | {site}"),
        None => site.clone(),
    }
}

/// Wrap a rendered page body in the full HTML document.
pub fn render_document(ctx: &PageContext<'_>, title: &str, description: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        locale = ctx.locale,
        title = text(title),
        description = attr(description),
        header = render_header(ctx),
        footer = render_footer(ctx, Utc::now().year()),
    )
}
