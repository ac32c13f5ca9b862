//! Localized marketing site: locale-prefixed routing, per-locale
//! dictionaries and the HTML pages built from them.

pub mod config;
pub mod contact;
pub mod deck;
pub mod i18n;
pub mod pages;
pub mod routing;
pub mod server;
