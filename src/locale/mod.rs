//! # Locales and Catalogs
//!
//! The widget ships five fixed locales. Each one owns a [`Catalog`] of UI strings and an
//! ordered list of proverbs. Both tables are compiled in and never mutated.
//!
//! ## Initial locale
//!
//! [`resolve_initial_locale`] picks the locale a page load starts in. First match wins:
//!
//! 1. `lang` query parameter, when it names a supported locale
//! 2. the persisted preference, when present and valid
//! 3. the platform language tag, matched by prefix (`pt-BR` => `pt`)
//! 4. `en`
//!
//! The query parameter outranks the stored preference so that a shared link opens in the
//! sharer's language even for a visitor who picked something else last time.
//!
//! ```rust
//! use fortune_cookie::locale::{resolve_initial_locale, Locale};
//!
//! let loc = resolve_initial_locale("?lang=fr", Some("es"), Some("it-IT"));
//! assert_eq!(loc, Locale::Fr);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use url::{form_urlencoded, Url};

use crate::error::FortuneError;

mod catalog;
mod fortunes;

pub use catalog::{Catalog, LanguageNames, ShareLabels};

/// Name of the query parameter carrying a locale code.
pub const LANG_PARAM: &str = "lang";

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
    Es,
    Fr,
    It,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Pt, Locale::Es, Locale::Fr, Locale::It];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
        }
    }

    /// Exact match on a two-letter code. Anything else is not a member of the set.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Best-effort match of a platform language tag (`pt-BR`, `fr_FR.UTF-8`, `IT`).
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| tag.starts_with(l.code()))
    }

    /// Open Graph `og:locale` value.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Pt => "pt_BR",
            Locale::Es => "es_ES",
            Locale::Fr => "fr_FR",
            Locale::It => "it_IT",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| FortuneError::LocaleNotFound(s.to_string()))
    }
}

/// First value of parameter `name`, decoded. `query` is either a full page URL or its
/// query string, with or without the leading `?`.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let first = |mut pairs: form_urlencoded::Parse<'_>| {
        pairs.find(|(key, _)| key == name).map(|(_, value)| value.into_owned())
    };
    match Url::parse(query) {
        Ok(page) => first(page.query_pairs()),
        Err(_) => first(form_urlencoded::parse(
            query.strip_prefix('?').unwrap_or(query).as_bytes(),
        )),
    }
}

/// Resolve the locale a fresh page load starts in. See the module docs for the order.
pub fn resolve_initial_locale(
    query: &str,
    stored_preference: Option<&str>,
    platform_language_tag: Option<&str>,
) -> Locale {
    if let Some(loc) = query_param(query, LANG_PARAM).and_then(|code| Locale::from_code(&code)) {
        trace!("locale {} taken from query parameter", loc);
        return loc;
    }
    if let Some(loc) = stored_preference.and_then(Locale::from_code) {
        trace!("locale {} taken from stored preference", loc);
        return loc;
    }
    if let Some(loc) = platform_language_tag.and_then(Locale::from_language_tag) {
        trace!("locale {} matched platform tag {:?}", loc, platform_language_tag);
        return loc;
    }
    debug!("no locale hint matched; falling back to {}", Locale::default());
    Locale::default()
}

/// An ordered list of candidate proverbs for one locale.
pub type FortuneList = [Cow<'static, str>];

/// Lookup of catalogs and fortune lists per locale.
///
/// The built-in store serves the compiled tables. Fortune lists can be replaced per
/// locale, which is how tests exercise an empty or tiny list.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    fortunes: HashMap<Locale, Vec<Cow<'static, str>>>,
}

impl LocaleStore {
    pub fn builtin() -> Self {
        let fortunes = Locale::ALL
            .into_iter()
            .map(|loc| {
                let list = fortunes::for_locale(loc)
                    .iter()
                    .map(|s| Cow::Borrowed(*s))
                    .collect();
                (loc, list)
            })
            .collect();
        Self { fortunes }
    }

    /// Replace the fortune list of one locale.
    pub fn with_fortunes<I, S>(mut self, locale: Locale, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.fortunes
            .insert(locale, list.into_iter().map(Into::into).collect());
        self
    }

    pub fn locales(&self) -> &'static [Locale] {
        &Locale::ALL
    }

    pub fn get_catalog(&self, locale: Locale) -> &'static Catalog {
        catalog::for_locale(locale)
    }

    pub fn get_fortune_list(&self, locale: Locale) -> &FortuneList {
        self.fortunes.get(&locale).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Catalog lookup by raw code, for values that have not been parsed into a [`Locale`].
    pub fn catalog_for_code(&self, code: &str) -> Result<&'static Catalog, FortuneError> {
        let loc: Locale = code.parse()?;
        Ok(self.get_catalog(loc))
    }

    /// Fortune list lookup by raw code.
    pub fn fortunes_for_code(&self, code: &str) -> Result<&FortuneList, FortuneError> {
        let loc: Locale = code.parse()?;
        Ok(self.get_fortune_list(loc))
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::builtin()
    }
}
