//! Document title and crawler meta tags.
//!
//! Every reveal rewrites the title and a fixed set of Open Graph / Twitter card tags
//! so a shared link previews the fortune. On teardown the title and the description
//! tags go back to the locale defaults.

use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::locale::{Catalog, Locale};
use crate::share::preview::{HEIGHT, WIDTH};

/// Which attribute names the tag: `<meta property=..>` or `<meta name=..>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaAttr {
    Property,
    Name,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Property => "property",
            MetaAttr::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }

    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }
}

/// A title plus the tags to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub tags: Vec<MetaTag>,
}

impl DocumentMeta {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.content.as_str())
    }

    /// `<title>` and `<meta>` elements, one per line.
    pub fn to_html(&self) -> String {
        let mut out = format!("<title>{}</title>\n", escape_attr(&self.title));
        for tag in &self.tags {
            out.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                tag.attr.as_str(),
                tag.key,
                escape_attr(&tag.content)
            ));
        }
        out
    }
}

/// Inputs for the revealed-state tags.
#[derive(Debug, Clone, Copy)]
pub struct MetaContext<'a> {
    pub catalog: &'a Catalog,
    pub locale: Locale,
    pub page_url: &'a str,
    /// Generated preview, if any. Falls back to `site.default_image`.
    pub image_url: Option<&'a str>,
    pub site: &'a SiteConfig,
}

fn default_description(catalog: &Catalog) -> String {
    format!("{} - {}", catalog.click_prompt, catalog.title)
}

/// Full tag set for the current state. `fortune` is `None` while idle.
pub fn document_meta(fortune: Option<&str>, ctx: &MetaContext<'_>) -> DocumentMeta {
    let catalog = ctx.catalog;
    let title = match fortune {
        Some(f) => format!("\"{}\" - {}", f, catalog.title),
        None => catalog.title.to_string(),
    };
    let description = match fortune {
        Some(f) => format!("{} \"{}\"", catalog.today_label, f),
        None => default_description(catalog),
    };
    let image = ctx
        .image_url
        .map(str::to_string)
        .unwrap_or_else(|| ctx.site.default_image_url());

    let tags = vec![
        MetaTag::property("og:title", title.clone()),
        MetaTag::property("og:description", description.clone()),
        MetaTag::property("og:url", ctx.page_url),
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:image", image.clone()),
        MetaTag::property("og:image:width", (WIDTH as u32).to_string()),
        MetaTag::property("og:image:height", (HEIGHT as u32).to_string()),
        MetaTag::property("og:site_name", catalog.title),
        MetaTag::name("twitter:card", "summary_large_image"),
        MetaTag::name("twitter:title", title.clone()),
        MetaTag::name("twitter:description", description.clone()),
        MetaTag::name("twitter:image", image),
        MetaTag::property("og:locale", ctx.locale.og_locale()),
        MetaTag::name("description", description),
        MetaTag::name("author", ctx.site.author.clone()),
        MetaTag::name("keywords", ctx.site.keywords.clone()),
    ];
    DocumentMeta { title, tags }
}

/// Values restored on teardown. Only tags that already exist are touched.
pub fn teardown_meta(catalog: &Catalog) -> DocumentMeta {
    let description = default_description(catalog);
    DocumentMeta {
        title: catalog.title.to_string(),
        tags: vec![
            MetaTag::property("og:title", catalog.title),
            MetaTag::property("og:description", description.clone()),
            MetaTag::name("twitter:title", catalog.title),
            MetaTag::name("twitter:description", description.clone()),
            MetaTag::name("description", description),
        ],
    }
}

/// In-memory document head.
#[derive(Debug, Clone, Default)]
pub struct DocumentHead {
    pub title: String,
    tags: BTreeMap<(MetaAttr, &'static str), String>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update or create every tag.
    pub fn apply(&mut self, meta: &DocumentMeta) {
        self.title = meta.title.clone();
        for tag in &meta.tags {
            self.tags.insert((tag.attr, tag.key), tag.content.clone());
        }
    }

    /// Update tags that exist; never create.
    pub fn restore(&mut self, meta: &DocumentMeta) {
        self.title = meta.title.clone();
        for tag in &meta.tags {
            if let Some(content) = self.tags.get_mut(&(tag.attr, tag.key)) {
                *content = tag.content.clone();
            }
        }
    }

    pub fn get(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|((a, k), _)| *a == attr && *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleStore;

    fn ctx<'a>(catalog: &'a Catalog, site: &'a SiteConfig, image: Option<&'a str>) -> MetaContext<'a> {
        MetaContext {
            catalog,
            locale: Locale::Fr,
            page_url: "https://cookies.test/?lang=fr",
            image_url: image,
            site,
        }
    }

    #[test]
    fn idle_meta_uses_defaults() {
        let store = LocaleStore::builtin();
        let site = SiteConfig::default();
        let cat = store.get_catalog(Locale::Fr);
        let meta = document_meta(None, &ctx(cat, &site, None));
        assert_eq!(meta.title, "Biscuit de Fortune");
        assert_eq!(
            meta.get("og:description"),
            Some("Cliquez sur le biscuit de fortune pour révéler votre message - Biscuit de Fortune")
        );
        assert_eq!(
            meta.get("og:image"),
            Some("https://fortune-cookie.example/fortune-cookie-default.jpg")
        );
        assert_eq!(meta.get("og:locale"), Some("fr_FR"));
    }

    #[test]
    fn revealed_meta_quotes_fortune() {
        let store = LocaleStore::builtin();
        let site = SiteConfig::default();
        let cat = store.get_catalog(Locale::Fr);
        let meta = document_meta(Some("Petit à petit."), &ctx(cat, &site, Some("data:image/png;base64,iVBORw==")));
        assert_eq!(meta.title, "\"Petit à petit.\" - Biscuit de Fortune");
        assert_eq!(
            meta.get("twitter:description"),
            Some("Votre message d'aujourd'hui est : \"Petit à petit.\"")
        );
        assert_eq!(meta.get("twitter:image"), Some("data:image/png;base64,iVBORw=="));
        assert_eq!(meta.get("og:image:width"), Some("1200"));
        assert_eq!(meta.get("og:image:height"), Some("630"));
    }

    #[test]
    fn restore_only_touches_existing_tags() {
        let store = LocaleStore::builtin();
        let cat = store.get_catalog(Locale::En);
        let mut head = DocumentHead::new();
        head.apply(&DocumentMeta {
            title: "x".into(),
            tags: vec![MetaTag::property("og:title", "x")],
        });
        head.restore(&teardown_meta(cat));
        assert_eq!(head.title, "Fortune Cookie");
        assert_eq!(head.get(MetaAttr::Property, "og:title"), Some("Fortune Cookie"));
        assert_eq!(head.get(MetaAttr::Name, "description"), None);
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn html_escapes_quotes() {
        let meta = DocumentMeta {
            title: "\"a\" - b".into(),
            tags: vec![MetaTag::name("description", "say \"hi\"")],
        };
        let html = meta.to_html();
        assert!(html.contains("<title>&quot;a&quot; - b</title>"));
        assert!(html.contains("content=\"say &quot;hi&quot;\""));
    }
}
