//! # Share Composer
//!
//! Turns a revealed fortune into everything the share controls need: the canonical
//! share link, the quoted share text, the clipboard payload, and one [`ShareTarget`]
//! per network. Composition is plain string templating; nothing here talks to a
//! browser or an app.
//!
//! ## Networks
//!
//! | network   | mobile                                    | desktop                          |
//! |-----------|-------------------------------------------|----------------------------------|
//! | WhatsApp  | `whatsapp://send`, then `api.whatsapp.com` | `web.whatsapp.com/send`          |
//! | Instagram | copy text, then `instagram://camera`      | copy text, then `instagram.com`  |
//! | Twitter   | `x.com/intent/tweet`                      | same                             |
//! | Facebook  | `facebook.com/sharer/sharer.php`          | same                             |
//!
//! Instagram has no payload-carrying deep link. The channel copies the text and opens
//! the app; the user pastes.
//!
//! ## Example
//!
//! ```rust
//! use fortune_cookie::locale::{Locale, LocaleStore};
//! use fortune_cookie::share::ShareComposer;
//!
//! let store = LocaleStore::builtin();
//! let composer = ShareComposer::new("https://cookies.test").unwrap();
//! let artifact = composer.compose("Haste has no blessing.", Locale::En, store.get_catalog(Locale::En));
//! assert_eq!(artifact.share_url, "https://cookies.test/?lang=en");
//! assert_eq!(artifact.share_text, "\"Haste has no blessing.\" - Fortune Cookie");
//! ```

pub mod clipboard;
pub mod png;
pub mod preview;
pub mod svg;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::config::ShareConfig;
use crate::error::{FortuneError, Result};
use crate::locale::{Catalog, Locale, LANG_PARAM};
use crate::platform::DeviceClass;

pub use preview::ImageResource;

/// Marker appended to a truncated microblog text.
pub const ELLIPSIS: &str = "...";

/// Longest microblog text, in characters, leaving room for the link card.
pub const TWEET_BUDGET: usize = 250;

/// Fortune cookie emoji used by the messaging and preview texts.
pub const COOKIE_EMOJI: &str = "🥠";

/// The four fixed share channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Messaging app.
    WhatsApp,
    /// Photo-sharing app.
    Instagram,
    /// Microblogging intent.
    Twitter,
    /// Social-network sharer.
    Facebook,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::WhatsApp,
        Network::Instagram,
        Network::Twitter,
        Network::Facebook,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Network::WhatsApp => "whatsapp",
            Network::Instagram => "instagram",
            Network::Twitter => "twitter",
            Network::Facebook => "facebook",
        }
    }

    /// Localized label of this network's share control.
    pub fn label(self, catalog: &Catalog) -> &'static str {
        let labels = &catalog.share_labels;
        match self {
            Network::WhatsApp => labels.whatsapp,
            Network::Instagram => labels.instagram,
            Network::Twitter => labels.twitter,
            Network::Facebook => labels.facebook,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(Network::WhatsApp),
            "instagram" => Ok(Network::Instagram),
            "twitter" | "x" => Ok(Network::Twitter),
            "facebook" => Ok(Network::Facebook),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}

/// Everything derived from one revealed fortune. Recomputed on every reveal or
/// locale change and dropped on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareArtifact {
    pub fortune: String,
    pub locale: Locale,
    pub share_text: String,
    pub share_url: String,
    pub clipboard_payload: String,
    pub preview_image: Option<ImageResource>,
}

/// How a URL is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current location (app schemes).
    Redirect,
    /// Open a new browser tab.
    NewTab,
}

/// One URL to open, after `delay` from the share click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledOpen {
    pub url: String,
    pub delay: Duration,
    pub navigation: Navigation,
}

/// Fully resolved action for one share control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    pub network: Network,
    /// Text to put on the clipboard before opening anything.
    pub copy_text: Option<String>,
    /// Localized notice shown after the copy.
    pub notice: Option<&'static str>,
    /// URLs to open, in order. App-scheme attempts race their web fallback.
    pub opens: Vec<ScheduledOpen>,
}

/// Builds share artifacts and per-network targets for one canonical page URL.
#[derive(Debug, Clone)]
pub struct ShareComposer {
    page: Url,
    app_fallback_delay: Duration,
}

impl ShareComposer {
    /// Parse `base_url` and build a composer with default timings.
    pub fn new(base_url: &str) -> Result<Self> {
        let page = Url::parse(base_url).map_err(|e| FortuneError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self::from_config(&page, &ShareConfig::default()))
    }

    /// Credentials, query and fragment on `page` are dropped; share links carry
    /// only `lang`.
    pub fn from_config(page: &Url, config: &ShareConfig) -> Self {
        let mut page = page.clone();
        // Both fail only for URLs that cannot carry credentials at all
        let _ = page.set_username("");
        let _ = page.set_password(None);
        page.set_query(None);
        page.set_fragment(None);
        Self {
            page,
            app_fallback_delay: config.app_fallback_delay(),
        }
    }

    /// Canonical page URL: origin plus path, always with at least `/` as path.
    pub fn base_url(&self) -> &str {
        self.page.as_str()
    }

    /// Host of the page, as printed on the preview image. Non-default ports are
    /// kept; credentials never are.
    pub fn host(&self) -> String {
        match (self.page.host_str(), self.page.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        }
    }

    /// `<base>?lang=<code>`: a recipient lands in the sharer's locale.
    pub fn share_url(&self, locale: Locale) -> String {
        let mut url = self.page.clone();
        url.query_pairs_mut().append_pair(LANG_PARAM, locale.code());
        url.into()
    }

    /// `"<fortune>" - <title>`
    pub fn share_text(fortune: &str, catalog: &Catalog) -> String {
        format!("\"{}\" - {}", fortune, catalog.title)
    }

    pub fn compose(&self, fortune: &str, locale: Locale, catalog: &Catalog) -> ShareArtifact {
        let share_text = Self::share_text(fortune, catalog);
        let share_url = self.share_url(locale);
        let clipboard_payload = format!("{}\n\n{}", share_text, share_url);
        ShareArtifact {
            fortune: fortune.to_string(),
            locale,
            share_text,
            share_url,
            clipboard_payload,
            preview_image: None,
        }
    }

    /// Messaging-channel text: discovery phrase, cookie emoji, link. The fortune
    /// itself is left for the recipient to discover.
    pub fn messaging_text(&self, locale: Locale) -> String {
        format!(
            "{} {}\n\n{}",
            discovery_phrase(locale),
            COOKIE_EMOJI,
            self.share_url(locale)
        )
    }

    /// Photo-sharing clipboard text.
    pub fn instagram_text(artifact: &ShareArtifact) -> String {
        format!("{}\n\n🔗 {}", artifact.share_text, artifact.share_url)
    }

    /// Cut `share_text` to [`TWEET_BUDGET`]: 247 characters plus `...`.
    pub fn tweet_text(&self, share_text: &str) -> String {
        truncate_with_ellipsis(share_text, TWEET_BUDGET)
    }

    /// Resolve the action for `network` on a device of class `device`.
    pub fn target(&self, network: Network, artifact: &ShareArtifact, device: DeviceClass) -> ShareTarget {
        match network {
            Network::WhatsApp => {
                let text = urlencoding::encode(&self.messaging_text(artifact.locale)).into_owned();
                let opens = if device.is_mobile() {
                    vec![
                        ScheduledOpen {
                            url: format!("whatsapp://send?text={}", text),
                            delay: Duration::ZERO,
                            navigation: Navigation::Redirect,
                        },
                        ScheduledOpen {
                            url: format!("https://api.whatsapp.com/send?text={}", text),
                            delay: self.app_fallback_delay,
                            navigation: Navigation::NewTab,
                        },
                    ]
                } else {
                    vec![ScheduledOpen {
                        url: format!("https://web.whatsapp.com/send?text={}", text),
                        delay: Duration::ZERO,
                        navigation: Navigation::NewTab,
                    }]
                };
                ShareTarget {
                    network,
                    copy_text: None,
                    notice: None,
                    opens,
                }
            }
            Network::Instagram => {
                let open = if device.is_mobile() {
                    ScheduledOpen {
                        url: "instagram://camera".to_string(),
                        delay: self.app_fallback_delay,
                        navigation: Navigation::Redirect,
                    }
                } else {
                    ScheduledOpen {
                        url: "https://www.instagram.com/".to_string(),
                        delay: self.app_fallback_delay,
                        navigation: Navigation::NewTab,
                    }
                };
                ShareTarget {
                    network,
                    copy_text: Some(Self::instagram_text(artifact)),
                    notice: Some(instagram_notice(artifact.locale)),
                    opens: vec![open],
                }
            }
            Network::Twitter => {
                let text = self.tweet_text(&artifact.share_text);
                ShareTarget {
                    network,
                    copy_text: None,
                    notice: None,
                    opens: vec![ScheduledOpen {
                        url: format!(
                            "https://x.com/intent/tweet?text={}&url={}",
                            urlencoding::encode(&text),
                            urlencoding::encode(&artifact.share_url)
                        ),
                        delay: Duration::ZERO,
                        navigation: Navigation::NewTab,
                    }],
                }
            }
            Network::Facebook => ShareTarget {
                network,
                copy_text: None,
                notice: None,
                opens: vec![ScheduledOpen {
                    url: format!(
                        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                        urlencoding::encode(&artifact.share_url),
                        urlencoding::encode(&artifact.share_text)
                    ),
                    delay: Duration::ZERO,
                    navigation: Navigation::NewTab,
                }],
            },
        }
    }
}

/// Truncate to at most `budget` characters, ending in [`ELLIPSIS`] when cut. A budget
/// too small to hold the marker gets a plain cut.
pub fn truncate_with_ellipsis(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    if budget < ELLIPSIS.len() {
        return text.chars().take(budget).collect();
    }
    let mut out: String = text.chars().take(budget - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Messaging-channel invitation, one fixed phrase per locale.
pub fn discovery_phrase(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Discover your message today",
        Locale::Pt => "Descubra sua mensagem hoje",
        Locale::Es => "Descubre tu mensaje hoy",
        Locale::Fr => "Découvrez votre message aujourd'hui",
        Locale::It => "Scopri il tuo messaggio oggi",
    }
}

/// Notice shown after the photo-sharing channel copied its text.
pub fn instagram_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "✅ Text copied!\n\n📱 Opening Instagram...\n\n💡 Pro tip: You can also download the generated image for your story!",
        Locale::Pt => "✅ Texto copiado!\n\n📱 Abrindo Instagram...\n\n💡 Dica: Você também pode baixar a imagem gerada para seu story!",
        Locale::Es => "✅ ¡Texto copiado!\n\n📱 Abriendo Instagram...\n\n💡 Consejo: ¡También puedes descargar la imagen generada para tu historia!",
        Locale::Fr => "✅ Texte copié!\n\n📱 Ouverture d'Instagram...\n\n💡 Astuce: Vous pouvez aussi télécharger l'image générée pour votre story!",
        Locale::It => "✅ Testo copiato!\n\n📱 Aprendo Instagram...\n\n💡 Suggerimento: Puoi anche scaricare l'immagine generata per la tua storia!",
    }
}

/// Download control label and tooltip.
pub fn download_labels(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::En => ("Download Image", "Download image for sharing"),
        Locale::Pt => ("Baixar Imagem", "Baixar imagem para compartilhar"),
        Locale::Es => ("Descargar Imagen", "Descargar imagen para compartir"),
        Locale::Fr => ("Télécharger Image", "Télécharger l'image pour partager"),
        Locale::It => ("Scarica Immagine", "Scarica immagine per condividere"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer(base: &str) -> ShareComposer {
        ShareComposer::new(base).unwrap()
    }

    #[test]
    fn base_url_is_canonicalized() {
        let composer = composer("https://cookies.test/app?lang=pt#top");
        assert_eq!(composer.base_url(), "https://cookies.test/app");
        assert_eq!(composer.share_url(Locale::Fr), "https://cookies.test/app?lang=fr");
    }

    #[test]
    fn bare_origin_gets_root_path() {
        let composer = composer("https://cookies.test");
        assert_eq!(composer.share_url(Locale::En), "https://cookies.test/?lang=en");
    }

    #[test]
    fn host_keeps_port_and_drops_credentials() {
        assert_eq!(composer("https://cookies.test:8443/app").host(), "cookies.test:8443");
        assert_eq!(composer("http://localhost").host(), "localhost");
        assert_eq!(composer("https://cookies.test:443/").host(), "cookies.test");
        assert_eq!(composer("https://user:pw@cookies.test/").host(), "cookies.test");
    }

    #[test]
    fn credentials_never_reach_share_links() {
        let composer = composer("https://user:pw@cookies.test/app");
        assert_eq!(composer.base_url(), "https://cookies.test/app");
        assert_eq!(composer.share_url(Locale::Es), "https://cookies.test/app?lang=es");
    }

    #[test]
    fn uppercase_scheme_and_host_are_normalized() {
        let composer = composer("HTTPS://Cookies.Test/App");
        assert_eq!(composer.host(), "cookies.test");
        assert_eq!(composer.share_url(Locale::It), "https://cookies.test/App?lang=it");
    }

    #[test]
    fn unparseable_base_is_rejected() {
        assert!(matches!(
            ShareComposer::new("cookies.test/app"),
            Err(FortuneError::InvalidUrl(_))
        ));
    }

    #[test]
    fn budget_is_never_exceeded() {
        assert_eq!(truncate_with_ellipsis("hello", 2), "he");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 3), "...");
        assert_eq!(truncate_with_ellipsis("hello", 4), "h...");
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("abc", 250), "abc");
        let exact = "x".repeat(250);
        assert_eq!(truncate_with_ellipsis(&exact, 250), exact);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ç".repeat(300);
        let cut = truncate_with_ellipsis(&text, 250);
        assert_eq!(cut.chars().count(), 250);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn network_names_parse() {
        for n in Network::ALL {
            assert_eq!(n.name().parse::<Network>().unwrap(), n);
        }
        assert_eq!("X".parse::<Network>().unwrap(), Network::Twitter);
        assert!("myspace".parse::<Network>().is_err());
    }
}
