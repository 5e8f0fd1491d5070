//! # Session State
//!
//! The widget has two phases:
//!
//! ```text
//! Idle --reveal--> Revealed(fortune, preview?) --reset--> Idle
//! ```
//!
//! [`SessionState`] is an immutable value; `reveal`, `reset` and `select_locale`
//! consume it and return the next state. [`FortuneApp`] owns the current value plus
//! the collaborators (locale store, composer, preference store, document head) and
//! applies the side effects each transition implies.
//!
//! A fortune held by a state always comes from the active locale's list. Picking a
//! different locale therefore drops back to `Idle` rather than keep a proverb in the
//! previous language.

use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

use crate::assets::{resolve_image, AssetLoader, ImageSource, COOKIE_IMAGE};
use crate::config::{Config, SiteConfig};
use crate::error::{FortuneError, Result};
use crate::fortune;
use crate::locale::{resolve_initial_locale, Catalog, Locale, LocaleStore};
use crate::logutil::LogText;
use crate::meta::{document_meta, teardown_meta, DocumentHead, DocumentMeta, MetaContext};
use crate::platform::DeviceDetector;
use crate::preferences::PreferenceStore;
use crate::share::clipboard::{copy_with_fallback, CopiedIndicator, CopyReport, CopyTier, CopyTimings, Clipboard};
use crate::share::preview::{render_preview, DrawingSurface};
use crate::share::{ImageResource, Network, ShareArtifact, ShareComposer, ShareTarget};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    locale: Locale,
    fortune: Option<String>,
    preview: Option<ImageResource>,
}

impl SessionState {
    /// Idle state in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            fortune: None,
            preview: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn fortune(&self) -> Option<&str> {
        self.fortune.as_deref()
    }

    pub fn preview(&self) -> Option<&ImageResource> {
        self.preview.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.fortune.is_some()
    }

    /// Draw a fortune from the active locale. Already revealed: unchanged.
    pub fn reveal<R: Rng + ?Sized>(self, store: &LocaleStore, rng: &mut R) -> Result<Self> {
        if self.is_revealed() {
            return Ok(self);
        }
        let fortune = fortune::draw(store.get_fortune_list(self.locale), rng)?.to_string();
        Ok(Self {
            fortune: Some(fortune),
            preview: None,
            ..self
        })
    }

    /// Back to idle; the preview goes with the fortune.
    pub fn reset(self) -> Self {
        Self::new(self.locale)
    }

    pub fn select_locale(self, locale: Locale) -> Self {
        if locale == self.locale {
            self
        } else {
            Self::new(locale)
        }
    }

    /// Attach a rendered preview. Ignored while idle.
    pub fn with_preview(self, preview: ImageResource) -> Self {
        if !self.is_revealed() {
            return self;
        }
        Self {
            preview: Some(preview),
            ..self
        }
    }
}

/// One entry of the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: Locale,
    pub name: &'static str,
    pub selected: bool,
}

/// Top-level view owner.
pub struct FortuneApp<P: PreferenceStore> {
    store: LocaleStore,
    composer: ShareComposer,
    preferences: P,
    site: SiteConfig,
    timings: CopyTimings,
    instagram_hold: Duration,
    state: SessionState,
    copied: CopiedIndicator,
    head: DocumentHead,
}

impl<P: PreferenceStore> FortuneApp<P> {
    /// Resolve the initial locale and write the idle metadata. Fails only when the
    /// configured page URL is unusable.
    pub fn start(
        config: &Config,
        store: LocaleStore,
        preferences: P,
        query: &str,
        platform_language_tag: Option<&str>,
    ) -> Result<Self> {
        let page = config.site.page_url()?;
        let stored = preferences.load();
        let locale = resolve_initial_locale(query, stored.as_deref(), platform_language_tag);
        info!("starting in locale {}", locale);

        let mut app = Self {
            store,
            composer: ShareComposer::from_config(&page, &config.share),
            preferences,
            site: config.site.clone(),
            timings: CopyTimings {
                copied: Duration::from_millis(config.share.copied_reset_ms),
                manual: Duration::from_millis(config.share.manual_copied_reset_ms),
            },
            instagram_hold: Duration::from_millis(config.share.instagram_copied_reset_ms),
            state: SessionState::new(locale),
            copied: CopiedIndicator::default(),
            head: DocumentHead::new(),
        };
        app.refresh_meta();
        Ok(app)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.state.locale()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.store.get_catalog(self.locale())
    }

    pub fn composer(&self) -> &ShareComposer {
        &self.composer
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// Prompt under the cookie: reveal while idle, try again once revealed.
    pub fn prompt(&self) -> &'static str {
        let catalog = self.catalog();
        if self.state.is_revealed() {
            catalog.retry_prompt
        } else {
            catalog.click_prompt
        }
    }

    /// Whole-cookie art for the idle view; `None` once the cookie is cracked.
    pub fn cookie_image<L: AssetLoader + ?Sized>(&self, loader: &L) -> Option<ImageSource> {
        if self.state.is_revealed() {
            None
        } else {
            Some(resolve_image(loader, COOKIE_IMAGE))
        }
    }

    pub fn reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str> {
        if self.state.is_revealed() {
            debug!("reveal ignored: already revealed");
        } else {
            self.state = self.state.clone().reveal(&self.store, rng)?;
            if let Some(f) = self.state.fortune() {
                info!("revealed fortune ({}): {}", self.locale(), LogText(f));
            }
            self.copied.clear();
            self.refresh_meta();
        }
        self.state.fortune().ok_or(FortuneError::NotRevealed)
    }

    pub fn reset(&mut self) {
        if self.state.is_revealed() {
            debug!("reset to idle");
        }
        self.state = self.state.clone().reset();
        self.copied.clear();
        self.refresh_meta();
    }

    /// Switch locale and persist the choice.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        if locale != self.locale() {
            info!("locale changed {} -> {}", self.locale(), locale);
            self.state = self.state.clone().select_locale(locale);
            self.copied.clear();
            self.refresh_meta();
        }
        self.preferences.save(locale)
    }

    /// Same as [`set_locale`](Self::set_locale) for a raw code. Unsupported codes leave
    /// everything untouched.
    pub fn set_locale_code(&mut self, code: &str) -> Result<()> {
        let locale: Locale = code.parse()?;
        self.set_locale(locale)
    }

    pub fn language_options(&self) -> Vec<LanguageOption> {
        let names = &self.catalog().language_names;
        self.store
            .locales()
            .iter()
            .map(|&locale| LanguageOption {
                locale,
                name: names.get(locale),
                selected: locale == self.locale(),
            })
            .collect()
    }

    pub fn share_artifact(&self) -> Result<ShareArtifact> {
        let fortune = self.state.fortune().ok_or(FortuneError::NotRevealed)?;
        let mut artifact = self.composer.compose(fortune, self.locale(), self.catalog());
        artifact.preview_image = self.state.preview().cloned();
        Ok(artifact)
    }

    pub fn share_target<D: DeviceDetector + ?Sized>(&self, network: Network, device: &D) -> Result<ShareTarget> {
        let artifact = self.share_artifact()?;
        Ok(self.composer.target(network, &artifact, device.device_class()))
    }

    /// Resolve a share control and run its clipboard step, if it has one.
    pub fn share<D, C>(&mut self, network: Network, device: &D, clipboard: &mut C, now: Instant) -> Result<ShareTarget>
    where
        D: DeviceDetector + ?Sized,
        C: Clipboard + ?Sized,
    {
        let target = self.share_target(network, device)?;
        if let Some(text) = &target.copy_text {
            let report = copy_with_fallback(
                clipboard,
                text,
                &self.catalog().share_labels,
                device.device_class(),
                self.timings,
            );
            // Only a secure write earns the longer photo-channel hold
            let hold = match report.tier {
                CopyTier::Secure => self.instagram_hold,
                CopyTier::Legacy | CopyTier::Manual => report.hold,
            };
            self.copied.mark(now, hold);
        }
        info!("share via {} ({} url(s))", network, target.opens.len());
        Ok(target)
    }

    /// Copy the clipboard payload and raise the "copied" indicator.
    pub fn copy<D, C>(&mut self, device: &D, clipboard: &mut C, now: Instant) -> Result<CopyReport>
    where
        D: DeviceDetector + ?Sized,
        C: Clipboard + ?Sized,
    {
        let artifact = self.share_artifact()?;
        let report = copy_with_fallback(
            clipboard,
            &artifact.clipboard_payload,
            &self.catalog().share_labels,
            device.device_class(),
            self.timings,
        );
        self.copied.mark(now, report.hold);
        Ok(report)
    }

    /// Record a copy that finished elsewhere, e.g. through
    /// [`spawn_copy`](crate::share::clipboard::spawn_copy).
    pub fn mark_copied(&mut self, report: CopyReport, now: Instant) {
        self.copied.mark(now, report.hold);
    }

    pub fn copied_shown(&self, now: Instant) -> bool {
        self.copied.is_shown(now)
    }

    pub fn copy_timings(&self) -> CopyTimings {
        self.timings
    }

    /// Render the social preview for the current fortune and keep it in the state.
    pub fn render_preview<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> Result<&ImageResource> {
        let fortune = self.state.fortune().ok_or(FortuneError::NotRevealed)?;
        let image = render_preview(surface, fortune, self.catalog(), &self.composer.host())?;
        debug!("rendered preview: {} bytes of {}", image.data.len(), image.mime);
        self.state = self.state.clone().with_preview(image);
        self.refresh_meta();
        self.state.preview().ok_or(FortuneError::NotRevealed)
    }

    pub fn document_meta(&self) -> DocumentMeta {
        let page_url = self.composer.share_url(self.locale());
        let image_url = self.state.preview().map(ImageResource::data_url);
        document_meta(
            self.state.fortune(),
            &MetaContext {
                catalog: self.catalog(),
                locale: self.locale(),
                page_url: &page_url,
                image_url: image_url.as_deref(),
                site: &self.site,
            },
        )
    }

    /// Put title and descriptions back to the locale defaults.
    pub fn teardown(&mut self) {
        self.head.restore(&teardown_meta(self.catalog()));
    }

    fn refresh_meta(&mut self) {
        let meta = self.document_meta();
        self.head.apply(&meta);
    }
}
