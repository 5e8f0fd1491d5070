//! # Fortune Cookie - Localized Proverbs with Share Links
//!
//! The core of a fortune cookie widget: click the cookie, get a random proverb in one
//! of five languages, and share it to a messaging app, a photo app, a microblog or a
//! social network, with a generated preview image for link crawlers.
//!
//! ## Features
//!
//! - **Locales**: English, Portuguese, Spanish, French and Italian catalogs and proverb lists.
//! - **Locale Resolution**: `?lang=` query parameter, then stored preference, then platform tag.
//! - **Fortune Draws**: uniform random pick with an injectable RNG for reproducible tests.
//! - **Share Composer**: canonical share link, quoted share text, per-network targets.
//! - **Clipboard Ladder**: secure write, legacy copy, manual prompt, one "copied" signal.
//! - **Preview Images**: 1200x630 layout on a pluggable drawing surface, rasterized to PNG.
//! - **Crawler Metadata**: title plus Open Graph and Twitter card tags per reveal.
//!
//! ## Quick Start
//!
//! ```rust
//! use fortune_cookie::config::Config;
//! use fortune_cookie::locale::LocaleStore;
//! use fortune_cookie::preferences::MemoryPreferences;
//! use fortune_cookie::session::FortuneApp;
//! use rand::rngs::mock::StepRng;
//!
//! let config = Config::default();
//! let mut app = FortuneApp::start(&config, LocaleStore::builtin(), MemoryPreferences::new(), "?lang=pt", None).unwrap();
//! let fortune = app.reveal(&mut StepRng::new(0, 0)).unwrap().to_string();
//! let artifact = app.share_artifact().unwrap();
//! assert!(artifact.share_text.starts_with(&format!("\"{}\"", fortune)));
//! assert!(artifact.share_url.ends_with("?lang=pt"));
//! ```
//!
//! ## Module Organization
//!
//! - [`locale`] - locales, catalogs, fortune lists and initial-locale resolution
//! - [`fortune`] - random fortune selection
//! - [`share`] - share composer, clipboard ladder and preview rendering
//! - [`session`] - idle/revealed state machine and the view owner
//! - [`meta`] - document title and crawler meta tags
//! - [`preferences`] - persisted locale preference
//! - [`platform`] - device-class detection
//! - [`assets`] - decorative images with placeholder fallback
//! - [`config`] - TOML configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   FortuneApp    │ ← session state + side effects
//! └─────────────────┘
//!     │          │
//! ┌────────┐ ┌───────────────┐
//! │ Locale │ │ ShareComposer │ ← pure derivations
//! │ Store  │ │ + preview     │
//! └────────┘ └───────────────┘
//!     │          │
//! ┌─────────────────┐
//! │ Preferences,    │ ← platform collaborators
//! │ Clipboard, Surf │
//! └─────────────────┘
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod fortune;
pub mod locale;
pub mod logutil;
pub mod meta;
pub mod platform;
pub mod preferences;
pub mod session;
pub mod share;

pub use error::{FortuneError, Result};
