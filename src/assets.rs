//! Decorative image sources.
//!
//! The cookie halves and the background art are decoration. A source that fails to
//! load is swapped for a fixed placeholder; the original URL is kept so the failure
//! can still be diagnosed. Nothing here ever returns an error to the caller.

use log::warn;

/// Shown in place of any decorative image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "https://64.media.tumblr.com/3021504c29aad6668e3e8e773cc4cdc3/db67b21f54f002e4-65/s1280x1920/c2b4b767ac07668682c1986153e68ed9c4d664ef.png";

/// Whole-cookie illustration used by the idle view.
pub const COOKIE_IMAGE: &str = "https://64.media.tumblr.com/e626dc6308160d3e8429bc0a02c714e1/b7fffc789710bf2f-86/s500x750/7d135969703a110edf5037b738a6f281b023b01b.pnj";

/// Where a decorative image ends up coming from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Original(String),
    Placeholder { original: String },
}

impl ImageSource {
    /// URL to actually display.
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Original(url) => url,
            ImageSource::Placeholder { .. } => PLACEHOLDER_IMAGE,
        }
    }

    /// The URL that was requested, regardless of fallback.
    pub fn original_url(&self) -> &str {
        match self {
            ImageSource::Original(url) => url,
            ImageSource::Placeholder { original } => original,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder { .. })
    }
}

/// Probe for whether an image URL can be loaded.
pub trait AssetLoader {
    fn load(&self, url: &str) -> Result<(), String>;
}

/// Resolve `url` through `loader`, falling back to [`PLACEHOLDER_IMAGE`].
pub fn resolve_image<L: AssetLoader + ?Sized>(loader: &L, url: &str) -> ImageSource {
    match loader.load(url) {
        Ok(()) => ImageSource::Original(url.to_string()),
        Err(e) => {
            warn!("decorative image {} failed to load ({}); using placeholder", url, e);
            ImageSource::Placeholder {
                original: url.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reachable;

    impl AssetLoader for Reachable {
        fn load(&self, _url: &str) -> Result<(), String> {
            Ok(())
        }
    }

    struct Broken;

    impl AssetLoader for Broken {
        fn load(&self, _url: &str) -> Result<(), String> {
            Err("404".to_string())
        }
    }

    #[test]
    fn loaded_image_keeps_its_url() {
        let src = resolve_image(&Reachable, COOKIE_IMAGE);
        assert_eq!(src.src(), COOKIE_IMAGE);
        assert!(!src.is_placeholder());
    }

    #[test]
    fn failed_image_uses_placeholder_and_keeps_original() {
        let src = resolve_image(&Broken, "https://cdn.test/cookie-left.png");
        assert!(src.is_placeholder());
        assert_eq!(src.src(), PLACEHOLDER_IMAGE);
        assert_eq!(src.original_url(), "https://cdn.test/cookie-left.png");
    }
}
