use thiserror::Error;

/// Errors raised by the fortune cookie core.
///
/// None of these is fatal to the page: callers either recover (clipboard, assets)
/// or treat them as configuration bugs that tests must catch (empty catalog).
#[derive(Debug, Error)]
pub enum FortuneError {
    /// Drawing from a fortune list with no entries.
    #[error("empty catalog: no fortunes to draw from")]
    EmptyCatalog,

    /// A locale code outside the supported set.
    #[error("locale not found: {0}")]
    LocaleNotFound(String),

    /// A share or copy action with no revealed fortune.
    #[error("no fortune revealed yet")]
    NotRevealed,

    /// A clipboard tier failed; the copy ladder moves on to the next tier.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// Reading or writing the persisted preference.
    #[error("preference io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed preference file.
    #[error("preference format error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page URL that does not parse as an absolute http(s) URL.
    #[error("invalid page url {0}")]
    InvalidUrl(String),

    /// The drawing surface could not produce an image.
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, FortuneError>;
