//! Fortune selection used by the reveal action.
//!
//! A draw is uniform over the whole list, one independent pick per reveal. Repeats are
//! allowed: nothing remembers what was shown last. The random source is a parameter so
//! tests can pass a seeded or mock generator and assert the exact pick.
//!
//! ```rust
//! use fortune_cookie::fortune::draw;
//! use rand::rngs::mock::StepRng;
//!
//! let list = ["first", "second"];
//! let mut rng = StepRng::new(0, 0);
//! assert_eq!(draw(&list, &mut rng).unwrap(), "first");
//! ```

use log::trace;
use rand::Rng;

use crate::error::{FortuneError, Result};
use crate::locale::{Locale, LocaleStore};

/// Pick one entry of `fortunes` uniformly at random.
///
/// Fails with [`FortuneError::EmptyCatalog`] instead of returning an empty string.
pub fn draw<'a, T, R>(fortunes: &'a [T], rng: &mut R) -> Result<&'a str>
where
    T: AsRef<str>,
    R: Rng + ?Sized,
{
    if fortunes.is_empty() {
        return Err(FortuneError::EmptyCatalog);
    }
    let idx = rng.gen_range(0..fortunes.len());
    trace!("drew fortune #{} of {}", idx, fortunes.len());
    Ok(fortunes[idx].as_ref())
}

/// Draw from a locale's list using thread-local entropy.
pub fn get_fortune(store: &LocaleStore, locale: Locale) -> Result<String> {
    let mut rng = rand::thread_rng();
    draw(store.get_fortune_list(locale), &mut rng).map(str::to_string)
}
