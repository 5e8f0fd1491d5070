//! Logging helpers that keep proverbs, share texts and clipboard payloads on one log line.

use std::fmt;

/// Longest preview written to the log, in characters.
pub const MAX_PREVIEW: usize = 160;

/// Display adapter that escapes while formatting, so `debug!("{}", LogText(s))` costs
/// nothing when the level is filtered out.
///
/// - `\n`, `\r`, `\t` => `\\n`, `\\r`, `\\t`
/// - backslash => `\\\\`
/// - other control characters => `\\xNN`
/// - past [`MAX_PREVIEW`] characters => cut with `…`
#[derive(Debug, Clone, Copy)]
pub struct LogText<'a>(pub &'a str);

impl fmt::Display for LogText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (count, ch) in self.0.chars().enumerate() {
            if count >= MAX_PREVIEW {
                return f.write_str("…");
            }
            match ch {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\x{:02X}", c as u32)?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}
