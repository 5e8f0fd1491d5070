//! Clipboard copy with a three-tier fallback.
//!
//! 1. secure-context clipboard write, when the platform offers one
//! 2. legacy selection-based copy
//! 3. show the text so the user can copy it by hand
//!
//! Every tier ends with the same "copied" signal. The caller cannot tell which tier
//! succeeded; the [`CopyReport`] only records it for logs and tests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

use crate::error::{FortuneError, Result};
use crate::locale::ShareLabels;
use crate::logutil::LogText;
use crate::platform::DeviceClass;

/// Platform clipboard primitives.
pub trait Clipboard {
    /// True when a secure-context clipboard API is present.
    fn secure_available(&self) -> bool;

    /// Write through the secure-context API.
    fn write_secure(&mut self, text: &str) -> Result<()>;

    /// Selection-based copy. `Ok(false)` means the platform refused without erroring.
    fn legacy_copy(&mut self, text: &str) -> Result<bool>;

    /// Present the text for manual copying.
    fn prompt_manual(&mut self, prompt: &ManualPrompt);
}

/// Manual-copy presentation, chosen by device class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualPrompt {
    /// Mobile: one alert containing label and text.
    Alert { message: String },
    /// Desktop: a prompt with the text prefilled so it can be selected.
    Prompt { message: String, value: String },
}

impl ManualPrompt {
    pub fn new(device: DeviceClass, labels: &ShareLabels, text: &str) -> Self {
        if device.is_mobile() {
            ManualPrompt::Alert {
                message: format!("{}\n\n{}", labels.copy_manual, text),
            }
        } else {
            ManualPrompt::Prompt {
                message: labels.copy_manual.to_string(),
                value: text.to_string(),
            }
        }
    }
}

/// Which tier ended the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTier {
    Secure,
    Legacy,
    Manual,
}

/// How long the "copied" indicator stays up per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTimings {
    pub copied: Duration,
    pub manual: Duration,
}

impl Default for CopyTimings {
    fn default() -> Self {
        Self {
            copied: Duration::from_millis(2000),
            manual: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub tier: CopyTier,
    /// Display time of the "copied" indicator.
    pub hold: Duration,
}

/// Run the ladder for `text`.
pub fn copy_with_fallback<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
    labels: &ShareLabels,
    device: DeviceClass,
    timings: CopyTimings,
) -> CopyReport {
    if clipboard.secure_available() {
        match clipboard.write_secure(text) {
            Ok(()) => {
                debug!("copied via secure clipboard: {}", LogText(text));
                return CopyReport {
                    tier: CopyTier::Secure,
                    hold: timings.copied,
                };
            }
            Err(e) => warn!("secure clipboard write failed: {}", e),
        }
    }
    legacy_or_manual(clipboard, text, labels, device, timings)
}

/// Tiers 2 and 3 only. Used where a caller already decided the secure API is out.
pub fn legacy_or_manual<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    text: &str,
    labels: &ShareLabels,
    device: DeviceClass,
    timings: CopyTimings,
) -> CopyReport {
    match clipboard.legacy_copy(text) {
        Ok(true) => {
            debug!("copied via legacy selection: {}", LogText(text));
            return CopyReport {
                tier: CopyTier::Legacy,
                hold: timings.copied,
            };
        }
        Ok(false) => warn!("legacy copy refused by platform"),
        Err(e) => warn!("legacy copy failed: {}", e),
    }
    clipboard.prompt_manual(&ManualPrompt::new(device, labels, text));
    CopyReport {
        tier: CopyTier::Manual,
        hold: timings.manual,
    }
}

/// Run the ladder on a blocking task and report through a channel. The caller does
/// not wait for completion to stay correct; it updates the indicator when the report
/// arrives.
pub fn spawn_copy<C>(
    mut clipboard: C,
    text: String,
    labels: ShareLabels,
    device: DeviceClass,
    timings: CopyTimings,
) -> oneshot::Receiver<(C, CopyReport)>
where
    C: Clipboard + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::task::spawn_blocking(move || {
        let report = copy_with_fallback(&mut clipboard, &text, &labels, device, timings);
        let _ = tx.send((clipboard, report));
    });
    rx
}

/// UI "copied" flag that reverts on its own after the hold time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedIndicator {
    until: Option<Instant>,
}

impl CopiedIndicator {
    pub fn mark(&mut self, now: Instant, hold: Duration) {
        self.until = Some(now + hold);
    }

    pub fn is_shown(&self, now: Instant) -> bool {
        self.until.map(|t| now < t).unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.until = None;
    }
}

/// Clipboard for a terminal session.
///
/// There is no secure-context API. The legacy tier emits an OSC 52 selection
/// sequence, which most terminal emulators turn into a clipboard write, and only
/// when stdout is a TTY. The manual tier prints the text.
#[derive(Debug, Default)]
pub struct TerminalClipboard {
    force_tty: Option<bool>,
}

impl TerminalClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_tty(&self) -> bool {
        self.force_tty
            .unwrap_or_else(|| atty::is(atty::Stream::Stdout))
    }
}

impl Clipboard for TerminalClipboard {
    fn secure_available(&self) -> bool {
        false
    }

    fn write_secure(&mut self, _text: &str) -> Result<()> {
        Err(FortuneError::Clipboard(
            "no secure clipboard in a terminal".to_string(),
        ))
    }

    fn legacy_copy(&mut self, text: &str) -> Result<bool> {
        if !self.is_tty() {
            return Ok(false);
        }
        let mut out = std::io::stdout().lock();
        write!(out, "\x1b]52;c;{}\x07", osc52_payload(text))?;
        out.flush()?;
        Ok(true)
    }

    fn prompt_manual(&mut self, prompt: &ManualPrompt) {
        match prompt {
            ManualPrompt::Alert { message } => println!("{}", message),
            ManualPrompt::Prompt { message, value } => println!("{}\n{}", message, value),
        }
    }
}

/// Standard base64 of `text`, as OSC 52 expects.
fn osc52_payload(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
