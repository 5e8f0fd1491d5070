use fortune_cookie::locale::{Locale, LocaleStore};
use fortune_cookie::platform::DeviceClass;
use fortune_cookie::share::clipboard::{spawn_copy, Clipboard, CopyTier, CopyTimings, ManualPrompt};
use fortune_cookie::Result;
use std::time::Duration;

/// Records what reached it; offers the secure tier only when asked.
#[derive(Default)]
struct RecordingClipboard {
    secure: bool,
    contents: Option<String>,
    prompted: bool,
}

impl Clipboard for RecordingClipboard {
    fn secure_available(&self) -> bool {
        self.secure
    }

    fn write_secure(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn legacy_copy(&mut self, _text: &str) -> Result<bool> {
        Ok(false)
    }

    fn prompt_manual(&mut self, _prompt: &ManualPrompt) {
        self.prompted = true;
    }
}

#[tokio::test]
async fn spawned_copy_reports_through_channel() {
    let labels = LocaleStore::builtin().get_catalog(Locale::Es).share_labels;
    let clip = RecordingClipboard {
        secure: true,
        ..Default::default()
    };
    let rx = spawn_copy(clip, "texto".to_string(), labels, DeviceClass::Desktop, CopyTimings::default());
    let (clip, report) = rx.await.expect("copy report");
    assert_eq!(report.tier, CopyTier::Secure);
    assert_eq!(clip.contents.as_deref(), Some("texto"));
    assert!(!clip.prompted);
}

#[test]
fn spawned_copy_falls_back_under_block_on() {
    let labels = LocaleStore::builtin().get_catalog(Locale::Fr).share_labels;
    let timings = CopyTimings {
        copied: Duration::from_millis(2000),
        manual: Duration::from_millis(3500),
    };
    let (clip, report) = tokio_test::block_on(async {
        spawn_copy(RecordingClipboard::default(), "x".to_string(), labels, DeviceClass::Mobile, timings)
            .await
            .expect("copy report")
    });
    assert_eq!(report.tier, CopyTier::Manual);
    assert_eq!(report.hold, Duration::from_millis(3500));
    assert!(clip.prompted);
    assert!(clip.contents.is_none());
}
