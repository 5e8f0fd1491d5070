use fortune_cookie::config::Config;
use fortune_cookie::locale::{Locale, LocaleStore};
use fortune_cookie::preferences::{FilePreferences, PreferenceStore, DEFAULT_KEY};
use fortune_cookie::session::FortuneApp;

#[test]
fn missing_file_means_no_preference() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = FilePreferences::new(dir.path().join("absent.json"), DEFAULT_KEY);
    assert_eq!(prefs.load(), None);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("preferences.json");
    let prefs = FilePreferences::new(&path, DEFAULT_KEY);
    prefs.save(Locale::Es).unwrap();
    assert!(path.exists());
    let raw = std::fs::read_to_string(&path).unwrap();
    let map: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(map["fortune-cookie-language"], "es");
}

#[test]
fn choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let config = Config::default();

    let mut app = FortuneApp::start(
        &config,
        LocaleStore::builtin(),
        FilePreferences::new(&path, DEFAULT_KEY),
        "",
        Some("en-GB"),
    )
    .expect("start");
    assert_eq!(app.locale(), Locale::En);
    app.set_locale(Locale::Fr).unwrap();

    // Stored choice outranks the platform language on the next visit
    let next = FortuneApp::start(
        &config,
        LocaleStore::builtin(),
        FilePreferences::new(&path, DEFAULT_KEY),
        "",
        Some("en-GB"),
    )
    .expect("start");
    assert_eq!(next.locale(), Locale::Fr);
}

#[test]
fn stale_value_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"fortune-cookie-language":"klingon"}"#).unwrap();
    let app = FortuneApp::start(
        &Config::default(),
        LocaleStore::builtin(),
        FilePreferences::new(&path, DEFAULT_KEY),
        "",
        Some("it-IT"),
    )
    .expect("start");
    assert_eq!(app.locale(), Locale::It);
}

#[test]
fn custom_key_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    FilePreferences::new(&path, "lang-pref").save(Locale::Pt).unwrap();
    assert_eq!(FilePreferences::new(&path, DEFAULT_KEY).load(), None);
    assert_eq!(FilePreferences::new(&path, "lang-pref").load().as_deref(), Some("pt"));
}

#[test]
fn concurrent_saves_keep_both_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let handles: Vec<_> = ["first-key", "second-key"]
        .into_iter()
        .map(|key| {
            let prefs = FilePreferences::new(&path, key);
            std::thread::spawn(move || {
                for locale in Locale::ALL.into_iter().cycle().take(25) {
                    prefs.save(locale).expect("save");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("saver thread");
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw).unwrap();
    // 25 saves cycle through five locales and end on the last one
    assert_eq!(map["first-key"], "it");
    assert_eq!(map["second-key"], "it");
}
