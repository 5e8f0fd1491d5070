use fortune_cookie::config::Config;
use fortune_cookie::locale::Locale;
use fortune_cookie::share::ShareComposer;

#[tokio::test]
async fn loads_partial_file_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fortune-cookie.toml");
    tokio::fs::write(
        &path,
        r#"
[site]
base_url = "https://cookies.test/app?lang=pt"

[share]
copied_reset_ms = 1500
manual_copied_reset_ms = 3000
instagram_copied_reset_ms = 3000
app_fallback_delay_ms = 500
"#,
    )
    .await
    .unwrap();

    let config = Config::load(path.to_str().unwrap()).await.expect("config");
    assert_eq!(config.share.copied_reset_ms, 1500);
    assert_eq!(config.preferences.key, "fortune-cookie-language");
    assert_eq!(config.preview.output_dir, ".");

    let page = config.site.page_url().expect("page url");
    let composer = ShareComposer::from_config(&page, &config.share);
    assert_eq!(composer.base_url(), "https://cookies.test/app");
    assert_eq!(composer.share_url(Locale::It), "https://cookies.test/app?lang=it");
}

#[tokio::test]
async fn missing_file_reports_path() {
    let err = Config::load("/nonexistent/fortune-cookie.toml").await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file /nonexistent/fortune-cookie.toml"));
}

#[tokio::test]
async fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    tokio::fs::write(&path, "[share\ncopied_reset_ms = ").await.unwrap();
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn default_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fortune-cookie.toml");
    let path = path.to_str().unwrap().to_string();
    let config = tokio_test::block_on(async {
        Config::create_default(&path).await.unwrap();
        Config::load(&path).await.unwrap()
    });
    assert_eq!(config.site.base_url, "https://fortune-cookie.example/");
    assert_eq!(config.share.app_fallback_delay_ms, 1000);
    assert_eq!(config.logging.file, None);
}

#[tokio::test]
async fn relative_base_url_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fortune-cookie.toml");
    tokio::fs::write(&path, "[site]\nbase_url = \"cookies.test/app\"\n").await.unwrap();
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().starts_with("Invalid [site] in config file"), "{}", err);
}
