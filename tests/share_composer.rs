use fortune_cookie::fortune::draw;
use fortune_cookie::locale::{resolve_initial_locale, Locale, LocaleStore};
use fortune_cookie::platform::DeviceClass;
use fortune_cookie::share::{Navigation, Network, ShareComposer, TWEET_BUDGET};
use rand::rngs::mock::StepRng;
use std::time::Duration;

const BASE: &str = "https://cookies.test/";

fn composer() -> ShareComposer {
    ShareComposer::new(BASE).expect("base url")
}

#[test]
fn share_link_reopens_in_the_same_locale() {
    let composer = composer();
    for loc in Locale::ALL {
        let url = composer.share_url(loc);
        let query = &url[url.find('?').expect("query")..];
        // A visitor with another stored preference still lands in the sharer's locale
        assert_eq!(resolve_initial_locale(query, Some("en"), Some("pt-BR")), loc);
    }
}

#[test]
fn clipboard_payload_end_to_end() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let mut rng = StepRng::new(0, 0);
    let fortune = draw(store.get_fortune_list(Locale::En), &mut rng).unwrap();
    let artifact = composer.compose(fortune, Locale::En, store.get_catalog(Locale::En));
    assert_eq!(
        artifact.clipboard_payload,
        "\"The journey of a thousand miles begins with a single step.\" - Fortune Cookie\n\nhttps://cookies.test/?lang=en"
    );
    assert!(artifact.preview_image.is_none());
}

#[test]
fn long_text_is_cut_to_the_microblog_budget() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let fortune = "a".repeat(300);
    let artifact = composer.compose(&fortune, Locale::En, store.get_catalog(Locale::En));
    let tweet = composer.tweet_text(&artifact.share_text);
    assert_eq!(tweet.chars().count(), 250);
    assert!(tweet.ends_with("..."));
    let kept: String = artifact.share_text.chars().take(247).collect();
    assert!(tweet.starts_with(&kept));
}

#[test]
fn short_text_is_not_truncated() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let artifact = composer.compose("Short.", Locale::Fr, store.get_catalog(Locale::Fr));
    assert_eq!(composer.tweet_text(&artifact.share_text), "\"Short.\" - Biscuit de Fortune");
}

#[test]
fn microblog_and_sharer_urls_encode_components() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let artifact = composer.compose("Go slow.", Locale::En, store.get_catalog(Locale::En));

    let tweet = composer.target(Network::Twitter, &artifact, DeviceClass::Mobile);
    assert_eq!(tweet.opens.len(), 1);
    assert_eq!(
        tweet.opens[0].url,
        "https://x.com/intent/tweet?text=%22Go%20slow.%22%20-%20Fortune%20Cookie&url=https%3A%2F%2Fcookies.test%2F%3Flang%3Den"
    );

    let fb = composer.target(Network::Facebook, &artifact, DeviceClass::Desktop);
    assert_eq!(
        fb.opens[0].url,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fcookies.test%2F%3Flang%3Den&quote=%22Go%20slow.%22%20-%20Fortune%20Cookie"
    );
    assert_eq!(fb.opens[0].navigation, Navigation::NewTab);
}

#[test]
fn messaging_channel_prefers_the_app_on_mobile() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let artifact = composer.compose("x", Locale::Pt, store.get_catalog(Locale::Pt));
    assert_eq!(
        composer.messaging_text(Locale::Pt),
        "Descubra sua mensagem hoje 🥠\n\nhttps://cookies.test/?lang=pt"
    );

    let mobile = composer.target(Network::WhatsApp, &artifact, DeviceClass::Mobile);
    assert_eq!(mobile.opens.len(), 2);
    assert!(mobile.opens[0].url.starts_with("whatsapp://send?text=Descubra%20sua%20mensagem%20hoje"));
    assert_eq!(mobile.opens[0].navigation, Navigation::Redirect);
    assert!(mobile.opens[1].url.starts_with("https://api.whatsapp.com/send?text="));
    assert_eq!(mobile.opens[1].delay, Duration::from_secs(1));

    let desktop = composer.target(Network::WhatsApp, &artifact, DeviceClass::Desktop);
    assert_eq!(desktop.opens.len(), 1);
    assert!(desktop.opens[0].url.starts_with("https://web.whatsapp.com/send?text="));
}

#[test]
fn photo_channel_copies_then_opens() {
    let store = LocaleStore::builtin();
    let composer = composer();
    let artifact = composer.compose("x", Locale::It, store.get_catalog(Locale::It));

    let mobile = composer.target(Network::Instagram, &artifact, DeviceClass::Mobile);
    assert_eq!(
        mobile.copy_text.as_deref(),
        Some("\"x\" - Biscotto della Fortuna\n\n🔗 https://cookies.test/?lang=it")
    );
    assert!(mobile.notice.expect("notice").starts_with("✅ Testo copiato!"));
    assert_eq!(mobile.opens[0].url, "instagram://camera");
    assert_eq!(mobile.opens[0].delay, Duration::from_millis(1000));

    let desktop = composer.target(Network::Instagram, &artifact, DeviceClass::Desktop);
    assert_eq!(desktop.opens[0].url, "https://www.instagram.com/");
}

#[test]
fn microblog_budget_is_fixed_at_250() {
    assert_eq!(TWEET_BUDGET, 250);
    let composer = composer();
    let exact = "b".repeat(250);
    assert_eq!(composer.tweet_text(&exact), exact);
    assert_eq!(composer.tweet_text(&"b".repeat(251)).chars().count(), 250);
}

#[test]
fn origin_without_path_still_links_to_root() {
    let composer = ShareComposer::new("https://cookies.test").expect("base url");
    assert_eq!(composer.share_url(Locale::En), "https://cookies.test/?lang=en");
    let query = composer.share_url(Locale::Fr);
    assert_eq!(resolve_initial_locale(&query, None, None), Locale::Fr);
}
