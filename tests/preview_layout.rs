use fortune_cookie::locale::{Locale, LocaleStore};
use fortune_cookie::share::preview::{
    render_preview, DrawOp, RecordingSurface, HEIGHT, HOST_COLOR, LINE_HEIGHT, TEXT_COLOR, TITLE_COLOR, WIDTH,
    WISDOM_COLOR,
};
use fortune_cookie::share::png::{PngSurface, PNG_SIGNATURE};
use fortune_cookie::share::svg::SvgSurface;
use fortune_cookie::share::ShareComposer;

const FORTUNE: &str = "The journey of a thousand miles begins with a single step.";

#[test]
fn fortune_wraps_at_measured_width() {
    let store = LocaleStore::builtin();
    // 20px per character gives 52 characters per 1040px line
    let mut surface = RecordingSurface::new(20.0);
    render_preview(&mut surface, FORTUNE, store.get_catalog(Locale::En), "cookies.test").unwrap();
    assert_eq!(
        surface.fortune_lines(),
        vec!["The journey of a thousand miles begins with a single", "step."]
    );
}

#[test]
fn text_block_is_vertically_centered() {
    let store = LocaleStore::builtin();
    let mut surface = RecordingSurface::new(20.0);
    render_preview(&mut surface, FORTUNE, store.get_catalog(Locale::En), "cookies.test").unwrap();
    let baselines: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { y, color, .. } if color == TEXT_COLOR => Some(*y),
            _ => None,
        })
        .collect();
    let start = (HEIGHT - 2.0 * LINE_HEIGHT) / 2.0 + 80.0;
    assert_eq!(baselines, vec![start, start + LINE_HEIGHT]);
}

#[test]
fn title_footer_and_host_are_localized() {
    let store = LocaleStore::builtin();
    let catalog = store.get_catalog(Locale::Pt);
    let composer = ShareComposer::new("https://cookies.test:8443/app/?lang=en").expect("base url");
    let mut surface = RecordingSurface::new(10.0);
    render_preview(&mut surface, "Devagar se vai ao longe.", catalog, &composer.host()).unwrap();

    assert_eq!(surface.texts_in(TITLE_COLOR), vec!["Biscoito da Sorte"]);
    assert_eq!(surface.texts_in(HOST_COLOR), vec!["cookies.test:8443"]);
    assert_eq!(
        surface.texts_in(WISDOM_COLOR),
        vec![format!("🥠 {} 🥠", catalog.ancient_wisdom).as_str()]
    );
}

#[test]
fn background_covers_the_canvas() {
    let store = LocaleStore::builtin();
    let mut surface = RecordingSurface::new(10.0);
    render_preview(&mut surface, "x", store.get_catalog(Locale::Fr), "h").unwrap();
    match &surface.ops[0] {
        DrawOp::Gradient { rect, stops } => {
            assert_eq!((rect.w, rect.h), (WIDTH, HEIGHT));
            assert_eq!(stops.len(), 4);
            assert_eq!(stops[0], (0.0, "#fef3c7".to_string()));
        }
        other => panic!("expected gradient first, got {:?}", other),
    }
}

#[test]
fn svg_surface_produces_svg_document() {
    let store = LocaleStore::builtin();
    let mut surface = SvgSurface::new();
    let image = render_preview(&mut surface, "L'union fait la force.", store.get_catalog(Locale::Fr), "cookies.test")
        .unwrap();
    assert_eq!(image.mime, "image/svg+xml");
    assert_eq!(image.file_name(42), "fortune-cookie-42.svg");
    let doc = String::from_utf8(image.data).unwrap();
    assert!(doc.contains(r#"width="1200" height="630""#));
    assert!(doc.contains("Biscuit de Fortune"));
    assert!(doc.contains("L&apos;union fait la force."));
}

#[test]
fn png_surface_writes_a_1200x630_png() {
    use image::GenericImageView;

    let store = LocaleStore::builtin();
    let mut surface = PngSurface::with_fonts(resvg::usvg::fontdb::Database::new());
    let image = render_preview(&mut surface, FORTUNE, store.get_catalog(Locale::En), "cookies.test").unwrap();
    assert_eq!(image.mime, "image/png");
    assert_eq!(image.file_name(1700000000000), "fortune-cookie-1700000000000.png");
    assert!(image.data.starts_with(&PNG_SIGNATURE));

    let decoded = image::load_from_memory(&image.data).expect("decode preview");
    assert_eq!(decoded.dimensions(), (WIDTH as u32, HEIGHT as u32));
    // Top-left corner sits on the first gradient stop
    let corner = decoded.to_rgba8().get_pixel(1, 1).0;
    assert!(corner[0] > 0xf0 && corner[3] == 0xff, "{:?}", corner);
}
