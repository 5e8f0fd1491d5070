//! Social preview image layout.
//!
//! The preview is a fixed 1200x630 composition: amber gradient, double border with
//! corner marks, localized title, the fortune word-wrapped to a measured pixel width,
//! quotation glyphs, and a footer with the ancient-wisdom phrase and the page host.
//!
//! Pixels are not produced here. [`render_preview`] issues drawing calls against a
//! [`DrawingSurface`] and asks it to encode the result. Line wrapping uses the
//! surface's own text measurement, so wrap points follow whatever font the surface
//! really draws with.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;
use crate::locale::Catalog;
use crate::share::COOKIE_EMOJI;

pub const WIDTH: f32 = 1200.0;
pub const HEIGHT: f32 = 630.0;

/// Horizontal budget for one fortune line.
pub const MAX_TEXT_WIDTH: f32 = WIDTH - 160.0;
pub const LINE_HEIGHT: f32 = 55.0;

const OUTER_INSET: f32 = 30.0;
const INNER_INSET: f32 = 45.0;
const CORNER_SIZE: f32 = 40.0;
const TITLE_Y: f32 = 120.0;
const RULE_Y: f32 = 140.0;
const RULE_WIDTH: f32 = 200.0;

/// Background color stops along the top-left to bottom-right diagonal.
pub const GRADIENT_STOPS: [(f32, &str); 4] = [
    (0.0, "#fef3c7"),
    (0.3, "#fde68a"),
    (0.7, "#f59e0b"),
    (1.0, "#d97706"),
];

pub const PAPER_TINT: &str = "rgba(139, 69, 19, 0.03)";
pub const BORDER_OUTER: &str = "rgba(146, 64, 14, 0.4)";
pub const BORDER_INNER: &str = "rgba(146, 64, 14, 0.2)";
pub const CORNER_COLOR: &str = "rgba(146, 64, 14, 0.3)";
pub const TITLE_SHADOW: &str = "rgba(0, 0, 0, 0.1)";
pub const TITLE_COLOR: &str = "#8b4513";
pub const TEXT_SHADOW: &str = "rgba(0, 0, 0, 0.08)";
pub const TEXT_COLOR: &str = "#451a03";
pub const QUOTE_COLOR: &str = "rgba(146, 64, 14, 0.6)";
pub const WISDOM_COLOR: &str = "rgba(146, 64, 14, 0.5)";
pub const HOST_COLOR: &str = "#92400e";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    const fn new(family: &'static str, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    const fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }

    const fn italic(self) -> Self {
        Self {
            style: FontStyle::Italic,
            ..self
        }
    }
}

pub const TITLE_SHADOW_FONT: Font = Font::new("Georgia, serif", 52.0).bold();
pub const TITLE_FONT: Font = Font::new("Georgia, serif", 50.0).bold();
pub const FORTUNE_FONT: Font = Font::new("\"Crimson Text\", Georgia, serif", 38.0);
pub const QUOTE_FONT: Font = Font::new("Georgia, serif", 80.0).bold();
pub const WISDOM_FONT: Font = Font::new("Georgia, serif", 24.0).italic();
pub const HOST_FONT: Font = Font::new("Georgia, serif", 22.0);

/// Encoded output of a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    pub mime: &'static str,
    pub extension: &'static str,
    pub data: Vec<u8>,
}

impl ImageResource {
    /// Suggested download name, `fortune-cookie-<millis>.<ext>`.
    pub fn file_name(&self, timestamp_millis: i64) -> String {
        format!("fortune-cookie-{}.{}", timestamp_millis, self.extension)
    }

    /// Self-contained `data:` URL usable as `og:image`. Raster images are base64
    /// encoded, text formats percent-encoded.
    pub fn data_url(&self) -> String {
        match std::str::from_utf8(&self.data) {
            Ok(text) if self.mime != "image/png" => {
                format!("data:{},{}", self.mime, urlencoding::encode(text))
            }
            _ => format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data)),
        }
    }
}

/// 2-D drawing primitives the preview needs. Text is horizontally centered on `x`.
pub trait DrawingSurface {
    fn fill_linear_gradient(&mut self, rect: Rect, from: (f32, f32), to: (f32, f32), stops: &[(f32, &str)]);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32);
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: &str, line_width: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str);
    fn measure_text(&self, text: &str, font: &Font) -> f32;
    fn encode(&mut self) -> Result<ImageResource>;
}

/// Greedy word wrap at a measured width. A single word wider than `max_width`
/// still gets its own line.
pub fn wrap_lines<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Vertical placement of the fortune block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    /// Baseline of the first line.
    pub start_y: f32,
    pub total_height: f32,
}

impl TextBlock {
    pub fn layout<S: DrawingSurface + ?Sized>(surface: &S, fortune: &str) -> Self {
        let lines = wrap_lines(fortune, MAX_TEXT_WIDTH, |s| surface.measure_text(s, &FORTUNE_FONT));
        let total_height = lines.len() as f32 * LINE_HEIGHT;
        let start_y = (HEIGHT - total_height) / 2.0 + 80.0;
        Self {
            lines,
            start_y,
            total_height,
        }
    }

    pub fn baseline(&self, index: usize) -> f32 {
        self.start_y + index as f32 * LINE_HEIGHT
    }
}

/// Draw the full preview for `fortune` and encode it.
pub fn render_preview<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    fortune: &str,
    catalog: &Catalog,
    host: &str,
) -> Result<ImageResource> {
    let cx = WIDTH / 2.0;
    let full = Rect::new(0.0, 0.0, WIDTH, HEIGHT);

    surface.fill_linear_gradient(full, (0.0, 0.0), (WIDTH, HEIGHT), &GRADIENT_STOPS);
    surface.fill_rect(full, PAPER_TINT);

    surface.stroke_rect(
        Rect::new(OUTER_INSET, OUTER_INSET, WIDTH - 2.0 * OUTER_INSET, HEIGHT - 2.0 * OUTER_INSET),
        BORDER_OUTER,
        6.0,
    );
    surface.stroke_rect(
        Rect::new(INNER_INSET, INNER_INSET, WIDTH - 2.0 * INNER_INSET, HEIGHT - 2.0 * INNER_INSET),
        BORDER_INNER,
        2.0,
    );
    for corner in corner_marks() {
        surface.stroke_polyline(&corner, CORNER_COLOR, 3.0);
    }

    surface.fill_text(catalog.title, cx + 2.0, TITLE_Y + 2.0, &TITLE_SHADOW_FONT, TITLE_SHADOW);
    surface.fill_text(catalog.title, cx, TITLE_Y, &TITLE_FONT, TITLE_COLOR);
    let rule_x = (WIDTH - RULE_WIDTH) / 2.0;
    surface.stroke_polyline(&[(rule_x, RULE_Y), (rule_x + RULE_WIDTH, RULE_Y)], BORDER_OUTER, 2.0);

    let block = TextBlock::layout(&*surface, fortune);
    for (i, line) in block.lines.iter().enumerate() {
        surface.fill_text(line, cx + 2.0, block.baseline(i) + 2.0, &FORTUNE_FONT, TEXT_SHADOW);
    }
    for (i, line) in block.lines.iter().enumerate() {
        surface.fill_text(line, cx, block.baseline(i), &FORTUNE_FONT, TEXT_COLOR);
    }

    let half = MAX_TEXT_WIDTH / 2.0;
    surface.fill_text("\"", cx - half - 20.0, block.start_y - 20.0, &QUOTE_FONT, QUOTE_COLOR);
    surface.fill_text(
        "\"",
        cx + half + 20.0,
        block.start_y + block.total_height + 20.0,
        &QUOTE_FONT,
        QUOTE_COLOR,
    );

    let wisdom = format!("{} {} {}", COOKIE_EMOJI, catalog.ancient_wisdom, COOKIE_EMOJI);
    surface.fill_text(&wisdom, cx, HEIGHT - 100.0, &WISDOM_FONT, WISDOM_COLOR);
    surface.fill_text(host, cx, HEIGHT - 60.0, &HOST_FONT, HOST_COLOR);

    surface.encode()
}

/// L-shaped marks inside the inner border, clockwise from top-left.
fn corner_marks() -> [[(f32, f32); 3]; 4] {
    let (l, t) = (INNER_INSET, INNER_INSET);
    let (r, b) = (WIDTH - INNER_INSET, HEIGHT - INNER_INSET);
    let s = CORNER_SIZE;
    [
        [(l, t + s), (l, t), (l + s, t)],
        [(r - s, t), (r, t), (r, t + s)],
        [(r - s, b), (r, b), (r, b - s)],
        [(l, b - s), (l, b), (l + s, b)],
    ]
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Gradient { rect: Rect, stops: Vec<(f32, String)> },
    FillRect { rect: Rect, color: String },
    StrokeRect { rect: Rect, color: String, line_width: f32 },
    Polyline { points: Vec<(f32, f32)>, color: String, line_width: f32 },
    Text { text: String, x: f32, y: f32, font: Font, color: String },
}

/// Surface that records calls instead of drawing. Text width is a fixed advance per
/// character, so wrap points are predictable.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub advance: f32,
}

impl RecordingSurface {
    pub fn new(advance: f32) -> Self {
        Self {
            ops: Vec::new(),
            advance,
        }
    }

    /// Every text drawn in the given color, in call order.
    pub fn texts_in(&self, color: &str) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, color: c, .. } if c == color => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fortune_lines(&self) -> Vec<&str> {
        self.texts_in(TEXT_COLOR)
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_linear_gradient(&mut self, rect: Rect, _from: (f32, f32), _to: (f32, f32), stops: &[(f32, &str)]) {
        self.ops.push(DrawOp::Gradient {
            rect,
            stops: stops.iter().map(|(o, c)| (*o, c.to_string())).collect(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color: color.to_string(),
            line_width,
        });
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: &str, line_width: f32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: *font,
            color: color.to_string(),
        });
    }

    fn measure_text(&self, text: &str, _font: &Font) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn encode(&mut self) -> Result<ImageResource> {
        Ok(ImageResource {
            mime: "application/x-draw-ops",
            extension: "ops",
            data: format!("{:?}", self.ops).into_bytes(),
        })
    }
}
