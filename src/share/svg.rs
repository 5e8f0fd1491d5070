//! SVG drawing surface.
//!
//! Lets the command-line build write a real preview file without a canvas. Text is
//! emitted as `<text>` elements, so the viewer's fonts do the rendering. Width
//! measurement is an estimate from per-class character advances in em units, close
//! enough to Georgia for wrap decisions.

use std::fmt::Write;

use super::preview::{DrawingSurface, Font, FontStyle, FontWeight, ImageResource, Rect, HEIGHT, WIDTH};
use crate::error::{FortuneError, Result};

#[derive(Debug, Default)]
pub struct SvgSurface {
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Estimated advance of `ch` in em units.
fn advance_em(ch: char) -> f32 {
    match ch {
        ' ' => 0.25,
        'i' | 'j' | 'l' | '.' | ',' | ';' | ':' | '\'' | '!' | '|' => 0.28,
        'f' | 'r' | 't' | '(' | ')' | '"' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.82,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii() => 0.5,
        // CJK and emoji
        c if (c as u32) >= 0x2E80 => 1.0,
        _ => 0.52,
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

impl DrawingSurface for SvgSurface {
    fn fill_linear_gradient(&mut self, rect: Rect, from: (f32, f32), to: (f32, f32), stops: &[(f32, &str)]) {
        let id = format!("g{}", self.gradients);
        self.gradients += 1;
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
            id, from.0, from.1, to.0, to.1
        );
        for (offset, color) in stops {
            let _ = write!(self.defs, r#"<stop offset="{}" stop-color="{}"/>"#, offset, escape_xml(color));
        }
        self.defs.push_str("</linearGradient>");
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{})"/>"#,
            rect.x, rect.y, rect.w, rect.h, id
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            escape_xml(color)
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            escape_xml(color),
            line_width
        );
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: &str, line_width: f32) {
        let pts: Vec<String> = points.iter().map(|(x, y)| format!("{},{}", x, y)).collect();
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            pts.join(" "),
            escape_xml(color),
            line_width
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str) {
        let weight = match font.weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        let style = match font.style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}" font-style="{}" fill="{}">{}</text>"#,
            x,
            y,
            escape_xml(font.family),
            font.size,
            weight,
            style,
            escape_xml(color),
            escape_xml(text)
        );
    }

    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        let bold = if font.weight == FontWeight::Bold { 1.06 } else { 1.0 };
        text.chars().map(advance_em).sum::<f32>() * font.size * bold
    }

    fn encode(&mut self) -> Result<ImageResource> {
        if self.body.is_empty() {
            return Err(FortuneError::Render("nothing drawn".to_string()));
        }
        let mut doc = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = write!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = WIDTH,
            h = HEIGHT
        );
        if !self.defs.is_empty() {
            let _ = write!(doc, "<defs>{}</defs>", self.defs);
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        Ok(ImageResource {
            mime: "image/svg+xml",
            extension: "svg",
            data: doc.into_bytes(),
        })
    }
}
