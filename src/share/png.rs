//! PNG drawing surface.
//!
//! Crawlers and photo apps want a raster image. This surface records the preview as
//! an SVG document through [`SvgSurface`], then rasterizes it at 1200x630 with resvg
//! and encodes the pixels as PNG. Text is shaped with whatever fonts are loaded into
//! the font database; a family with no installed face is skipped by the rasterizer.

use log::{debug, warn};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::io::Cursor;
use std::sync::Arc;

use super::preview::{DrawingSurface, Font, ImageResource, Rect, HEIGHT, WIDTH};
use super::svg::SvgSurface;
use crate::error::{FortuneError, Result};

/// Eight-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

pub struct PngSurface {
    svg: SvgSurface,
    fonts: Arc<fontdb::Database>,
}

impl PngSurface {
    /// Surface drawing text with the system's installed fonts.
    pub fn new() -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        debug!("png surface loaded {} font faces", fonts.len());
        Self::with_fonts(fonts)
    }

    /// Surface with a caller-provided font database. An empty database renders the
    /// background and strokes only.
    pub fn with_fonts(fonts: fontdb::Database) -> Self {
        Self {
            svg: SvgSurface::new(),
            fonts: Arc::new(fonts),
        }
    }
}

impl Default for PngSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for PngSurface {
    fn fill_linear_gradient(&mut self, rect: Rect, from: (f32, f32), to: (f32, f32), stops: &[(f32, &str)]) {
        self.svg.fill_linear_gradient(rect, from, to, stops);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.svg.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32) {
        self.svg.stroke_rect(rect, color, line_width);
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: &str, line_width: f32) {
        self.svg.stroke_polyline(points, color, line_width);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: &str) {
        self.svg.fill_text(text, x, y, font, color);
    }

    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        self.svg.measure_text(text, font)
    }

    fn encode(&mut self) -> Result<ImageResource> {
        let document = self.svg.encode()?;
        if self.fonts.is_empty() {
            warn!("no fonts available; preview text will be missing");
        }

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fonts);
        let tree = usvg::Tree::from_data(&document.data, &options)
            .map_err(|e| FortuneError::Render(format!("svg parse: {}", e)))?;

        let (width, height) = (WIDTH as u32, HEIGHT as u32);
        let mut pixmap =
            Pixmap::new(width, height).ok_or_else(|| FortuneError::Render("zero-sized canvas".to_string()))?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let rgba: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let raster = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| FortuneError::Render("pixel buffer size mismatch".to_string()))?;

        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(raster)
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| FortuneError::Render(format!("png encode: {}", e)))?;

        Ok(ImageResource {
            mime: "image/png",
            extension: "png",
            data: out.into_inner(),
        })
    }
}
