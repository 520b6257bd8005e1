//! Placeholder image synthesis.
//!
//! Every generated image is a vertical color gradient with a shadowed team
//! title and an optional caption, so a human flipping through the job can
//! tell shots apart at a glance without any real camera data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::render::font::ResolvedFont;

/// Default placeholder dimensions, landscape like a camera frame
pub const IMAGE_WIDTH: u32 = 1600;
pub const IMAGE_HEIGHT: u32 = 1200;

const JPEG_QUALITY: u8 = 85;

const TITLE_PX: f32 = 48.0;
const SUBTITLE_PX: f32 = 28.0;

/// Shadow offsets for title and subtitle
const TITLE_SHADOW: i32 = 3;
const SUBTITLE_SHADOW: i32 = 2;

/// Vertical gap between title block and subtitle
const SUBTITLE_GAP: i32 = 16;

/// Renders placeholder images with one font resolved for the whole run.
pub struct Renderer {
    font: ResolvedFont,
}

impl Renderer {
    /// Resolve the font once and keep it for every subsequent render.
    pub fn new() -> Self {
        Self {
            font: ResolvedFont::resolve(),
        }
    }

    /// Paint one placeholder and write it as JPEG to `path`, overwriting
    /// any existing file. Only I/O and encoding failures propagate.
    pub fn render(
        &self,
        path: &Path,
        width: u32,
        height: u32,
        title: &str,
        subtitle: Option<&str>,
    ) -> Result<()> {
        let mut img = RgbImage::from_fn(width, height, |_, y| gradient_color(y, height));

        // Title centered both ways, nudged up to leave room for the caption
        let (title_w, title_h) = self.font.measure(title, TITLE_PX);
        let tx = (width as i32 - title_w as i32) / 2;
        let ty = (height as i32 - title_h as i32) / 2 - 20;
        self.draw_shadowed(&mut img, tx, ty, title, TITLE_PX, TITLE_SHADOW, Rgb([255, 255, 255]));

        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            let (sub_w, _) = self.font.measure(subtitle, SUBTITLE_PX);
            let sx = (width as i32 - sub_w as i32) / 2;
            let sy = ty + title_h as i32 + SUBTITLE_GAP;
            self.draw_shadowed(
                &mut img,
                sx,
                sy,
                subtitle,
                SUBTITLE_PX,
                SUBTITLE_SHADOW,
                Rgb([235, 235, 235]),
            );
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
        img.write_with_encoder(encoder)?;
        writer.flush()?;

        Ok(())
    }

    /// Black drop shadow first, then the text itself on top.
    fn draw_shadowed(
        &self,
        img: &mut RgbImage,
        x: i32,
        y: i32,
        text: &str,
        px: f32,
        shadow: i32,
        fill: Rgb<u8>,
    ) {
        self.font.draw(img, x + shadow, y + shadow, text, px, Rgb([0, 0, 0]));
        self.font.draw(img, x, y, text, px, fill);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-to-bottom interpolation between two fixed color triples. Warm at the
/// bottom, cool at the top, so orientation is obvious in thumbnails.
fn gradient_color(y: u32, height: u32) -> Rgb<u8> {
    let t = y as f32 / height as f32;
    Rgb([
        (40.0 + 180.0 * t) as u8,
        (90.0 + 120.0 * (1.0 - t)) as u8,
        (120.0 + 100.0 * t) as u8,
    ])
}
