//! Two-tier font resolution.
//!
//! Tier 1 loads the first usable outline font from a fixed list of system
//! font paths. Tier 2 is an embedded 5x7 bitmap font that can never fail to
//! load, so rendering is independent of what the host has installed. Any
//! tier-1 failure silently selects tier 2.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

/// System fonts tried in order for the outline tier.
const SYSTEM_FONT_CANDIDATES: [&str; 5] = [
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Bitmap glyph cell geometry: 5 columns x 7 rows, one column of spacing.
const CELL_COLS: u32 = 5;
const CELL_ROWS: u32 = 7;
const CELL_ADVANCE: u32 = 6;

/// A font the renderer can draw with. Either a real outline font found on
/// the system, or the embedded bitmap fallback.
pub enum ResolvedFont {
    Outline(FontVec),
    Builtin,
}

impl ResolvedFont {
    /// Resolve a font, preferring the system tier.
    pub fn resolve() -> Self {
        for candidate in SYSTEM_FONT_CANDIDATES {
            if let Some(font) = load_outline_font(Path::new(candidate)) {
                return Self::Outline(font);
            }
        }
        Self::Builtin
    }

    /// Measure `text` at `px`, returning (width, height) in pixels.
    pub fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        match self {
            Self::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(px));
                let mut width = 0.0f32;
                let mut prev = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                let height = scaled.ascent() - scaled.descent();
                (width.ceil() as u32, height.ceil() as u32)
            }
            Self::Builtin => {
                let scale = builtin_scale(px);
                let chars = text.chars().count() as u32;
                let width = if chars == 0 {
                    0
                } else {
                    (chars * CELL_ADVANCE - 1) * scale
                };
                (width, CELL_ROWS * scale)
            }
        }
    }

    /// Draw `text` with its top-left corner at (x, y). Pixels falling
    /// outside the canvas are clipped.
    pub fn draw(&self, img: &mut RgbImage, x: i32, y: i32, text: &str, px: f32, color: Rgb<u8>) {
        match self {
            Self::Outline(font) => draw_outline(font, img, x, y, text, px, color),
            Self::Builtin => draw_builtin(img, x, y, text, builtin_scale(px), color),
        }
    }
}

/// Read and parse one outline font candidate. Any failure means "try the
/// next tier", so errors collapse to None.
fn load_outline_font(path: &Path) -> Option<FontVec> {
    let data = std::fs::read(path).ok()?;
    FontVec::try_from_vec(data).ok()
}

fn draw_outline(
    font: &FontVec,
    img: &mut RgbImage,
    x: i32,
    y: i32,
    text: &str,
    px: f32,
    color: Rgb<u8>,
) {
    let scaled = font.as_scaled(PxScale::from(px));
    let mut caret = point(x as f32, y as f32 + scaled.ascent());
    let mut last: Option<Glyph> = None;

    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        if let Some(prev) = last.take() {
            caret.x += scaled.kern(prev.id, glyph.id);
        }
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        last = Some(glyph.clone());

        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px_x = bounds.min.x as i32 + gx as i32;
                let px_y = bounds.min.y as i32 + gy as i32;
                blend_pixel(img, px_x, px_y, color, coverage);
            });
        }
    }
}

fn draw_builtin(img: &mut RgbImage, x: i32, y: i32, text: &str, scale: u32, color: Rgb<u8>) {
    let mut caret = x;
    for ch in text.chars() {
        let rows = builtin_glyph(ch);
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..CELL_COLS {
                if bits & (0x10u8 >> col) == 0 {
                    continue;
                }
                // One font bit becomes a scale x scale block
                for dy in 0..scale {
                    for dx in 0..scale {
                        blend_pixel(
                            img,
                            caret + (col * scale + dx) as i32,
                            y + (row as u32 * scale + dy) as i32,
                            color,
                            1.0,
                        );
                    }
                }
            }
        }
        caret += (CELL_ADVANCE * scale) as i32;
    }
}

/// Integer upscaling factor that brings the 5x7 cell close to the requested
/// pixel size.
fn builtin_scale(px: f32) -> u32 {
    ((px / 8.0).round() as u32).max(1)
}

fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let bg = *img.get_pixel(x as u32, y as u32);
    let blended = Rgb([
        (bg[0] as f32 + (color[0] as f32 - bg[0] as f32) * a) as u8,
        (bg[1] as f32 + (color[1] as f32 - bg[1] as f32) * a) as u8,
        (bg[2] as f32 + (color[2] as f32 - bg[2] as f32) * a) as u8,
    ]);
    img.put_pixel(x as u32, y as u32, blended);
}

/// 5x7 glyph rows, MSB-first in the low 5 bits. Lowercase folds to
/// uppercase; anything unmapped renders as a hollow box so missing coverage
/// is visible instead of invisible.
fn builtin_glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ' ' => [0x00; 7],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_never_panics() {
        // Whatever the host has installed, some tier must answer
        let _ = ResolvedFont::resolve();
    }

    #[test]
    fn builtin_measure_scales_with_text_length() {
        let font = ResolvedFont::Builtin;
        let (short, h_short) = font.measure("Tigers", 48.0);
        let (long, h_long) = font.measure("Tigers vs Sharks", 48.0);
        assert!(long > short);
        assert_eq!(h_short, h_long);
        assert_eq!(font.measure("", 48.0).0, 0);
    }

    #[test]
    fn builtin_draw_marks_pixels_with_the_requested_color() {
        let font = ResolvedFont::Builtin;
        let mut img = RgbImage::new(200, 60);
        font.draw(&mut img, 4, 4, "A1", 28.0, Rgb([255, 255, 255]));
        let lit = img.pixels().filter(|p| p[0] == 255).count();
        assert!(lit > 0, "nothing was drawn");
    }

    #[test]
    fn builtin_draw_clips_at_canvas_edges() {
        let font = ResolvedFont::Builtin;
        let mut img = RgbImage::new(10, 10);
        // Must not panic when the text runs off every edge
        font.draw(&mut img, -20, -20, "CLIPPED", 48.0, Rgb([255, 255, 255]));
        font.draw(&mut img, 8, 8, "CLIPPED", 48.0, Rgb([255, 255, 255]));
    }

    #[test]
    fn builtin_scale_never_drops_below_one() {
        assert_eq!(builtin_scale(1.0), 1);
        assert_eq!(builtin_scale(28.0), 4);
        assert_eq!(builtin_scale(48.0), 6);
    }
}
