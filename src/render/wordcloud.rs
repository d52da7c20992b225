// Bitmap word cloud renderer.
//
// Layout follows the usual word cloud recipe: take the most frequent words,
// size each relative to the previous one, and place it at the first free
// spot along an Archimedean spiral out from the canvas centre. If a word
// doesn't fit, shrink it and try again; once the font drops below the
// minimum size, stop.
//
// Collision checks run on a coarse occupancy grid with a summed-area table,
// so each candidate position costs O(1).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use tracing::{debug, info};

use super::palette::{parse_hex, Palette};
use super::CloudRenderer;
use crate::text::frequency::FrequencyTable;

/// Glyph cells are 8x8 pixels at font size 8.
const GLYPH_PX: u32 = 8;

/// Occupancy grid resolution in pixels.
const CELL_PX: u32 = 4;

/// Blank space kept around every word, in pixels.
const WORD_PADDING: u32 = 2;

/// Default cream background.
pub const DEFAULT_BACKGROUND: &str = "#F5F5DC";

/// Rendering parameters.
#[derive(Debug, Clone)]
pub struct CloudOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    /// Cap on the number of words considered
    pub max_words: usize,
    /// How strongly frequency drives size (0 = rank only, 1 = proportional)
    pub relative_scaling: f64,
    pub min_font_size: u32,
    /// Largest font tried; defaults to a quarter of the canvas height
    pub max_font_size: Option<u32>,
    pub font_step: u32,
    /// Physical resolution recorded in the PNG
    pub dpi: u32,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background: Rgb([0xf5, 0xf5, 0xdc]),
            max_words: 200,
            relative_scaling: 0.5,
            min_font_size: 10,
            max_font_size: None,
            font_step: 1,
            dpi: 150,
        }
    }
}

impl CloudOptions {
    /// Override the background from a `#RRGGBB` string.
    pub fn with_background(mut self, hex: &str) -> Result<Self> {
        self.background =
            parse_hex(hex).with_context(|| format!("Invalid background color: {hex}"))?;
        Ok(self)
    }
}

/// A word's final position on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub x: u32,
    pub y: u32,
    pub font_size: u32,
    /// count / max count, drives the color
    pub weight: f64,
}

impl PlacedWord {
    pub fn width(&self) -> u32 {
        text_width(&self.word, self.font_size)
    }

    pub fn height(&self) -> u32 {
        self.font_size
    }
}

/// Word cloud renderer backed by an in-memory RGB canvas.
#[derive(Debug, Clone, Default)]
pub struct BitmapCloudRenderer {
    pub options: CloudOptions,
}

impl BitmapCloudRenderer {
    pub fn new(options: CloudOptions) -> Self {
        Self { options }
    }

    /// Compute word positions without drawing anything.
    pub fn layout(&self, table: &FrequencyTable) -> Vec<PlacedWord> {
        let opts = &self.options;
        let words = table.most_common(opts.max_words);
        let Some(max_count) = words.first().map(|(_, c)| *c as f64) else {
            return Vec::new();
        };

        let mut grid = OccupancyGrid::new(opts.width, opts.height);
        let mut placed = Vec::new();
        let mut font_size = opts.max_font_size.unwrap_or(opts.height / 4).max(1);
        let mut last_freq = 1.0;

        'words: for (i, (word, count)) in words.iter().enumerate() {
            let freq = *count as f64 / max_count;
            if opts.relative_scaling != 0.0 && i > 0 {
                let factor = opts.relative_scaling * (freq / last_freq) + (1.0 - opts.relative_scaling);
                font_size = (factor * font_size as f64).round() as u32;
            }

            loop {
                if font_size < opts.min_font_size.max(1) {
                    debug!(placed = placed.len(), "Font below minimum size; stopping layout");
                    break 'words;
                }
                let w = text_width(word, font_size) + 2 * WORD_PADDING;
                let h = font_size + 2 * WORD_PADDING;
                if let Some((x, y)) = grid.find_spot(w, h) {
                    grid.occupy(x, y, w, h);
                    placed.push(PlacedWord {
                        word: word.clone(),
                        x: x + WORD_PADDING,
                        y: y + WORD_PADDING,
                        font_size,
                        weight: freq,
                    });
                    break;
                }
                font_size = font_size.saturating_sub(opts.font_step.max(1));
            }

            last_freq = freq;
        }

        placed
    }

    /// Rasterize a layout onto a fresh canvas.
    pub fn draw(&self, layout: &[PlacedWord], palette: &Palette) -> RgbImage {
        let mut img = RgbImage::from_pixel(
            self.options.width,
            self.options.height,
            self.options.background,
        );
        for placed in layout {
            let color = palette.color_at(placed.weight);
            draw_text(&mut img, placed, color);
        }
        img
    }
}

impl CloudRenderer for BitmapCloudRenderer {
    fn render(&self, table: &FrequencyTable, palette: &Palette, path: &Path) -> Result<usize> {
        let layout = self.layout(table);
        let img = self.draw(&layout, palette);
        write_png(&img, path, self.options.dpi)?;

        info!(
            path = %path.display(),
            words = layout.len(),
            palette = palette.name,
            "Saved word cloud"
        );
        Ok(layout.len())
    }
}

/// Pixel width of `word` at `font_size`.
fn text_width(word: &str, font_size: u32) -> u32 {
    word.chars().count() as u32 * font_size
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or([0; 8])
}

/// Nearest-neighbour scale the 8x8 glyphs of `placed.word` onto the canvas.
fn draw_text(img: &mut RgbImage, placed: &PlacedWord, color: Rgb<u8>) {
    let glyphs: Vec<[u8; 8]> = placed.word.chars().map(glyph).collect();
    let size = placed.font_size;

    for py in 0..placed.height() {
        let gy = (py * GLYPH_PX / size) as usize;
        for px in 0..placed.width() {
            let gx = px * GLYPH_PX / size;
            let ci = (gx / GLYPH_PX) as usize;
            let bit = gx % GLYPH_PX;
            let lit = glyphs
                .get(ci)
                .map(|g| g[gy.min(7)] & (1 << bit) != 0)
                .unwrap_or(false);
            if !lit {
                continue;
            }
            let (x, y) = (placed.x + px, placed.y + py);
            if x < img.width() && y < img.height() {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Write an RGB image as PNG with a physical resolution chunk.
pub fn write_png(img: &RgbImage, path: &Path, dpi: u32) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create image file: {}", path.display()))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    // PNG stores density in pixels per metre
    let ppm = (dpi as f64 / 0.0254).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to write PNG header: {}", path.display()))?;
    writer
        .write_image_data(img.as_raw())
        .with_context(|| format!("Failed to write PNG data: {}", path.display()))?;
    writer.finish()?;
    Ok(())
}

/// Coarse occupancy map with a summed-area table for rectangle queries.
struct OccupancyGrid {
    cols: u32,
    rows: u32,
    occupied: Vec<bool>,
    // (cols + 1) x (rows + 1), row-major
    integral: Vec<u32>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Self {
        let cols = width / CELL_PX;
        let rows = height / CELL_PX;
        Self {
            cols,
            rows,
            occupied: vec![false; (cols * rows) as usize],
            integral: vec![0; ((cols + 1) * (rows + 1)) as usize],
        }
    }

    fn cells(px: u32) -> u32 {
        px.div_ceil(CELL_PX)
    }

    /// Occupied cells in the cell rectangle [c0, c0+cw) x [r0, r0+ch).
    fn sum(&self, c0: u32, r0: u32, cw: u32, ch: u32) -> u32 {
        let stride = self.cols + 1;
        let at = |c: u32, r: u32| self.integral[(r * stride + c) as usize];
        let (c1, r1) = (c0 + cw, r0 + ch);
        at(c1, r1) + at(c0, r0) - at(c0, r1) - at(c1, r0)
    }

    /// Top-left pixel of the first free w x h rectangle on a spiral from the centre.
    fn find_spot(&self, w: u32, h: u32) -> Option<(u32, u32)> {
        let (cw, ch) = (Self::cells(w), Self::cells(h));
        if cw > self.cols || ch > self.rows {
            return None;
        }

        let centre_c = (self.cols - cw) as f64 / 2.0;
        let centre_r = (self.rows - ch) as f64 / 2.0;
        let max_radius = ((self.cols * self.cols + self.rows * self.rows) as f64).sqrt();
        // aspect keeps the spiral elliptical, matching the canvas shape
        let aspect = self.cols as f64 / self.rows.max(1) as f64;

        let mut theta: f64 = 0.0;
        loop {
            let r = 0.5 * theta;
            if r > max_radius {
                return None;
            }
            let c = (centre_c + r * theta.cos() * aspect.sqrt()).round();
            let row = (centre_r + r * theta.sin() / aspect.sqrt()).round();

            if c >= 0.0 && row >= 0.0 {
                let (c, row) = (c as u32, row as u32);
                if c + cw <= self.cols && row + ch <= self.rows && self.sum(c, row, cw, ch) == 0 {
                    return Some((c * CELL_PX, row * CELL_PX));
                }
            }

            theta += 1.0 / r.max(2.0);
        }
    }

    fn occupy(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let (c0, r0) = (x / CELL_PX, y / CELL_PX);
        let c1 = (c0 + Self::cells(w)).min(self.cols);
        let r1 = (r0 + Self::cells(h)).min(self.rows);
        for r in r0..r1 {
            for c in c0..c1 {
                self.occupied[(r * self.cols + c) as usize] = true;
            }
        }
        self.rebuild_integral();
    }

    fn rebuild_integral(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.occupied[(r * self.cols + c) as usize] as u32;
                let above = self.integral[(r * stride + c + 1) as usize];
                self.integral[((r + 1) * stride + c + 1) as usize] = above + row_sum;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_renderer() -> BitmapCloudRenderer {
        BitmapCloudRenderer::new(CloudOptions {
            width: 240,
            height: 160,
            min_font_size: 8,
            ..Default::default()
        })
    }

    fn overlaps(a: &PlacedWord, b: &PlacedWord) -> bool {
        a.x < b.x + b.width() && b.x < a.x + a.width() && a.y < b.y + b.height() && b.y < a.y + a.height()
    }

    #[test]
    fn test_empty_table_has_no_layout() {
        assert!(small_renderer().layout(&FrequencyTable::new()).is_empty());
    }

    #[test]
    fn test_layout_in_bounds_and_disjoint() {
        let table: FrequencyTable = [("rose", 9), ("oak", 6), ("lily", 4), ("yew", 3), ("fern", 2), ("ash", 1)]
            .into_iter()
            .collect();
        let renderer = small_renderer();
        let layout = renderer.layout(&table);

        assert!(!layout.is_empty());
        assert_eq!(layout[0].word, "rose");
        for (i, a) in layout.iter().enumerate() {
            assert!(a.x + a.width() <= 240 && a.y + a.height() <= 160, "{a:?} out of bounds");
            for b in &layout[i + 1..] {
                assert!(!overlaps(a, b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_sizes_do_not_grow_with_rank() {
        let table: FrequencyTable = [("rose", 10), ("oak", 5), ("lily", 2)].into_iter().collect();
        let layout = small_renderer().layout(&table);
        for pair in layout.windows(2) {
            assert!(pair[0].font_size >= pair[1].font_size);
        }
    }

    #[test]
    fn test_max_words_cap() {
        let table: FrequencyTable = (0..50u8)
            .map(|i| (format!("w{}", (b'a' + i % 26) as char).repeat(1 + i as usize / 26), 1))
            .collect();
        let renderer = BitmapCloudRenderer::new(CloudOptions {
            max_words: 5,
            ..Default::default()
        });
        assert!(renderer.layout(&table).len() <= 5);
    }

    #[test]
    fn test_draw_leaves_background_when_empty() {
        let renderer = small_renderer();
        let palette = Palette::by_name("YlGn").unwrap();
        let img = renderer.draw(&[], &palette);
        assert_eq!(img.dimensions(), (240, 160));
        assert!(img.pixels().all(|p| *p == renderer.options.background));
    }

    #[test]
    fn test_render_writes_png_with_density() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.png");
        let table: FrequencyTable = [("rose", 3), ("oak", 1)].into_iter().collect();
        let palette = Palette::by_name("RdPu").unwrap();

        let placed = small_renderer().render(&table, &palette, &path).unwrap();
        assert!(placed > 0);

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (240, 160));
        let dims = info.pixel_dims.expect("pHYs chunk");
        assert_eq!(dims.xppu, 5906);
    }

    #[test]
    fn test_background_override() {
        let opts = CloudOptions::default().with_background("#000000").unwrap();
        assert_eq!(opts.background, Rgb([0, 0, 0]));
        assert!(CloudOptions::default().with_background("cream").is_err());
    }
}
