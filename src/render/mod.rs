// Word cloud rendering: frequency table in, PNG out.
//
// The CloudRenderer trait is the seam the pipeline talks to. The bitmap
// implementation lays words out on a spiral and rasterizes them with an
// embedded 8x8 bitmap font, so no system fonts are needed.

pub mod palette;
pub mod wordcloud;

use std::path::Path;

use anyhow::Result;

use crate::text::frequency::FrequencyTable;
use palette::Palette;

/// Trait for turning a frequency table into an image file.
pub trait CloudRenderer {
    /// Render `table` with `palette` and write the image to `path`.
    /// Returns the number of words that made it onto the canvas.
    fn render(&self, table: &FrequencyTable, palette: &Palette, path: &Path) -> Result<usize>;
}
