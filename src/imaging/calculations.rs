//! Pure calculation functions for the photo compositor.
//!
//! All functions here are pure and testable without any I/O or images.

use super::specs::{PaperSpec, PhotoSpec};

/// A crop rectangle in source-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Whether this region's aspect ratio matches the photo format's.
    ///
    /// The interactive crop that produces regions snaps to the format's
    /// aspect, but pixel rounding leaves it slightly off — `tolerance` is the
    /// allowed relative deviation (0.01 = 1%).
    pub fn matches_aspect(&self, spec: &PhotoSpec, tolerance: f64) -> bool {
        if self.height == 0 || spec.height_mm == 0 {
            return false;
        }
        let crop_aspect = self.width as f64 / self.height as f64;
        let spec_aspect = spec.width_mm as f64 / spec.height_mm as f64;
        (crop_aspect - spec_aspect).abs() <= spec_aspect * tolerance
    }

    /// The largest centered region of a `source_width` × `source_height`
    /// image with the photo format's aspect ratio.
    ///
    /// This is what the CLI uses when no explicit crop is given — the
    /// equivalent of leaving the interactive crop untouched.
    pub fn centered(source_width: u32, source_height: u32, spec: &PhotoSpec) -> Self {
        let spec_aspect = spec.width_mm as f64 / spec.height_mm as f64;
        let source_aspect = source_width as f64 / source_height as f64;

        let (width, height) = if source_aspect > spec_aspect {
            // Source is wider: height is the limit
            let h = source_height;
            (((h as f64) * spec_aspect).round() as u32, h)
        } else {
            let w = source_width;
            (w, ((w as f64) / spec_aspect).round() as u32)
        };
        Self {
            x: (source_width - width.min(source_width)) / 2,
            y: (source_height - height.min(source_height)) / 2,
            width: width.min(source_width),
            height: height.min(source_height),
        }
    }
}

/// Convert millimetres to pixels at the given resolution: `mm / 25.4 * dpi`,
/// rounded to the nearest pixel.
pub fn mm_to_px(mm: u32, dpi: u32) -> u32 {
    (mm as f64 / 25.4 * dpi as f64).round() as u32
}

/// Side length of the square "safe area" canvas that can hold a w×h image
/// rotated around its center without clipping: `2 * (max(w,h)/2) * sqrt(2)`,
/// rounded up.
pub fn safe_area_side(width: u32, height: u32) -> u32 {
    let max_size = width.max(height) as f64;
    (2.0 * (max_size / 2.0) * std::f64::consts::SQRT_2).ceil() as u32
}

/// Computed geometry for one print sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub paper_width_px: u32,
    pub paper_height_px: u32,
    pub tile_width_px: u32,
    pub tile_height_px: u32,
    pub margin_px: u32,
    pub cols: u32,
    pub rows: u32,
}

impl SheetLayout {
    /// Lay out `photo` tiles on `paper` at `dpi`, with `margin_px` of gap
    /// around and between tiles.
    ///
    /// A photo larger than the paper yields `cols == 0` or `rows == 0` — a
    /// valid layout with no tiles, never an error.
    pub fn compute(paper: &PaperSpec, photo: &PhotoSpec, dpi: u32, margin_px: u32) -> Self {
        let paper_width_px = mm_to_px(paper.width_mm, dpi);
        let paper_height_px = mm_to_px(paper.height_mm, dpi);
        let tile_width_px = mm_to_px(photo.width_mm, dpi);
        let tile_height_px = mm_to_px(photo.height_mm, dpi);

        let cols = paper_width_px
            .saturating_sub(margin_px)
            .checked_div(tile_width_px + margin_px)
            .unwrap_or(0);
        let rows = paper_height_px
            .saturating_sub(margin_px)
            .checked_div(tile_height_px + margin_px)
            .unwrap_or(0);

        Self {
            paper_width_px,
            paper_height_px,
            tile_width_px,
            tile_height_px,
            margin_px,
            cols,
            rows,
        }
    }

    /// Total number of photos on the sheet.
    pub fn tile_count(&self) -> u32 {
        self.cols * self.rows
    }

    /// Top-left pixel position of the tile at (col, row).
    pub fn tile_origin(&self, col: u32, row: u32) -> (u32, u32) {
        (
            self.margin_px + col * (self.tile_width_px + self.margin_px),
            self.margin_px + row * (self.tile_height_px + self.margin_px),
        )
    }
}
