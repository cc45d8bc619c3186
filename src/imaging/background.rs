//! Naive background removal.
//!
//! Deliberately a toy: the background is assumed to be the most frequent
//! sampled color, and every pixel within a fixed Euclidean RGB distance of
//! it becomes fully transparent. Works passably on flat studio backgrounds;
//! real segmentation is out of scope for this tool.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use rayon::prelude::*;
use std::collections::HashMap;

/// Color similarity threshold (Euclidean RGB distance).
pub const DEFAULT_TOLERANCE: f64 = 50.0;

/// Pick the most frequent exact RGB triple, sampling every 4th pixel.
///
/// Ties go to the color that reached the winning count first, in row-major
/// order, so the result is deterministic. An empty image falls back to white.
pub fn detect_background_color(image: &RgbaImage) -> Rgb<u8> {
    let mut frequency: HashMap<[u8; 3], u32> = HashMap::new();
    let mut best: Option<[u8; 3]> = None;
    let mut best_count = 0u32;

    for (i, pixel) in image.pixels().enumerate() {
        if i % 4 != 0 {
            continue;
        }
        let key = [pixel[0], pixel[1], pixel[2]];
        let count = frequency.entry(key).or_insert(0);
        *count += 1;
        if *count > best_count {
            best_count = *count;
            best = Some(key);
        }
    }

    Rgb(best.unwrap_or([255, 255, 255]))
}

/// Make every pixel within `tolerance` of `background` fully transparent.
///
/// Only alpha changes; RGB values are left in place. The pass is a pure
/// per-pixel transform, parallelized across the buffer.
pub fn remove_background(image: &RgbaImage, background: Rgb<u8>, tolerance: f64) -> RgbaImage {
    let mut out = image.clone();
    let tolerance_sq = tolerance * tolerance;
    let buffer: &mut [u8] = &mut out;
    buffer.par_chunks_exact_mut(4).for_each(|pixel| {
        let dr = pixel[0] as f64 - background[0] as f64;
        let dg = pixel[1] as f64 - background[1] as f64;
        let db = pixel[2] as f64 - background[2] as f64;
        if dr * dr + dg * dg + db * db < tolerance_sq {
            pixel[3] = 0;
        }
    });
    out
}

/// Composite over an opaque white background (for JPEG-style exports).
pub fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let alpha = a as f64 / 255.0;
        let blend = |c: u8| (c as f64 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}
