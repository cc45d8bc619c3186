//! Crop-and-tile compositor.
//!
//! Two operations, both synchronous single-pass pixel transforms:
//!
//! - [`crop_rotate`]: rotate a source image around its center on a padded
//!   "safe area" canvas, then extract a crop rectangle. Rotation happens
//!   before extraction, so the crop coordinates are interpreted in the
//!   rotated frame.
//! - [`render_print_sheet`]: tile scaled copies of a photo onto a white
//!   sheet sized from physical paper dimensions, with cut-guide borders.
//!
//! Each call takes all inputs as parameters and returns a fresh bitmap;
//! intermediate canvases live and die inside the call.

use super::calculations::{CropRegion, SheetLayout, safe_area_side};
use super::specs::{PaperSpec, PhotoSpec};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgba, RgbaImage, imageops};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("rotation must be a multiple of 90 degrees, got {0}")]
    InvalidRotation(i32),
    #[error("crop region {width}x{height}+{x}+{y} falls outside the rotated safe area")]
    CropOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}

/// Decode an image file. A file that cannot be decoded is a hard error —
/// there is no partial output to salvage.
pub fn load_image(path: &Path) -> Result<DynamicImage, CompositorError> {
    ImageReader::open(path)?
        .decode()
        .map_err(CompositorError::Decode)
}

/// Rotate the source around its center and extract `crop`.
///
/// The source is pasted centered onto a transparent square canvas large
/// enough to hold any rotation of it (see
/// [`safe_area_side`](super::safe_area_side)), the canvas is rotated by
/// `rotation_degrees` (clockwise, multiple of 90), and the crop rectangle —
/// offset by the unrotated image's top-left within the canvas — is cut out.
/// Output dimensions always equal `crop.width` × `crop.height`.
pub fn crop_rotate(
    image: &DynamicImage,
    crop: CropRegion,
    rotation_degrees: i32,
) -> Result<RgbaImage, CompositorError> {
    let rotation = rotation_degrees.rem_euclid(360);
    if rotation % 90 != 0 {
        return Err(CompositorError::InvalidRotation(rotation_degrees));
    }

    let (width, height) = (image.width(), image.height());
    let side = safe_area_side(width, height);

    // Rotate about the center: the rotated bitmap pasted center-on-center
    // into the safe area is exactly the rotated canvas, without the
    // half-pixel drift integer centering would pick up from rotating the
    // padded canvas itself.
    let source = image.to_rgba8();
    let rotated = match rotation {
        0 => source,
        90 => imageops::rotate90(&source),
        180 => imageops::rotate180(&source),
        270 => imageops::rotate270(&source),
        _ => unreachable!("normalized to a multiple of 90 in 0..360"),
    };
    let mut safe = RgbaImage::new(side, side);
    let paste_x = (side - rotated.width()) / 2;
    let paste_y = (side - rotated.height()) / 2;
    imageops::overlay(&mut safe, &rotated, paste_x as i64, paste_y as i64);

    // Crop coordinates are offset by the unrotated image's centered position
    // in the safe area.
    let crop_x = (side - width) as u64 / 2 + crop.x as u64;
    let crop_y = (side - height) as u64 / 2 + crop.y as u64;
    if crop_x + crop.width as u64 > side as u64 || crop_y + crop.height as u64 > side as u64 {
        return Err(CompositorError::CropOutOfBounds {
            x: crop.x,
            y: crop.y,
            width: crop.width,
            height: crop.height,
        });
    }

    Ok(imageops::crop_imm(&safe, crop_x as u32, crop_y as u32, crop.width, crop.height)
        .to_image())
}

/// Tile `photo` onto a white sheet sized for `paper` at `dpi`.
///
/// Each tile is the photo scaled (Lanczos3) to the format's physical size and
/// framed with a 1px light-gray cut guide. A photo format too large for the
/// paper produces a plain white sheet — zero tiles is a valid layout.
pub fn render_print_sheet(
    photo: &RgbaImage,
    paper: &PaperSpec,
    spec: &PhotoSpec,
    dpi: u32,
    margin_px: u32,
) -> RgbaImage {
    let layout = SheetLayout::compute(paper, spec, dpi, margin_px);
    let mut sheet = RgbaImage::from_pixel(
        layout.paper_width_px,
        layout.paper_height_px,
        Rgba([255, 255, 255, 255]),
    );
    if layout.tile_count() == 0 {
        return sheet;
    }

    let tile = imageops::resize(
        photo,
        layout.tile_width_px,
        layout.tile_height_px,
        FilterType::Lanczos3,
    );

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let (x, y) = layout.tile_origin(col, row);
            imageops::overlay(&mut sheet, &tile, x as i64, y as i64);
            draw_cut_guide(&mut sheet, x, y, layout.tile_width_px, layout.tile_height_px);
        }
    }
    sheet
}

/// Light-gray (#eee) 1px border used as a scissor guide around each tile.
fn draw_cut_guide(sheet: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32) {
    let gray = Rgba([238, 238, 238, 255]);
    for dx in 0..width {
        sheet.put_pixel(x + dx, y, gray);
        sheet.put_pixel(x + dx, y + height - 1, gray);
    }
    for dy in 0..height {
        sheet.put_pixel(x, y + dy, gray);
        sheet.put_pixel(x + width - 1, y + dy, gray);
    }
}

/// Output encoding for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossy, no transparency; `quality` is 1-100.
    Jpeg { quality: u8 },
    /// Lossless with alpha.
    Png,
}

/// Serialize a bitmap to encoded bytes.
///
/// Both encoders are deterministic: the same bitmap and format produce
/// byte-identical output. JPEG drops the alpha channel (as the original
/// canvas export did); use PNG when transparency matters.
pub fn export(bitmap: &RgbaImage, format: ExportFormat) -> Result<Vec<u8>, CompositorError> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        ExportFormat::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgba8(bitmap.clone()).to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
            rgb.write_with_encoder(encoder)
                .map_err(CompositorError::Encode)?;
        }
        ExportFormat::Png => {
            let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
            bitmap
                .write_with_encoder(encoder)
                .map_err(CompositorError::Encode)?;
        }
    }
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::specs::{find_paper_spec, find_photo_spec};
    use image::RgbImage;

    /// A test image with a distinct color per pixel position.
    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn crop_output_matches_requested_dimensions_at_all_rotations() {
        let img = gradient_image(300, 200);
        let crop = CropRegion { x: 50, y: 50, width: 100, height: 100 };
        for rotation in [0, 90, 180, 270] {
            let out = crop_rotate(&img, crop, rotation).unwrap();
            assert_eq!((out.width(), out.height()), (100, 100), "rotation {rotation}");
        }
    }

    #[test]
    fn full_image_crop_at_zero_rotation_roundtrips_pixels() {
        let img = gradient_image(64, 48);
        let crop = CropRegion { x: 0, y: 0, width: 64, height: 48 };
        let out = crop_rotate(&img, crop, 0).unwrap();
        assert_eq!(out, img.to_rgba8());
    }

    #[test]
    fn rotation_180_flips_the_gradient() {
        // Square image so the unrotated offsets line up exactly
        let img = gradient_image(100, 100);
        let crop = CropRegion { x: 0, y: 0, width: 100, height: 100 };
        let out = crop_rotate(&img, crop, 180).unwrap();
        let original = img.to_rgba8();
        assert_eq!(out.get_pixel(0, 0), original.get_pixel(99, 99));
        assert_eq!(out.get_pixel(99, 0), original.get_pixel(0, 99));
    }

    #[test]
    fn negative_rotation_normalizes() {
        let img = gradient_image(100, 100);
        let crop = CropRegion { x: 10, y: 10, width: 50, height: 50 };
        let out_neg = crop_rotate(&img, crop, -90).unwrap();
        let out_pos = crop_rotate(&img, crop, 270).unwrap();
        assert_eq!(out_neg, out_pos);
    }

    #[test]
    fn non_right_angle_rotation_is_an_error() {
        let img = gradient_image(10, 10);
        let crop = CropRegion { x: 0, y: 0, width: 5, height: 5 };
        assert!(matches!(
            crop_rotate(&img, crop, 45),
            Err(CompositorError::InvalidRotation(45))
        ));
    }

    #[test]
    fn crop_beyond_safe_area_is_an_error() {
        let img = gradient_image(100, 100);
        let crop = CropRegion { x: 0, y: 0, width: 5000, height: 5000 };
        assert!(matches!(
            crop_rotate(&img, crop, 0),
            Err(CompositorError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn load_image_rejects_non_image_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.jpg");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(CompositorError::Decode(_))
        ));
    }

    #[test]
    fn load_image_missing_file_is_io_error() {
        assert!(matches!(
            load_image(Path::new("/nonexistent/x.png")),
            Err(CompositorError::Io(_))
        ));
    }

    #[test]
    fn sheet_dimensions_come_from_paper_not_tiles() {
        let photo = RgbaImage::from_pixel(500, 500, Rgba([10, 20, 30, 255]));
        let sheet = render_print_sheet(
            &photo,
            find_paper_spec("a4").unwrap(),
            find_photo_spec("usa").unwrap(),
            300,
            20,
        );
        assert_eq!((sheet.width(), sheet.height()), (2480, 3508));
    }

    #[test]
    fn oversized_photo_renders_plain_white_sheet() {
        let photo = RgbaImage::from_pixel(100, 100, Rgba([10, 20, 30, 255]));
        let poster = PhotoSpec {
            id: "poster",
            name: "test poster",
            width_mm: 300,
            height_mm: 300,
        };
        let sheet =
            render_print_sheet(&photo, find_paper_spec("a4").unwrap(), &poster, 300, 20);
        assert_eq!((sheet.width(), sheet.height()), (2480, 3508));
        assert!(sheet.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn tiles_land_at_layout_origins_with_cut_guides() {
        let photo = RgbaImage::from_pixel(500, 500, Rgba([10, 20, 30, 255]));
        let sheet = render_print_sheet(
            &photo,
            find_paper_spec("a4").unwrap(),
            find_photo_spec("usa").unwrap(),
            300,
            20,
        );
        // Margin stays white, tile corner carries the guide, interior the photo
        assert_eq!(*sheet.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*sheet.get_pixel(20, 20), Rgba([238, 238, 238, 255]));
        assert_eq!(*sheet.get_pixel(300, 300), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn export_png_roundtrips_pixels() {
        let img = gradient_image(32, 32).to_rgba8();
        let bytes = export(&img, ExportFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn export_jpeg_is_close_within_quantization() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([100, 150, 200, 255]));
        let bytes = export(&img, ExportFormat::Jpeg { quality: 90 }).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        let p = decoded.get_pixel(8, 8);
        assert!((p[0] as i16 - 100).abs() < 10);
        assert!((p[1] as i16 - 150).abs() < 10);
        assert!((p[2] as i16 - 200).abs() < 10);
    }

    #[test]
    fn export_is_deterministic() {
        let img = gradient_image(24, 24).to_rgba8();
        for format in [ExportFormat::Jpeg { quality: 92 }, ExportFormat::Png] {
            assert_eq!(export(&img, format).unwrap(), export(&img, format).unwrap());
        }
    }
}
