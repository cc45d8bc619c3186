//! Image tools — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | **Crop + rotate** | safe-area paste, `imageops::rotate*`, `crop_imm` |
//! | **Print-sheet tiling** | Lanczos3 resize + `imageops::overlay` |
//! | **Encode** | `image` JPEG/PNG encoders |
//! | **Background removal** | frequency sampling + rayon pixel pass |
//!
//! The module is split into:
//! - **Calculations**: pure functions for mm→px math and sheet layout (unit
//!   testable without any pixels)
//! - **Specs**: the static photo-format and paper-size catalogs
//! - **Compositor**: crop/rotate and print-sheet pixel work, plus encode
//! - **Background**: the naive most-frequent-color background remover

pub mod background;
mod calculations;
pub mod compositor;
pub mod specs;

pub use calculations::{CropRegion, SheetLayout, mm_to_px, safe_area_side};
pub use compositor::{CompositorError, ExportFormat, crop_rotate, export, load_image,
    render_print_sheet};
pub use specs::{PaperSpec, PhotoSpec, paper_specs, photo_specs};
