//! Static catalogs of passport-photo formats and print paper sizes.
//!
//! Dimensions are physical millimetres; pixel sizes are derived per-use from
//! the configured DPI. The catalogs are fixed — there is no persistence and
//! no user-defined entries.

/// A passport/visa photo format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
}

/// A print paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
}

const PHOTO_SPECS: &[PhotoSpec] = &[
    PhotoSpec { id: "usa", name: "USA (2×2 inch / 51×51mm)", width_mm: 51, height_mm: 51 },
    PhotoSpec { id: "uk", name: "UK (35×45 mm)", width_mm: 35, height_mm: 45 },
    PhotoSpec { id: "india", name: "India (2×2 inch / 51×51mm)", width_mm: 51, height_mm: 51 },
    PhotoSpec { id: "schengen", name: "Schengen (35×45 mm)", width_mm: 35, height_mm: 45 },
    PhotoSpec { id: "canada", name: "Canada (50×70 mm)", width_mm: 50, height_mm: 70 },
    PhotoSpec { id: "australia", name: "Australia (35×45 mm)", width_mm: 35, height_mm: 45 },
    PhotoSpec { id: "china", name: "China (33×48 mm)", width_mm: 33, height_mm: 48 },
    PhotoSpec { id: "japan", name: "Japan (35×45 mm)", width_mm: 35, height_mm: 45 },
];

const PAPER_SPECS: &[PaperSpec] = &[
    PaperSpec { id: "a4", name: "A4 (210×297 mm)", width_mm: 210, height_mm: 297 },
    PaperSpec { id: "a5", name: "A5 (148×210 mm)", width_mm: 148, height_mm: 210 },
    PaperSpec { id: "a6", name: "A6 (105×148 mm)", width_mm: 105, height_mm: 148 },
    PaperSpec { id: "4x6", name: "4×6 inch (102×152 mm)", width_mm: 102, height_mm: 152 },
    PaperSpec { id: "5x7", name: "5×7 inch (127×178 mm)", width_mm: 127, height_mm: 178 },
    PaperSpec { id: "8x10", name: "8×10 inch (203×254 mm)", width_mm: 203, height_mm: 254 },
    PaperSpec { id: "letter", name: "Letter (216×279 mm)", width_mm: 216, height_mm: 279 },
];

/// All photo formats, in catalog order.
pub fn photo_specs() -> &'static [PhotoSpec] {
    PHOTO_SPECS
}

/// All paper sizes, in catalog order.
pub fn paper_specs() -> &'static [PaperSpec] {
    PAPER_SPECS
}

/// Look up a photo format by id (case-insensitive).
pub fn find_photo_spec(id: &str) -> Option<&'static PhotoSpec> {
    PHOTO_SPECS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

/// Look up a paper size by id (case-insensitive).
pub fn find_paper_spec(id: &str) -> Option<&'static PaperSpec> {
    PAPER_SPECS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}
