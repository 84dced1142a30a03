//! Page composition: one decoded image centered on a fixed-size page.
//!
//! Pages are pure placement data. Rendering them into an actual PDF is the
//! job of [`crate::pdf_writer`].

use image::{DynamicImage, GenericImageView};

/// Page width in points (A4 at 72 dpi equivalent).
pub const PAGE_WIDTH: i64 = 596;

/// Page height in points.
pub const PAGE_HEIGHT: i64 = 842;

/// Top-left offset of an image on its page, in points.
///
/// Offsets are negative when the image is larger than the page; oversized
/// images overflow the page edges rather than being scaled or clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

/// One composed page: a 1-based page number, the image it carries, and
/// where the image sits on the white background.
pub struct ComposedPage {
    pub number: usize,
    pub image: DynamicImage,
    pub placement: Placement,
}

/// Centers images on fixed 596x842 point pages.
pub struct PageComposer;

impl PageComposer {
    pub fn new() -> Self {
        PageComposer
    }

    /// Computes the centered placement for an image of the given pixel size.
    ///
    /// Truncating integer division, matching `(page - image) / 2` on ints.
    pub fn placement(&self, width: u32, height: u32) -> Placement {
        Placement {
            x: (PAGE_WIDTH - width as i64) / 2,
            y: (PAGE_HEIGHT - height as i64) / 2,
        }
    }

    /// Composes page `number` (1-based) from a decoded image.
    pub fn compose(&self, image: DynamicImage, number: usize) -> ComposedPage {
        let placement = self.placement(image.width(), image.height());
        ComposedPage {
            number,
            image,
            placement,
        }
    }
}

impl Default for PageComposer {
    fn default() -> Self {
        Self::new()
    }
}
