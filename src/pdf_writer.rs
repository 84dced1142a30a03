//! PDF serialization of composed pages.
//!
//! [`DocumentSerializer`] is the seam to the PDF rendering engine;
//! [`PdfWriter`] is the default implementation backed by printpdf. The
//! whole document is buffered in memory and returned as raw PDF bytes.

use crate::page::{ComposedPage, PAGE_HEIGHT, PAGE_WIDTH};
use image::GenericImageView;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::io::BufWriter;
use tracing::debug;

/// DPI at which images are embedded. At 72 dpi one pixel maps to one point,
/// so images land on the page unscaled.
const IMAGE_DPI: f32 = 72.0;

/// Errors that can occur while serializing the document.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("PDF write error: {0}")]
    Pdf(String),
}

/// Serializes composed pages into a PDF byte buffer.
pub trait DocumentSerializer: Send + Sync {
    fn serialize(&self, pages: &[ComposedPage]) -> Result<Vec<u8>, WriteError>;
}

/// Default serializer backed by printpdf.
pub struct PdfWriter;

impl Default for PdfWriter {
    fn default() -> Self {
        PdfWriter
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts points (1/72 inch) to millimeters.
    fn points_to_mm(points: f32) -> f32 {
        points * 0.352778
    }
}

impl DocumentSerializer for PdfWriter {
    fn serialize(&self, pages: &[ComposedPage]) -> Result<Vec<u8>, WriteError> {
        let doc = PdfDocument::empty("");

        let page_width = Mm(Self::points_to_mm(PAGE_WIDTH as f32));
        let page_height = Mm(Self::points_to_mm(PAGE_HEIGHT as f32));

        for page in pages {
            let (page_idx, layer_idx) = doc.add_page(page_width, page_height, "Layer 1");
            let layer = doc.get_page(page_idx).get_layer(layer_idx);

            // Solid white background over the full page
            layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
            let background = Polygon {
                rings: vec![vec![
                    (Point::new(Mm(0.0), Mm(0.0)), false),
                    (Point::new(page_width, Mm(0.0)), false),
                    (Point::new(page_width, page_height), false),
                    (Point::new(Mm(0.0), page_height), false),
                ]],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            };
            layer.add_polygon(background);

            // The placement is a top-left offset; PDF coordinates grow from
            // the bottom-left corner.
            let bottom = PAGE_HEIGHT - page.placement.y - page.image.height() as i64;

            let image = Image::from_dynamic_image(&page.image);
            image.add_to_layer(
                layer,
                ImageTransform {
                    translate_x: Some(Mm(Self::points_to_mm(page.placement.x as f32))),
                    translate_y: Some(Mm(Self::points_to_mm(bottom as f32))),
                    dpi: Some(IMAGE_DPI),
                    ..Default::default()
                },
            );
        }

        let mut buf = Vec::new();
        doc.save(&mut BufWriter::new(&mut buf))
            .map_err(|e| WriteError::Pdf(e.to_string()))?;

        debug!(pages = pages.len(), bytes = buf.len(), "serialized document");
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageComposer;
    use image::{DynamicImage, Rgb, RgbImage};

    fn composed(width: u32, height: u32, number: usize) -> ComposedPage {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 0, 0])));
        PageComposer::new().compose(img, number)
    }

    #[test]
    fn test_serialize_single_page() {
        let writer = PdfWriter::new();
        let bytes = writer.serialize(&[composed(2, 2, 1)]).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_serialize_multiple_pages() {
        let writer = PdfWriter::new();
        let pages = vec![composed(2, 2, 1), composed(3, 3, 2), composed(4, 2, 3)];
        let bytes = writer.serialize(&pages).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_serialize_oversized_image() {
        // Larger than 596x842: placement goes negative, serialization
        // must still succeed.
        let writer = PdfWriter::new();
        let page = composed(700, 900, 1);
        assert!(page.placement.x < 0);
        let bytes = writer.serialize(&[page]).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
