//! images-pdf
//!
//! This library converts an ordered list of image files (filesystem paths,
//! `file://` URIs, or host-resolved `content://` URIs) into a single PDF
//! document with one centered image per fixed-size page, returned as a
//! base64-encoded string.

pub mod convert;
pub mod input;
pub mod page;
pub mod pdf_writer;

pub use convert::{CreatePdfError, CreatePdfRequest, PdfConverter};
pub use input::{ByteStreamOpener, CodecDecoder, ImageDecoder, ImageResolver, ResolveError};
pub use page::{ComposedPage, PageComposer, Placement, PAGE_HEIGHT, PAGE_WIDTH};
pub use pdf_writer::{DocumentSerializer, PdfWriter, WriteError};
