//! The `createPdf` operation: an ordered list of image references in, one
//! base64-encoded PDF document out.
//!
//! Error classification happens here. Failures while resolving or composing
//! a specific page surface as [`CreatePdfError::PageCreate`] with the
//! offending reference and page number; serialization failures surface as
//! [`CreatePdfError::Write`]. A request either fully succeeds or fully
//! fails; partially built page sets are dropped before an error propagates.

use crate::input::{ImageResolver, ResolveError};
use crate::page::PageComposer;
use crate::pdf_writer::{DocumentSerializer, PdfWriter, WriteError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// One conversion request, in the host's wire shape.
///
/// `output_filename` is a host-side naming hint only; it never influences
/// the produced bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePdfRequest {
    pub image_paths: Vec<String>,
    pub output_filename: String,
}

/// Classified failures of the `createPdf` operation.
#[derive(Debug, thiserror::Error)]
pub enum CreatePdfError {
    #[error("imagePaths is empty.")]
    EmptyInput,

    #[error("Failed to create page {page} from '{reference}': {source}")]
    PageCreate {
        reference: String,
        page: usize,
        #[source]
        source: ResolveError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("{0}")]
    Create(String),
}

impl CreatePdfError {
    /// Machine-readable code for the host, matching the plugin wire protocol.
    pub fn code(&self) -> &'static str {
        match self {
            CreatePdfError::PageCreate { .. } => "PDF_PAGE_CREATE_ERROR",
            CreatePdfError::Write(_) => "PDF_WRITE_ERROR",
            CreatePdfError::EmptyInput | CreatePdfError::Create(_) => "PDF_CREATE_ERROR",
        }
    }
}

/// Converts image lists into single base64-encoded PDF documents.
///
/// Holds no mutable state; one instance can serve any number of requests,
/// concurrently or not.
pub struct PdfConverter {
    resolver: ImageResolver,
    composer: PageComposer,
    serializer: Box<dyn DocumentSerializer>,
}

impl Default for PdfConverter {
    fn default() -> Self {
        PdfConverter {
            resolver: ImageResolver::new(),
            composer: PageComposer::new(),
            serializer: Box::new(PdfWriter::new()),
        }
    }
}

impl PdfConverter {
    /// Creates a converter with the default resolver and printpdf serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with a custom resolver (e.g. one carrying the
    /// host's content-stream opener).
    pub fn with_resolver(resolver: ImageResolver) -> Self {
        PdfConverter {
            resolver,
            ..Self::default()
        }
    }

    /// Creates a converter with a custom document serializer.
    pub fn with_serializer(serializer: Box<dyn DocumentSerializer>) -> Self {
        PdfConverter {
            serializer,
            ..Self::default()
        }
    }

    /// Converts the requested images into one PDF, one page per image in
    /// request order, and returns the document as base64 text.
    pub fn create_pdf(&self, request: &CreatePdfRequest) -> Result<String, CreatePdfError> {
        if request.image_paths.is_empty() {
            error!("imagePaths is empty");
            return Err(CreatePdfError::EmptyInput);
        }

        let mut pages = Vec::with_capacity(request.image_paths.len());

        for (i, reference) in request.image_paths.iter().enumerate() {
            let number = i + 1;
            let image = self.resolver.resolve(reference).map_err(|source| {
                error!(reference = %reference, page = number, %source, "page creation failed");
                CreatePdfError::PageCreate {
                    reference: reference.clone(),
                    page: number,
                    source,
                }
            })?;

            pages.push(self.composer.compose(image, number));
        }

        let bytes = self.serializer.serialize(&pages).map_err(|e| {
            error!(%e, "document write failed");
            e
        })?;

        let encoded = STANDARD.encode(&bytes);
        debug!(
            pages = request.image_paths.len(),
            pdf_bytes = bytes.len(),
            "created PDF document"
        );

        Ok(encoded)
    }
}
