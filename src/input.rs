//! Input resolution: a path-or-URI reference → decoded raster image.
//!
//! References are accepted in three forms:
//! - A bare filesystem path (no URI scheme), opened directly.
//! - A `file://` URI, opened directly.
//! - A `content://` URI, opened through the host-registered
//!   [`ByteStreamOpener`]. Desktop builds have no content provider, so the
//!   opener is an injection point rather than a default.
//!
//! Any other scheme is rejected. Decoding goes through the [`ImageDecoder`]
//! capability; the default implementation is backed by the `image` codec
//! crate.

use image::{DynamicImage, GenericImageView};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Errors that can occur while resolving a reference to an image.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("No content resolver is registered for '{0}'")]
    ContentResolverUnavailable(String),

    #[error("Cannot be decoded into an image: {0}")]
    Decode(String),
}

/// Opens the byte stream behind a `content://` URI.
///
/// The host application implements this against its content-resolution
/// service and registers it with [`ImageResolver::with_opener`].
pub trait ByteStreamOpener: Send + Sync {
    fn open(&self, uri: &Url) -> Result<Box<dyn Read>, io::Error>;
}

/// Decodes an in-memory byte buffer into a raster image.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ResolveError>;
}

/// Default decoder backed by the `image` codec crate.
///
/// Format detection is done by content sniffing, so references do not need a
/// recognisable file extension.
pub struct CodecDecoder;

impl ImageDecoder for CodecDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ResolveError> {
        image::load_from_memory(bytes).map_err(|e| ResolveError::Decode(e.to_string()))
    }
}

/// Resolves path-or-URI references into decoded images.
pub struct ImageResolver {
    opener: Option<Box<dyn ByteStreamOpener>>,
    decoder: Box<dyn ImageDecoder>,
}

impl Default for ImageResolver {
    fn default() -> Self {
        ImageResolver {
            opener: None,
            decoder: Box::new(CodecDecoder),
        }
    }
}

impl ImageResolver {
    /// Creates a resolver with the codec-crate decoder and no content opener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that routes `content://` URIs through `opener`.
    pub fn with_opener(opener: Box<dyn ByteStreamOpener>) -> Self {
        ImageResolver {
            opener: Some(opener),
            ..Self::default()
        }
    }

    /// Creates a resolver with a custom decoder.
    pub fn with_decoder(decoder: Box<dyn ImageDecoder>) -> Self {
        ImageResolver {
            opener: None,
            decoder,
        }
    }

    /// Resolves `reference` to a decoded image.
    ///
    /// The underlying stream is read to EOF and closed before this returns,
    /// on success and on every failure path.
    pub fn resolve(&self, reference: &str) -> Result<DynamicImage, ResolveError> {
        let mut stream = self.open_stream(reference)?;

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        drop(stream);

        let image = self.decoder.decode(&bytes)?;
        debug!(
            reference,
            width = image.width(),
            height = image.height(),
            "resolved image"
        );

        Ok(image)
    }

    fn open_stream(&self, reference: &str) -> Result<Box<dyn Read>, ResolveError> {
        match Url::parse(reference) {
            Ok(uri) if uri.scheme() == "content" => match &self.opener {
                Some(opener) => Ok(opener.open(&uri)?),
                None => Err(ResolveError::ContentResolverUnavailable(
                    reference.to_string(),
                )),
            },
            Ok(uri) if uri.scheme() == "file" => {
                let path = uri
                    .to_file_path()
                    .unwrap_or_else(|_| PathBuf::from(uri.path()));
                Ok(Box::new(File::open(path)?))
            }
            Ok(uri) => Err(ResolveError::UnsupportedScheme(uri.scheme().to_string())),
            // Not parseable as an absolute URI: a plain filesystem path.
            Err(_) => Ok(Box::new(File::open(reference)?)),
        }
    }
}
