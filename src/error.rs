/// Error types for PDF rendering and image export
///
/// Only two places in the app ever surface these: the preview pane
/// (shown inline) and the conversion log (one line per failed file).

use std::path::PathBuf;
use thiserror::Error;

/// Failures coming from the PDF backend
#[derive(Debug, Error)]
pub enum PdfError {
    /// The PDFium dynamic library could not be bound at startup
    #[error("PDFium library is not available: {0}")]
    LibraryUnavailable(String),

    #[error("Failed to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("Page {index} is out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("Failed to render page {index}: {reason}")]
    Render { index: usize, reason: String },
}

/// Failures while converting a single PDF file to images
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
