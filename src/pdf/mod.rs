/// PDF rasterization module
///
/// This module handles:
/// - The backend seam used by the preview and the conversion driver
/// - Loading the PDFium library (pdfium.rs)
/// - A stand-in backend for when PDFium cannot be found

pub mod pdfium;

use image::RgbImage;
use std::path::Path;

use crate::error::PdfError;

/// Something that can open PDF files
pub trait PdfBackend {
    /// Open a document. The returned handle owns the document and closes it on drop.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfPages>, PdfError>;
}

/// An open PDF document
pub trait PdfPages {
    /// Number of pages, fixed at open time
    fn page_count(&self) -> usize;

    /// Rasterize one page to an RGB bitmap at `scale` x the page's point size
    fn render_page(&self, index: usize, scale: f32) -> Result<RgbImage, PdfError>;
}

/// Backend used when PDFium failed to load at startup.
/// Every open fails with the load error so it shows up where the user looks.
#[derive(Debug, Clone)]
pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl PdfBackend for UnavailableBackend {
    fn open(&self, _path: &Path) -> Result<Box<dyn PdfPages>, PdfError> {
        Err(PdfError::LibraryUnavailable(self.reason.clone()))
    }
}
