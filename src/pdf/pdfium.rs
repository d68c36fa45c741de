/// PDFium-backed rendering
///
/// The PDFium dynamic library is bound once at startup. Documents opened
/// through it borrow the library for the rest of the process.

use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

use super::{PdfBackend, PdfPages};
use crate::error::PdfError;

/// Backend that rasterizes pages with PDFium
pub struct PdfiumBackend {
    pdfium: &'static Pdfium,
}

impl PdfiumBackend {
    /// Bind the PDFium library from known search paths, falling back to the system library.
    ///
    /// Search order:
    /// 1. Next to the executable (`./`, `lib/`, `libs/`)
    /// 2. The current working directory (`./`, `lib/`)
    /// 3. System library path
    pub fn load() -> Result<Self, PdfError> {
        for dir in search_paths() {
            let lib_path = Pdfium::pdfium_platform_library_name_at_path(&dir);
            if !lib_path.exists() {
                continue;
            }

            match Pdfium::bind_to_library(&lib_path) {
                Ok(bindings) => {
                    tracing::info!("📚 Loaded PDFium from {}", lib_path.display());
                    return Ok(Self::from_pdfium(Pdfium::new(bindings)));
                }
                Err(e) => {
                    tracing::warn!("⚠️  Could not bind {}: {}", lib_path.display(), e);
                }
            }
        }

        tracing::debug!("Trying system PDFium library");
        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| PdfError::LibraryUnavailable(e.to_string()))?;

        tracing::info!("📚 Loaded system PDFium library");
        Ok(Self::from_pdfium(Pdfium::new(bindings)))
    }

    fn from_pdfium(pdfium: Pdfium) -> Self {
        // Bound once and kept for the whole process so documents can outlive any one handler
        Self { pdfium: Box::leak(Box::new(pdfium)) }
    }
}

impl PdfBackend for PdfiumBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfPages>, PdfError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfError::Open {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let page_count = document.pages().len() as usize;
        tracing::debug!("📄 Opened {} ({} pages)", path.display(), page_count);

        Ok(Box::new(PdfiumDocument { document, page_count }))
    }
}

struct PdfiumDocument {
    document: PdfDocument<'static>,
    page_count: usize,
}

impl PdfPages for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RgbImage, PdfError> {
        let out_of_range = PdfError::PageOutOfRange { index, count: self.page_count };
        if index >= self.page_count {
            return Err(out_of_range);
        }
        let page_index = PdfPageIndex::try_from(index).map_err(|_| out_of_range)?;

        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| PdfError::Render { index, reason: e.to_string() })?;

        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfError::Render { index, reason: e.to_string() })?;

        // PDFium hands back BGRA; drop alpha so the JPEG encoder accepts it
        Ok(bitmap.as_image().to_rgb8())
    }
}

/// Directories that may hold the platform PDFium library
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Executable-relative paths (packaged builds)
    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            paths.push(exe_dir.to_path_buf());
            paths.push(exe_dir.join("lib"));
            paths.push(exe_dir.join("libs"));
        }
    }

    // Current working directory (development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.clone());
        paths.push(cwd.join("lib"));
    }

    paths
}
