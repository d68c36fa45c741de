/// Page preview state
///
/// Owns the currently open document and the page being shown. The raw page
/// raster is kept so a window resize only rescales instead of re-rasterizing.

use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};
use std::path::Path;

use crate::pdf::{PdfBackend, PdfPages};

/// What the preview pane should show
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewDisplay<'a> {
    /// Nothing opened yet
    Empty,
    /// Opening or rendering failed; shown inline in place of the page
    Error(&'a str),
    /// Current page, already fitted to the viewport
    Page(&'a RgbaImage),
}

pub struct PreviewController {
    /// The open document (dropping it closes the file)
    document: Option<Box<dyn PdfPages>>,
    page_index: usize,
    page_count: usize,
    /// Raster of the current page at `scale`
    raster: Option<RgbImage>,
    /// Raster scaled to fit the viewport
    fitted: Option<RgbaImage>,
    error: Option<String>,
    viewport: (u32, u32),
    scale: f32,
}

impl PreviewController {
    pub fn new(scale: f32, viewport: (u32, u32)) -> Self {
        Self {
            document: None,
            page_index: 0,
            page_count: 0,
            raster: None,
            fitted: None,
            error: None,
            viewport,
            scale,
        }
    }

    /// Open `path` and show its first page. Replaces any open document.
    pub fn open(&mut self, backend: &dyn PdfBackend, path: &Path) {
        // Close the previous document before opening the next one
        self.document = None;
        self.page_index = 0;
        self.page_count = 0;
        self.raster = None;
        self.fitted = None;
        self.error = None;

        match backend.open(path) {
            Ok(document) => {
                self.page_count = document.page_count();
                self.document = Some(document);
                tracing::info!("👁  Previewing {} ({} pages)", path.display(), self.page_count);
                self.render_current();
            }
            Err(e) => {
                tracing::warn!("⚠️  Preview failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Go back one page (stops at the first page)
    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.page_index -= 1;
            self.render_current();
        }
    }

    /// Go forward one page (stops at the last page)
    pub fn next(&mut self) {
        if self.can_go_next() {
            self.page_index += 1;
            self.render_current();
        }
    }

    /// Rescale the current page for a new viewport size.
    /// Returns whether the displayed page changed.
    pub fn resize(&mut self, viewport: (u32, u32)) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        let Some(raster) = &self.raster else {
            return false;
        };
        self.fitted = Some(fit_to_viewport(raster, viewport));
        true
    }

    pub fn can_go_previous(&self) -> bool {
        self.document.is_some() && self.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.document.is_some() && self.page_index + 1 < self.page_count
    }

    /// "current/total" with a 1-based current page; "0/0" when nothing is open
    pub fn page_label(&self) -> String {
        if self.document.is_none() || self.page_count == 0 {
            return "0/0".to_string();
        }
        format!("{}/{}", self.page_index + 1, self.page_count)
    }

    pub fn display(&self) -> PreviewDisplay<'_> {
        if let Some(error) = &self.error {
            PreviewDisplay::Error(error)
        } else if let Some(page) = &self.fitted {
            PreviewDisplay::Page(page)
        } else {
            PreviewDisplay::Empty
        }
    }

    fn render_current(&mut self) {
        let Some(document) = &self.document else {
            return;
        };

        match document.render_page(self.page_index, self.scale) {
            Ok(raster) => {
                self.fitted = Some(fit_to_viewport(&raster, self.viewport));
                self.raster = Some(raster);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("⚠️  Preview render failed: {}", e);
                self.raster = None;
                self.fitted = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Largest size with the source's aspect ratio that fits inside `max`.
/// Never collapses below 1x1.
pub fn fit_size(source: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = max;
    if src_w == 0 || src_h == 0 {
        return (1, 1);
    }

    let ratio = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let width = (src_w as f64 * ratio).round().max(1.0) as u32;
    let height = (src_h as f64 * ratio).round().max(1.0) as u32;
    (width, height)
}

/// Scale a page raster to the viewport with smoothing
fn fit_to_viewport(raster: &RgbImage, viewport: (u32, u32)) -> RgbaImage {
    let (width, height) = fit_size(raster.dimensions(), viewport);
    let rgba = image::DynamicImage::ImageRgb8(raster.clone()).to_rgba8();
    if (width, height) == rgba.dimensions() {
        return rgba;
    }
    imageops::resize(&rgba, width, height, FilterType::Triangle)
}
