/// PDF to image conversion module
///
/// This module handles:
/// - Deriving output file names from the source PDF (naming.rs)
/// - Rasterizing every page of a file and writing the images (export.rs)
/// - Walking the file list one file at a time with progress (batch.rs)

pub mod batch;
pub mod export;
pub mod naming;
