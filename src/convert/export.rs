use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::naming::output_paths;
use crate::error::ConvertError;
use crate::pdf::PdfBackend;
use crate::state::data::OutputFormat;
use crate::state::settings::RenderSettings;

/// Rasterize every page of `pdf_path` and write one image per page next to it.
///
/// Returns the written paths in page order.
pub fn convert_pdf(
    backend: &dyn PdfBackend,
    pdf_path: &Path,
    format: OutputFormat,
    settings: &RenderSettings,
) -> Result<Vec<PathBuf>, ConvertError> {
    let document = backend.open(pdf_path)?;
    let targets = output_paths(pdf_path, document.page_count(), format);
    let scale = settings.export_scale();

    for (index, target) in targets.iter().enumerate() {
        let page = document.render_page(index, scale)?;
        save_image(&page, target, format, settings.jpeg_quality)?;
        tracing::debug!("🖼  Wrote {}", target.display());
    }

    Ok(targets)
}

/// Encode `image` to `path` in the chosen format
pub fn save_image(
    image: &RgbImage,
    path: &Path,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<(), ConvertError> {
    let encode_error = |source: image::ImageError| ConvertError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| encode_error(e.into()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Png => image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(encode_error)?,
        OutputFormat::Jpg => JpegEncoder::new_with_quality(&mut writer, jpeg_quality)
            .encode_image(image)
            .map_err(encode_error)?,
    }

    // Dropping a BufWriter swallows the final write error
    writer.flush().map_err(|e| encode_error(e.into()))
}
