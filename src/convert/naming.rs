use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::state::data::OutputFormat;

/// Output paths for a document with `page_count` pages.
///
/// Images are written next to the PDF. A single-page document maps to
/// `<stem>.<ext>`, anything longer to `<stem>_<n>.<ext>` with n starting at 1.
pub fn output_paths(pdf_path: &Path, page_count: usize, format: OutputFormat) -> Vec<PathBuf> {
    let base = pdf_path.with_extension("");
    let ext = format.extension();

    if page_count == 1 {
        return vec![with_suffix(&base, &format!(".{}", ext))];
    }

    (1..=page_count)
        .map(|page| with_suffix(&base, &format!("_{}.{}", page, ext)))
        .collect()
}

/// Append to the final path component without touching any dots already in it
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_uses_plain_stem() {
        let paths = output_paths(Path::new("/scans/doc.pdf"), 1, OutputFormat::Png);
        assert_eq!(paths, vec![PathBuf::from("/scans/doc.png")]);
    }

    #[test]
    fn test_multi_page_numbers_from_one() {
        let paths = output_paths(Path::new("/scans/doc.pdf"), 3, OutputFormat::Jpg);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/scans/doc_1.jpg"),
                PathBuf::from("/scans/doc_2.jpg"),
                PathBuf::from("/scans/doc_3.jpg"),
            ]
        );
    }

    #[test]
    fn test_only_final_extension_is_stripped() {
        let paths = output_paths(Path::new("/scans/report.v2.PDF"), 1, OutputFormat::Jpg);
        assert_eq!(paths, vec![PathBuf::from("/scans/report.v2.jpg")]);
    }

    #[test]
    fn test_empty_document_has_no_outputs() {
        assert!(output_paths(Path::new("doc.pdf"), 0, OutputFormat::Png).is_empty());
    }
}
