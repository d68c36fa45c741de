use std::path::PathBuf;

use super::export::convert_pdf;
use crate::pdf::PdfBackend;
use crate::state::data::OutputFormat;
use crate::state::settings::RenderSettings;

/// Result of converting one file in a batch
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Images written, in page order
    Converted(Vec<PathBuf>),
    /// The file was skipped; the error has already been logged
    Failed,
}

/// Running counts, logged when the batch finishes
#[derive(Debug, Clone, Default, PartialEq)]
struct BatchSummary {
    converted: usize,
    failed: usize,
    images_written: usize,
}

/// One conversion run over a snapshot of the file list.
///
/// Files are converted strictly in list order, one per `step`. A failing file
/// is logged and counted but never stops the batch.
#[derive(Debug, Clone)]
pub struct ConversionBatch {
    files: Vec<PathBuf>,
    format: OutputFormat,
    completed: usize,
    summary: BatchSummary,
}

impl ConversionBatch {
    pub fn new(files: Vec<PathBuf>, format: OutputFormat) -> Self {
        tracing::info!("🚀 Starting conversion of {} files to {}", files.len(), format);
        Self {
            files,
            format,
            completed: 0,
            summary: BatchSummary::default(),
        }
    }

    /// Number of files in the batch (the progress maximum)
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Number of files processed so far (the progress value)
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.files.len()
    }

    /// Convert the next file. Returns `None` once every file has been processed.
    pub fn step(&mut self, backend: &dyn PdfBackend, settings: &RenderSettings) -> Option<FileOutcome> {
        let path = self.files.get(self.completed)?;

        let outcome = match convert_pdf(backend, path, self.format, settings) {
            Ok(written) => {
                tracing::info!(
                    "✅ [{}/{}] {} -> {} images",
                    self.completed + 1,
                    self.files.len(),
                    path.display(),
                    written.len()
                );
                self.summary.converted += 1;
                self.summary.images_written += written.len();
                FileOutcome::Converted(written)
            }
            Err(e) => {
                tracing::error!("❌ Conversion error for {}: {}", path.display(), e);
                self.summary.failed += 1;
                FileOutcome::Failed
            }
        };

        self.completed += 1;
        if self.is_finished() {
            tracing::info!(
                "🏁 Batch complete: {} converted, {} failed, {} images written",
                self.summary.converted,
                self.summary.failed,
                self.summary.images_written
            );
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::FakeBackend;

    /// Step until the batch is done, recording progress after each file
    fn drain(
        batch: &mut ConversionBatch,
        backend: &FakeBackend,
    ) -> (Vec<FileOutcome>, Vec<(usize, usize)>) {
        let settings = RenderSettings::default();
        let mut outcomes = Vec::new();
        let mut progress = Vec::new();
        while let Some(outcome) = batch.step(backend, &settings) {
            outcomes.push(outcome);
            progress.push((batch.completed(), batch.total()));
        }
        (outcomes, progress)
    }

    #[test]
    fn test_failed_file_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.pdf");
        let corrupt = dir.path().join("corrupt.pdf");
        let last = dir.path().join("last.pdf");
        let backend = FakeBackend::new()
            .with_document(&first, 1)
            .with_document(&last, 2);

        let mut batch = ConversionBatch::new(vec![first, corrupt, last], OutputFormat::Png);
        let (outcomes, _) = drain(&mut batch, &backend);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], FileOutcome::Converted(vec![dir.path().join("first.png")]));
        assert_eq!(outcomes[1], FileOutcome::Failed);
        assert_eq!(
            outcomes[2],
            FileOutcome::Converted(vec![dir.path().join("last_1.png"), dir.path().join("last_2.png")])
        );
        assert!(dir.path().join("first.png").exists());
        assert!(dir.path().join("last_1.png").exists());
        assert!(dir.path().join("last_2.png").exists());
        assert!(!dir.path().join("corrupt.png").exists());
        assert_eq!(batch.summary, BatchSummary { converted: 2, failed: 1, images_written: 3 });
    }

    #[test]
    fn test_progress_advances_once_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<PathBuf> = (0..4).map(|i| dir.path().join(format!("doc{}.pdf", i))).collect();
        let mut backend = FakeBackend::new();
        for (i, file) in files.iter().enumerate() {
            // doc2 is unreadable; it still counts toward progress
            if i != 2 {
                backend = backend.with_document(file, i + 1);
            }
        }

        let mut batch = ConversionBatch::new(files, OutputFormat::Jpg);
        let (_, progress) = drain(&mut batch, &backend);

        assert_eq!(progress, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
        assert!(batch.is_finished());
        assert_eq!(batch.completed(), batch.total());
    }

    #[test]
    fn test_step_reports_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.pdf");
        let bad = dir.path().join("bad.pdf");
        let backend = FakeBackend::new().with_document(&good, 1);
        let settings = RenderSettings::default();

        let mut batch = ConversionBatch::new(vec![good, bad], OutputFormat::Png);

        assert_eq!(
            batch.step(&backend, &settings),
            Some(FileOutcome::Converted(vec![dir.path().join("good.png")]))
        );
        assert_eq!(batch.completed(), 1);
        assert!(!batch.is_finished());
        assert_eq!(batch.step(&backend, &settings), Some(FileOutcome::Failed));
        assert_eq!(batch.step(&backend, &settings), None);
        assert_eq!(batch.completed(), 2);
    }

    #[test]
    fn test_empty_batch_iterates_zero_times() {
        let backend = FakeBackend::new();
        let mut batch = ConversionBatch::new(Vec::new(), OutputFormat::Png);

        let (outcomes, progress) = drain(&mut batch, &backend);

        assert!(outcomes.is_empty());
        assert!(progress.is_empty());
        assert!(batch.is_finished());
        assert_eq!(batch.summary, BatchSummary::default());
    }
}
