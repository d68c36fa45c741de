use iced::widget::image::Handle;
use iced::widget::{container, row};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};

mod convert;
mod error;
mod logging;
mod pdf;
mod state;
mod ui;

use convert::batch::{ConversionBatch, FileOutcome};
use error::PdfError;
use pdf::pdfium::PdfiumBackend;
use pdf::{PdfBackend, UnavailableBackend};
use state::data::OutputFormat;
use state::files::{scan_folder, FileList};
use state::preview::{PreviewController, PreviewDisplay};
use state::settings::RenderSettings;

/// Main application state
struct PdfConverter {
    /// PDFs queued for conversion
    files: FileList,
    /// Format applied to every file in the next run
    format: OutputFormat,
    /// The open document and current page
    preview: PreviewController,
    /// GPU handle for the fitted page, rebuilt whenever the preview changes
    preview_handle: Option<Handle>,
    /// Rasterizer shared by preview and conversion
    backend: Box<dyn PdfBackend>,
    settings: RenderSettings,
    /// The running batch; `Some` keeps the convert button disabled
    batch: Option<ConversionBatch>,
    /// (files completed, files in batch) for the progress bar
    progress: (usize, usize),
    /// Status message to display to the user
    status: String,
    /// Directory of the last picked file, where the next dialog opens
    last_dir: Option<PathBuf>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Add File"
    AddFile,
    /// User clicked "Add Files"
    AddFiles,
    /// User clicked "Add Folder"
    AddFolder,
    /// User clicked "Remove Selected"
    RemoveSelected,
    /// User clicked a file entry: select it and preview it
    EntryClicked(usize),
    /// User ticked or unticked a file entry's checkbox
    EntryToggled(usize, bool),
    FormatSelected(OutputFormat),
    /// User clicked "Convert"
    Convert,
    /// Convert the next file of the running batch
    ConvertNext,
    PreviousPage,
    NextPage,
    WindowResized(Size),
}

impl PdfConverter {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = RenderSettings::default();

        // Without PDFium the app still runs; every open reports why it failed
        let backend: Box<dyn PdfBackend> = match PdfiumBackend::load() {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                tracing::error!("❌ {}", e);
                let reason = match e {
                    PdfError::LibraryUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                Box::new(UnavailableBackend::new(reason))
            }
        };

        tracing::info!("🎨 PDF Converter initialized");

        (PdfConverter::with_backend(backend, settings), Task::none())
    }

    /// Fresh window state around an already-loaded backend
    fn with_backend(backend: Box<dyn PdfBackend>, settings: RenderSettings) -> Self {
        let viewport = ui::preview_pane::viewport_for(ui::WINDOW_SIZE.into());

        PdfConverter {
            files: FileList::new(),
            format: OutputFormat::default(),
            preview: PreviewController::new(settings.preview_scale, viewport),
            preview_handle: None,
            backend,
            settings,
            batch: None,
            progress: (0, 0),
            status: "Ready. Add PDF files to get started.".to_string(),
            last_dir: None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddFile => {
                if let Some(path) = self.pdf_dialog("Select PDF File").pick_file() {
                    self.remember_dir(&path);
                    tracing::info!("➕ Added {}", path.display());
                    self.files.add(path);
                    self.status = format!("{} files in list.", self.files.len());
                }
                Task::none()
            }
            Message::AddFiles => {
                if let Some(paths) = self.pdf_dialog("Select PDF Files").pick_files() {
                    if let Some(first) = paths.first() {
                        self.remember_dir(first);
                    }
                    tracing::info!("➕ Added {} files", paths.len());
                    self.files.add_many(paths);
                    self.status = format!("{} files in list.", self.files.len());
                }
                Task::none()
            }
            Message::AddFolder => {
                let mut dialog = FileDialog::new().set_title("Select Folder with PDF Files");
                if let Some(dir) = self.start_dir() {
                    dialog = dialog.set_directory(dir);
                }

                if let Some(folder) = dialog.pick_folder() {
                    let found = scan_folder(&folder);
                    self.status = format!(
                        "Added {} PDF files from {}. {} files in list.",
                        found.len(),
                        folder.display(),
                        self.files.len() + found.len()
                    );
                    self.files.add_many(found);
                    self.last_dir = Some(folder);
                }
                Task::none()
            }
            Message::RemoveSelected => {
                let removed = self.files.remove_selected();
                for path in &removed {
                    tracing::info!("➖ Removed {}", path.display());
                }
                self.status = format!("{} files in list.", self.files.len());
                Task::none()
            }
            Message::EntryClicked(index) => {
                self.files.select_only(index);
                if let Some(path) = self.files.get(index).map(Path::to_path_buf) {
                    self.preview.open(self.backend.as_ref(), &path);
                    self.refresh_preview();
                }
                Task::none()
            }
            Message::EntryToggled(index, checked) => {
                self.files.set_selected(index, checked);
                Task::none()
            }
            Message::FormatSelected(format) => {
                self.format = format;
                Task::none()
            }
            Message::Convert => {
                if self.batch.is_some() {
                    return Task::none();
                }

                let batch = ConversionBatch::new(self.files.entries().to_vec(), self.format);
                self.progress = (0, batch.total());
                self.status = format!("Converting {} files to {}...", batch.total(), self.format);
                self.batch = Some(batch);

                Task::done(Message::ConvertNext)
            }
            Message::ConvertNext => {
                let Some(batch) = self.batch.as_mut() else {
                    return Task::none();
                };

                // Converts one file on this thread, then yields so the progress bar repaints
                if let Some(outcome) = batch.step(self.backend.as_ref(), &self.settings) {
                    self.progress = (batch.completed(), batch.total());
                    self.status = match outcome {
                        FileOutcome::Converted(written) => format!(
                            "Processed {} of {} files ({} images written)...",
                            batch.completed(),
                            batch.total(),
                            written.len()
                        ),
                        FileOutcome::Failed => {
                            format!("Processed {} of {} files...", batch.completed(), batch.total())
                        }
                    };
                }

                if batch.is_finished() {
                    self.status = format!("Done. Processed {} files.", batch.total());
                    self.batch = None;
                    return Task::none();
                }

                Task::done(Message::ConvertNext)
            }
            Message::PreviousPage => {
                self.preview.previous();
                self.refresh_preview();
                Task::none()
            }
            Message::NextPage => {
                self.preview.next();
                self.refresh_preview();
                Task::none()
            }
            Message::WindowResized(size) => {
                if self.preview.resize(ui::preview_pane::viewport_for(size)) {
                    self.refresh_preview();
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let files = ui::file_panel::view(
            &self.files,
            self.format,
            self.batch.is_some(),
            self.progress,
            &self.status,
        );
        let preview = ui::preview_pane::view(&self.preview, self.preview_handle.as_ref());

        row![
            container(files).width(Length::FillPortion(ui::FILE_PANEL_PORTION)),
            container(preview).width(Length::FillPortion(ui::PREVIEW_PORTION)),
        ]
        .spacing(ui::PANEL_SPACING)
        .padding(ui::PADDING)
        .into()
    }

    /// Re-fit the preview whenever the window changes size
    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Native open dialog restricted to PDF files
    fn pdf_dialog(&self, title: &str) -> FileDialog {
        let dialog = FileDialog::new()
            .set_title(title)
            .add_filter("PDF files", &["pdf"]);

        match self.start_dir() {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    /// Last used directory, else the user's documents or home directory
    fn start_dir(&self) -> Option<PathBuf> {
        self.last_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir)
    }

    fn remember_dir(&mut self, picked: &Path) {
        if let Some(parent) = picked.parent() {
            self.last_dir = Some(parent.to_path_buf());
        }
    }

    /// Upload the fitted page (if any) as a new image handle
    fn refresh_preview(&mut self) {
        self.preview_handle = match self.preview.display() {
            PreviewDisplay::Page(page) => Some(Handle::from_rgba(
                page.width(),
                page.height(),
                page.as_raw().clone(),
            )),
            PreviewDisplay::Empty | PreviewDisplay::Error(_) => None,
        };
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application("PDF Converter", PdfConverter::update, PdfConverter::view)
        .subscription(PdfConverter::subscription)
        .theme(PdfConverter::theme)
        .window_size(ui::WINDOW_SIZE)
        .centered()
        .run_with(PdfConverter::new)
}
