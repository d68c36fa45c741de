/// User interface module
///
/// Layout pieces for the main window:
/// - The file list with its buttons, format selector and progress (file_panel.rs)
/// - The page preview with navigation (preview_pane.rs)

pub mod file_panel;
pub mod preview_pane;

/// Initial window size
pub const WINDOW_SIZE: (f32, f32) = (1000.0, 700.0);

/// Outer padding of the window content
pub const PADDING: f32 = 20.0;

/// Gap between the file panel and the preview
pub const PANEL_SPACING: f32 = 20.0;

/// The file panel gets one share of the width, the preview two
pub const FILE_PANEL_PORTION: u16 = 1;
pub const PREVIEW_PORTION: u16 = 2;
