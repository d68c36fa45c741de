/// State management module
/// 
/// This module handles all application state, including:
/// - The ordered list of PDF files to convert (files.rs)
/// - Shared data structures such as the output format (data.rs)
/// - The page preview and its navigation (preview.rs)
/// - Render and export tunables (settings.rs)

pub mod data;
pub mod files;
pub mod preview;
pub mod settings;
