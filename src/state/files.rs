use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The ordered list of PDF files queued for conversion.
///
/// Entries are kept in insertion order and are not deduplicated or validated;
/// a bad path only shows up when it is previewed or converted.
#[derive(Debug, Default, Clone)]
pub struct FileList {
    entries: Vec<PathBuf>,
    /// Indices into `entries`
    selected: BTreeSet<usize>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single file
    pub fn add(&mut self, path: PathBuf) {
        self.entries.push(path);
    }

    /// Append several files in the order given
    pub fn add_many(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.entries.extend(paths);
    }

    /// Remove every selected entry and clear the selection.
    /// Returns the removed paths in list order.
    pub fn remove_selected(&mut self) -> Vec<PathBuf> {
        if self.selected.is_empty() {
            return Vec::new();
        }

        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::with_capacity(selected.len());
        let mut index = 0;
        self.entries.retain(|path| {
            let keep = !selected.contains(&index);
            if !keep {
                removed.push(path.clone());
            }
            index += 1;
            keep
        });

        removed
    }

    /// Make `index` the only selected entry
    pub fn select_only(&mut self, index: usize) {
        self.selected.clear();
        if index < self.entries.len() {
            self.selected.insert(index);
        }
    }

    /// Add or drop `index` from the selection
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if index >= self.entries.len() {
            return;
        }
        if selected {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Recursively find all PDF files under `folder`, sorted by path
pub fn scan_folder(folder: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && is_pdf(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    found.sort();
    tracing::info!("🔍 Found {} PDF files in {}", found.len(), folder.display());
    found
}

/// Check the extension case-insensitively (`.pdf`, `.PDF`, ...)
fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn list_of(names: &[&str]) -> FileList {
        let mut list = FileList::new();
        list.add_many(names.iter().map(PathBuf::from));
        list
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut list = FileList::new();
        list.add(PathBuf::from("/docs/b.pdf"));
        list.add_many(vec![PathBuf::from("/docs/a.pdf"), PathBuf::from("/docs/c.pdf")]);
        // Duplicates are allowed
        list.add(PathBuf::from("/docs/b.pdf"));

        let names: Vec<&str> = list.entries().iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, vec!["/docs/b.pdf", "/docs/a.pdf", "/docs/c.pdf", "/docs/b.pdf"]);
    }

    #[test]
    fn test_remove_selected_removes_exactly_that_entry() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf"]);
        list.select_only(1);

        let removed = list.remove_selected();

        assert_eq!(removed, vec![PathBuf::from("b.pdf")]);
        assert_eq!(list.entries(), &[PathBuf::from("a.pdf"), PathBuf::from("c.pdf")]);
        assert!(!list.has_selection());
    }

    #[test]
    fn test_remove_multiple_selected() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);
        list.set_selected(0, true);
        list.set_selected(2, true);
        list.set_selected(3, true);
        list.set_selected(3, false);

        let removed = list.remove_selected();

        assert_eq!(removed, vec![PathBuf::from("a.pdf"), PathBuf::from("c.pdf")]);
        assert_eq!(list.entries(), &[PathBuf::from("b.pdf"), PathBuf::from("d.pdf")]);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut list = list_of(&["a.pdf", "b.pdf"]);
        assert!(list.remove_selected().is_empty());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_select_only_replaces_selection() {
        let mut list = list_of(&["a.pdf", "b.pdf", "c.pdf"]);
        list.set_selected(0, true);
        list.set_selected(2, true);
        list.select_only(1);

        assert!(!list.is_selected(0));
        assert!(list.is_selected(1));
        assert!(!list.is_selected(2));

        // Out-of-range indices are ignored
        list.select_only(7);
        assert!(!list.has_selection());
    }

    #[test]
    fn test_scan_folder_finds_pdfs_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("a.PDF"), b"%PDF").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        fs::write(nested.join("c.pdf"), b"%PDF").unwrap();

        let found = scan_folder(dir.path());

        assert_eq!(
            found,
            vec![
                dir.path().join("a.PDF"),
                dir.path().join("b.pdf"),
                nested.join("c.pdf"),
            ]
        );
    }
}
