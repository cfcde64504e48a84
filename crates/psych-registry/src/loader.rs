//! Content directory discovery.
//!
//! Content authored outside the binary is laid out as one JSON document per
//! entry, usually grouped in one directory per subcategory:
//!
//! ```text
//! content/
//! ├── anxiety-disorders/
//! │   ├── generalized-anxiety-disorder.json
//! │   └── panic-disorder.json
//! └── mood-disorders/
//!     └── major-depressive-disorder.json
//! ```
//!
//! The directory layout is a convenience only; each document's
//! `subcategory` field decides its grouping.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::types::{ContentError, ContentFiles, ContentResult};

/// File extension of entry documents.
const DOCUMENT_EXTENSION: &str = "json";

/// Discovers entry documents under a content directory.
///
/// Scans `path` recursively for `*.json` files. Hidden files and
/// directories (names starting with `.`) below `path` are skipped. Documents
/// are returned sorted by path so loading order is stable.
///
/// # Errors
/// Returns [`ContentError::DirectoryNotFound`] if `path` is not a directory
/// and [`ContentError::Walk`] if part of the tree cannot be read.
pub fn discover_content_files<P: AsRef<Path>>(path: P) -> ContentResult<ContentFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(ContentError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == DOCUMENT_EXTENSION)
        {
            documents.push(entry.into_path());
        }
    }
    documents.sort();

    Ok(ContentFiles {
        root: path.to_path_buf(),
        documents,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Returns the name of the directory containing `document`, if any.
///
/// Used to warn when a document sits in a directory named after a different
/// subcategory than the one it declares.
pub fn parent_directory_name(document: &Path) -> Option<&str> {
    document.parent()?.file_name()?.to_str()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_discover_nested_documents() {
        let dir = tempfile::tempdir().unwrap();
        let anxiety = dir.path().join("anxiety-disorders");
        let mood = dir.path().join("mood-disorders");
        fs::create_dir_all(&anxiety).unwrap();
        fs::create_dir_all(&mood).unwrap();
        fs::write(anxiety.join("panic.json"), "{}").unwrap();
        fs::write(anxiety.join("notes.md"), "# notes").unwrap();
        fs::write(mood.join("depression.json"), "{}").unwrap();
        fs::write(dir.path().join(".draft.json"), "{}").unwrap();

        let files = discover_content_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.documents[0].ends_with("anxiety-disorders/panic.json"));
        assert!(files.documents[1].ends_with("mood-disorders/depression.json"));
    }

    #[test]
    fn test_hidden_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let hidden = dir.path().join(".drafts").join("mood-disorders");
        let visible = dir.path().join("mood-disorders");
        fs::create_dir_all(&hidden).unwrap();
        fs::create_dir_all(&visible).unwrap();
        fs::write(hidden.join("bipolar.json"), "{}").unwrap();
        fs::write(visible.join("depression.json"), "{}").unwrap();

        let files = discover_content_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.documents[0].ends_with("mood-disorders/depression.json"));
    }

    #[test]
    fn test_hidden_root_is_still_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(".content");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("panic.json"), "{}").unwrap();

        let files = discover_content_files(&root).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_directory_named_like_a_document_is_not_collected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("archive.json")).unwrap();
        fs::write(dir.path().join("archive.json").join("ptsd.json"), "{}").unwrap();

        let files = discover_content_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.documents[0].ends_with("archive.json/ptsd.json"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_content_files(dir.path().join("nope"));
        assert!(matches!(result, Err(ContentError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = discover_content_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_parent_directory_name() {
        let path = Path::new("content/anxiety-disorders/panic.json");
        assert_eq!(parent_directory_name(path), Some("anxiety-disorders"));
        assert_eq!(parent_directory_name(Path::new("panic.json")), None);
    }
}
