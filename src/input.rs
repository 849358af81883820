//! Locating documents on disk and loading them through a [`Format`].

use crate::document::Document;
use crate::error::Result;
use crate::formats::Format;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand files and directories into the document files to process.
///
/// Files named explicitly are always kept; directories are searched recursively for files whose
/// extension is in `extensions`. Symbolic links inside directories are not followed. The result
/// is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(&path).min_depth(1) {
                let entry = entry?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    documents.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ));
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Read and parse one document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_document(path: &Path, format: &dyn Format) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    log::debug!("parsing {} as {}", path.display(), format.file_extension());
    format.parse(&source)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
