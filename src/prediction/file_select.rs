//! CSV-only file selection for drag-and-drop and the file dialog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// MIME types treated as CSV regardless of the file name.
pub const CSV_MIME_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];
/// Local validation message shown next to the drop zone.
pub const CSV_ONLY_MESSAGE: &str = "Поддерживаются только CSV-файлы";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Where the bytes of a chosen file come from.
#[derive(Clone, Debug, PartialEq)]
pub enum FileContents {
    /// Read from disk at upload time.
    Path(PathBuf),
    /// Already in memory (e.g. a drop that carried bytes but no path).
    Bytes(Arc<[u8]>),
}

/// A file offered by the user, not yet validated.
#[derive(Clone, Debug, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    /// Declared MIME type; empty when the platform did not provide one.
    pub mime: String,
    pub size: u64,
    pub contents: FileContents,
}

impl FileCandidate {
    /// Describe a file on disk. The MIME type is derived from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, FileSelectError> {
        let path = path.into();
        let metadata = std::fs::metadata(&path).map_err(|source| FileSelectError::Unreadable {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(FileSelectError::NotAFile(path));
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self {
            mime: mime_for_path(&path).to_string(),
            name,
            size: metadata.len(),
            contents: FileContents::Path(path),
        })
    }

    /// Describe an in-memory blob.
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            contents: FileContents::Bytes(bytes),
        }
    }
}

/// A candidate that passed CSV validation. Only [`validate`] builds one.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    name: String,
    mime: String,
    size: u64,
    contents: FileContents,
}

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type sent with the upload; defaults to `text/csv` when the
    /// platform declared none.
    pub fn mime(&self) -> &str {
        if self.mime.is_empty() || self.mime == FALLBACK_MIME {
            CSV_MIME_TYPES[0]
        } else {
            &self.mime
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Load the bytes to upload.
    pub fn read_bytes(&self) -> Result<Vec<u8>, FileSelectError> {
        match &self.contents {
            FileContents::Bytes(bytes) => Ok(bytes.to_vec()),
            FileContents::Path(path) => {
                std::fs::read(path).map_err(|source| FileSelectError::Unreadable {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Reasons a candidate cannot become the selected file.
#[derive(Debug, Error)]
pub enum FileSelectError {
    #[error("{}", CSV_ONLY_MESSAGE)]
    NotCsv { name: String },
    #[error("Не удалось прочитать файл {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} не является файлом")]
    NotAFile(PathBuf),
}

/// True when the MIME type is a recognized CSV type or the name ends in
/// `.csv` (case-insensitive).
pub fn is_csv(name: &str, mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    let essence = mime.split(';').next().unwrap_or_default().trim();
    CSV_MIME_TYPES.contains(&essence) || name.trim().to_lowercase().ends_with(".csv")
}

/// Accept or reject a candidate.
pub fn validate(candidate: FileCandidate) -> Result<SelectedFile, FileSelectError> {
    if !is_csv(&candidate.name, &candidate.mime) {
        return Err(FileSelectError::NotCsv {
            name: candidate.name,
        });
    }
    Ok(SelectedFile {
        name: candidate.name,
        mime: candidate.mime,
        size: candidate.size,
        contents: candidate.contents,
    })
}

/// Drop-zone validator holding the local error text.
///
/// A rejection only sets the local error; the caller keeps the upload state
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelector {
    local_error: Option<String>,
}

impl FileSelector {
    /// Validate `candidate`, clearing the local error on success and
    /// recording it on rejection.
    pub fn offer(&mut self, candidate: FileCandidate) -> Option<SelectedFile> {
        match validate(candidate) {
            Ok(file) => {
                self.local_error = None;
                Some(file)
            }
            Err(err) => {
                tracing::info!("Rejected file selection: {err:?}");
                self.reject(&err);
                None
            }
        }
    }

    /// Record an error raised before validation (e.g. unreadable path).
    pub fn reject(&mut self, err: &FileSelectError) {
        self.local_error = Some(err.to_string());
    }

    pub fn local_error(&self) -> Option<&str> {
        self.local_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.local_error = None;
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let is_csv_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv_ext { CSV_MIME_TYPES[0] } else { FALLBACK_MIME }
}
