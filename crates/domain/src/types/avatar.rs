//! Avatar types
//!
//! Binary image content addressed by a storage path. The profile row holds
//! only the path; the blob itself belongs to the storage collaborator.

use serde::{Deserialize, Serialize};

use crate::constants::OCTET_STREAM;

/// Blob content together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl AvatarImage {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self { bytes, content_type: content_type.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One locally chosen file offered for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    /// Original file name; only its extension is kept in the storage path
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileSelection {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes }
    }

    /// Extension of the original file name, if it has one.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }

    /// MIME type inferred from the extension.
    pub fn content_type(&self) -> &'static str {
        match self.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => OCTET_STREAM,
        }
    }
}
