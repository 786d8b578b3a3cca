//! Document proof uploads.

use crate::error::PlivoError;
use reqwest::multipart::Part;
use std::path::{Path, PathBuf};

/// A document proof file attached to a create or update call.
///
/// The content type is derived from the file extension; only JPEG, PNG and
/// PDF files are accepted by the API.
#[derive(Debug, Clone)]
pub struct UploadFile {
    path: PathBuf,
}

impl UploadFile {
    /// Creates an upload from a file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the MIME type matching the file extension.
    pub fn content_type(&self) -> Result<&'static str, PlivoError> {
        let extension = self.path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        match extension {
            "jpeg" | "jpg" => Ok("image/jpeg"),
            "png" => Ok("image/png"),
            "pdf" => Ok("application/pdf"),
            other => Err(PlivoError::UnsupportedFileType { extension: other.into() }),
        }
    }

    /// Reads the file and turns it into a multipart `file` part.
    pub(crate) async fn into_part(self) -> Result<Part, PlivoError> {
        let content_type = self.content_type()?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PlivoError::invalid_request("upload path has no file name"))?
            .to_owned();

        let bytes = tokio::fs::read(&self.path).await?;
        Ok(Part::bytes(bytes).file_name(file_name).mime_str(content_type)?)
    }
}
