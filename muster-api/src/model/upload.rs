//! File uploads

/// A file carried through a multipart request.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// The lowercased file extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let (_, extension) = self.file_name.rsplit_once('.')?;
        if extension.is_empty() {
            return None;
        }
        Some(extension.to_ascii_lowercase())
    }
}
