//! Document type detection and data-URL encoding

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// MIME type for a file, judged by its extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Images of any kind and PDFs are accepted
pub fn is_supported_mime(mime: &str) -> bool {
    mime.starts_with("image/") || mime == "application/pdf"
}

/// Resolve the MIME type of a candidate upload, rejecting unsupported types
pub fn check_document(path: &Path) -> LedgerResult<&'static str> {
    let mime = mime_for_path(path);
    if is_supported_mime(mime) {
        Ok(mime)
    } else {
        Err(LedgerError::UnsupportedDocument {
            mime: mime.to_string(),
        })
    }
}

/// A document read into memory as a `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDocument {
    pub mime: String,
    pub data_url: String,
    /// Size of the original file in bytes
    pub byte_len: usize,
}

impl EncodedDocument {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self {
            mime: mime.to_string(),
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
            byte_len: bytes.len(),
        }
    }

    /// The base64 payload without the `data:<mime>;base64,` prefix
    pub fn payload(&self) -> &str {
        self.data_url
            .split_once(',')
            .map(|(_, payload)| payload)
            .unwrap_or("")
    }
}

/// Read a file and encode it
pub fn read_document(path: &Path, mime: &str) -> LedgerResult<EncodedDocument> {
    let bytes = std::fs::read(path).map_err(|e| {
        LedgerError::Upload(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(EncodedDocument::encode(mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("receipt.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("scan.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_check_document() {
        assert_eq!(check_document(Path::new("a.png")).unwrap(), "image/png");
        assert_eq!(check_document(Path::new("a.pdf")).unwrap(), "application/pdf");

        let err = check_document(Path::new("a.txt")).unwrap_err();
        assert!(err.is_unsupported_document());
    }

    #[test]
    fn test_encode_data_url() {
        let doc = EncodedDocument::encode("image/jpeg", b"hello");
        assert_eq!(doc.data_url, "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(doc.payload(), "aGVsbG8=");
        assert_eq!(doc.byte_len, 5);
    }

    #[test]
    fn test_read_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("receipt.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let doc = read_document(&path, "image/jpeg").unwrap();
        assert_eq!(doc.payload(), "/9j/");
    }

    #[test]
    fn test_read_missing_document() {
        let err = read_document(&PathBuf::from("/nonexistent/receipt.jpg"), "image/jpeg")
            .unwrap_err();
        assert!(matches!(err, LedgerError::Upload(_)));
    }
}
