//! Receipt and payslip upload
//!
//! Documents are checked by type, then read and encoded to a data URL on a
//! background thread. Recognition of the encoded document is not available;
//! the dialog reports that once the read completes.

pub mod document;
pub mod task;

pub use document::{check_document, is_supported_mime, mime_for_path, EncodedDocument};
pub use task::{UploadResult, UploadTask};
