//! Package writer error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck \"{0}\" has no usable file name")]
    InvalidFileName(String),
}

/// Result type alias for package operations.
pub type Result<T> = std::result::Result<T, PackageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_file_name() {
        let error = PackageError::InvalidFileName("   ".to_string());
        assert_eq!(error.to_string(), "deck \"   \" has no usable file name");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: PackageError = io.into();
        assert!(matches!(error, PackageError::Io(_)));
        assert_eq!(error.to_string(), "io error: gone");
    }
}
