//! Error types for mosaic pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image is degenerate or unusable for tiling
    ///
    /// Raised for zero-area buffers and for crop/resize parameters that
    /// collapse a dimension to zero pixels.
    InvalidImage {
        /// Path to the offending image, if it came from disk
        path: Option<PathBuf>,
        /// Description of what makes the image unusable
        reason: String,
    },

    /// Requested sample size exceeds the files available in the source directory
    InsufficientSources {
        /// Number of source images requested
        requested: usize,
        /// Number of candidate files actually present
        available: usize,
        /// Directory that was listed
        directory: PathBuf,
    },

    /// Matcher invoked with no usable source entries
    EmptyPool,

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save the composite image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidImage { path, reason } => match path {
                Some(p) => write!(f, "Invalid image '{}': {reason}", p.display()),
                None => write!(f, "Invalid image: {reason}"),
            },
            Self::InsufficientSources {
                requested,
                available,
                directory,
            } => {
                write!(
                    f,
                    "Requested {requested} source images but '{}' contains only {available}",
                    directory.display()
                )
            }
            Self::EmptyPool => {
                write!(f, "Source pool is empty; no thumbnails to match against")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid image error without a path
pub fn invalid_image(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidImage {
        path: None,
        reason: reason.to_string(),
    }
}

/// Create an invalid image error tagged with the file it came from
pub fn invalid_image_at(path: impl Into<PathBuf>, reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidImage {
        path: Some(path.into()),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_file() {
        let err = invalid_image_at("photos/broken.png", &"zero-area crop");
        let message = err.to_string();
        assert!(message.contains("photos/broken.png"));
        assert!(message.contains("zero-area crop"));
    }

    #[test]
    fn test_insufficient_sources_reports_counts() {
        let err = MosaicError::InsufficientSources {
            requested: 10,
            available: 3,
            directory: PathBuf::from("pool"),
        };
        let message = err.to_string();
        assert!(message.contains("10"));
        assert!(message.contains('3'));
        assert!(message.contains("pool"));
    }
}
