//! Error types for the mesh pipeline.

use thiserror::Error;
use xtoon_io::IoError;

/// Result type for pipeline operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while loading a mesh.
///
/// The geometry stages handle degenerate input by policy instead of
/// erroring, so only reading and index validation can fail.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The model file could not be read or parsed.
    #[error("failed to read model: {0}")]
    Io(#[from] IoError),

    /// In-memory geometry references a position that does not exist.
    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of positions in the geometry.
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_io_errors() {
        let err: MeshError = IoError::invalid_content("truncated payload").into();
        let display = format!("{err}");
        assert!(display.starts_with("failed to read model"));
        assert!(display.contains("truncated payload"));
    }

    #[test]
    fn index_error_display() {
        let err = MeshError::IndexOutOfRange {
            index: 9,
            vertex_count: 3,
        };
        assert_eq!(
            format!("{err}"),
            "triangle index 9 out of range for 3 vertices"
        );
    }
}
