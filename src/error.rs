//! Error types for the gesture pipeline

use std::path::PathBuf;
use thiserror::Error;

/// ジェスチャーパイプラインのエラー
#[derive(Error, Debug)]
pub enum GestureError {
    // Frame errors
    #[error("landmark index {index} out of range (frame has {len} landmarks)")]
    IndexOutOfRange { index: usize, len: usize },

    // Encoding errors
    #[error("missing reference landmark: id {0}")]
    MissingReferenceLandmark(u32),

    #[error("degenerate reference segment: zero {axis}-axis extent")]
    DegenerateReference { axis: char },

    #[error("frame {index} failed to encode: {source}")]
    FrameEncode {
        index: usize,
        source: Box<GestureError>,
    },

    // Storage errors
    #[error("failed to write sequence to {}", .path.display())]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read sequence from {}", .path.display())]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt sequence data in {}", .path.display())]
    CorruptData {
        path: PathBuf,
        source: bincode::Error,
    },
}

/// Result type for gesture pipeline operations
pub type GestureResult<T> = Result<T, GestureError>;
