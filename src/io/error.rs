//! Error types for map generation, solving and rendering

use crate::solver::backend::SolveStatus;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Failed to load the sprite sheet or another image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save the rendered map
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

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile catalog is malformed (bad edge label, unknown tile name, missing target)
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Solved value has no entry in the tile catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the catalog
        max_tiles: usize,
    },

    /// Sprite coordinate points outside the sprite sheet
    SpriteOutOfBounds {
        /// Sprite coordinate as (column, row)
        sprite: (u32, u32),
        /// Sprite sheet dimensions in pixels as (width, height)
        sheet: (u32, u32),
        /// Edge length of one sprite in pixels
        tile_size: u32,
    },

    /// The solver produced no satisfying assignment
    Unsolvable {
        /// Status reported by the solver backend
        status: SolveStatus,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid tile catalog: {reason}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (max: {max_tiles})")
            }
            Self::SpriteOutOfBounds {
                sprite,
                sheet,
                tile_size,
            } => {
                write!(
                    f,
                    "Sprite ({}, {}) at {tile_size}px lies outside the {}x{} sprite sheet",
                    sprite.0, sprite.1, sheet.0, sheet.1
                )
            }
            Self::Unsolvable { status } => {
                write!(f, "Model was unsolvable (solver status: {status})")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Lets `?` lift I/O errors that are not tied to one file, such as creating
/// a scratch directory
///
/// Reads and writes of catalogs, sprite sheets and maps build
/// [`GenerationError::FileSystem`] with their path instead.
impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "unattributed I/O",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidCatalog {
        reason: reason.to_string(),
    }
}

impl GenerationError {
    /// Whether the error came from the solver rather than from I/O or validation
    pub const fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable { .. })
    }
}
