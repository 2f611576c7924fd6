//! Error types for planemark.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while tagging or exporting a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// There is no mesh to operate on.
    #[error("no mesh selected")]
    MissingSelection,

    /// A vertex or face does not lie in the z = 0 plane.
    #[error("non-planar geometry: {details}")]
    NonPlanarGeometry {
        /// Description of the offending feature.
        details: String,
    },

    /// A cell has a node count other than 3 or 4.
    #[error("cell {cell} has {nodes} nodes; only 3-node and 4-node cells are supported")]
    InvalidCellArity {
        /// The cell index.
        cell: usize,
        /// The number of nodes found.
        nodes: usize,
    },

    /// A cell is wound clockwise (its normal points down).
    #[error("cell {cell} has wrong normal; vertices must be counter-clockwise")]
    WrongWinding {
        /// The cell index.
        cell: usize,
    },

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face uses the same vertex more than once.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text formatting error while rendering an export buffer.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Scene document (de)serialisation error.
    #[error("scene document error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error loading a mesh or scene from file.
    #[error("failed to load {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving to file.
    #[error("failed to save {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a non-planar geometry error.
    pub fn non_planar(details: impl Into<String>) -> Self {
        MeshError::NonPlanarGeometry {
            details: details.into(),
        }
    }

    /// Whether this error describes bad geometry (as opposed to I/O or usage).
    ///
    /// The list exporter downgrades these to inline annotations.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            MeshError::NonPlanarGeometry { .. } | MeshError::WrongWinding { .. }
        )
    }
}
