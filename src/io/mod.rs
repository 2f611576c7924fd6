//! Mesh file I/O.
//!
//! This module exports tagged meshes and loads the inputs they come from.
//!
//! # Export Formats
//!
//! | Format | Extension | Geometry errors | Notes |
//! |--------|-----------|-----------------|-------|
//! | msh | `.msh` | fatal | Header, points, cells, marked edges |
//! | list | `.py` | annotated inline | Literal `points` / `cells` arrays |
//!
//! # Inputs
//!
//! - [`ply`]: polygon meshes (faces kept at their original arity)
//! - [`scene`]: JSON scene documents bundling mesh, tags and settings
//!
//! # Usage
//!
//! ```no_run
//! use planemark::io::{export, ExportOptions};
//! use planemark::io::scene::Scene;
//!
//! let scene = Scene::load("plate.json").unwrap();
//! let report = export(&scene.mesh, &scene.tags, "plate.msh", &ExportOptions::default()).unwrap();
//! println!("{} points, {} cells", report.points, report.cells);
//! ```

pub mod list;
pub mod msh;
pub mod ply;
pub mod scene;
mod validate;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use validate::{cell_kind, check_orientation, check_point, CellKind};

use crate::error::{MeshError, Result};
use crate::mesh::{EdgeKey, PolyMesh};
use crate::tags::TagStore;

/// Default tolerance on the x/y components of a cell's unit normal.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Structured `msh` text.
    Msh,
    /// List-of-lists script notation.
    List,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "msh" => Some(Format::Msh),
            "py" => Some(Format::List),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// The conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Msh => "msh",
            Format::List => "py",
        }
    }
}

/// Options for [`export`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Output format; detected from the path extension when `None`.
    pub format: Option<Format>,
    /// Normal tolerance used by both formats.
    pub tolerance: f64,
    /// List format only: project vertices onto z = 0.
    pub flatten: bool,
    /// List format only: append drawing boilerplate.
    pub drawing: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: None,
            tolerance: DEFAULT_TOLERANCE,
            flatten: false,
            drawing: false,
        }
    }
}

impl ExportOptions {
    /// Force an output format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the normal tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable flattening (list format).
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Enable or disable the drawing boilerplate (list format).
    pub fn with_drawing(mut self, drawing: bool) -> Self {
        self.drawing = drawing;
        self
    }

    /// Names of the options set here that `format` does not use.
    pub fn ignored_by(&self, format: Format) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if format == Format::Msh {
            if self.flatten {
                ignored.push("flatten");
            }
            if self.drawing {
                ignored.push("drawing");
            }
        }
        ignored
    }

    fn msh(&self) -> msh::MshOptions {
        msh::MshOptions::default().with_tolerance(self.tolerance)
    }

    fn list(&self) -> list::ListOptions {
        list::ListOptions::default()
            .with_tolerance(self.tolerance)
            .with_flatten(self.flatten)
            .with_drawing(self.drawing)
    }
}

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    /// Format written.
    pub format: Format,
    /// Number of points written.
    pub points: usize,
    /// Number of cells written.
    pub cells: usize,
    /// Number of marked edges written.
    pub marked_edges: usize,
    /// Geometry problems annotated in the output (list format only).
    pub warnings: Vec<String>,
}

/// Render a tagged mesh in the given format without touching the filesystem.
pub fn render(
    mesh: &PolyMesh,
    tags: &TagStore,
    format: Format,
    options: &ExportOptions,
) -> Result<(String, ExportReport)> {
    match format {
        Format::Msh => msh::to_string(mesh, tags, &options.msh()),
        Format::List => list::to_string(mesh, tags, &options.list()),
    }
}

/// Export a tagged mesh to a file.
///
/// The format is `options.format`, or else detected from the extension.
/// The whole document is rendered before the file is opened, so a rejected
/// mesh never leaves a partial or truncated file behind.
pub fn export<P: AsRef<Path>>(
    mesh: &PolyMesh,
    tags: &TagStore,
    path: P,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let path = path.as_ref();
    let format = match options.format {
        Some(format) => format,
        None => Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
                .to_string(),
        })?,
    };

    for name in options.ignored_by(format) {
        log::warn!("`{name}` has no effect on {} output", format.extension());
    }

    match format {
        Format::Msh => msh::save(mesh, tags, path, &options.msh()),
        Format::List => list::save(mesh, tags, path, &options.list()),
    }
}

/// Tagged edges that belong to the mesh, in tag order.
///
/// Tags on vertex pairs that are not a face edge (stale tags, diagonals,
/// self-loops) are skipped with a warning.
pub(crate) fn marked_edges(mesh: &PolyMesh, tags: &TagStore) -> Vec<(EdgeKey, i32)> {
    let known = mesh.edge_set();
    tags.edge_tags()
        .filter(|(key, _)| {
            let found = known.contains(key);
            if !found {
                let (a, b) = key.endpoints();
                log::warn!("edge tag ({a}, {b}) is not an edge of the mesh; skipped");
            }
            found
        })
        .collect()
}

/// Write a rendered document to `path` in one scoped open/write/close.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    let save_error = |e: std::io::Error| MeshError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let file = File::create(path).map_err(save_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(save_error)?;
    writer.flush().map_err(save_error)?;
    Ok(())
}
