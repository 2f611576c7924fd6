//! List-of-lists script export.
//!
//! Writes the mesh as two literal arrays in a generic scripting notation,
//! ready to paste into a script that draws or meshes the geometry:
//!
//! ```text
//! # points: [id, marker, x, y]
//! points = [
//!     [0, -100, 0.00000000, 0.00000000],
//!     ...
//! ]
//!
//! # cells: [id, attribute, [points], {local_edge: marker}]
//! cells = [
//!     [0, -1, [0, 1, 2, 3], {0: -10}],
//! ]
//! ```
//!
//! Local edge `k` of a cell joins its vertex `k` to vertex `(k + 1) % n`.
//! Only boundary edges (negative marker) appear in a cell's edge map.
//!
//! This exporter is lenient about geometry. A vertex off the z = 0 plane or a
//! cell with a bad normal gets an `# ERROR:` comment on its line, and the
//! problem is returned as a warning. Cells that are not 3- or 4-gons still
//! abort the export.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use super::validate::{cell_kind, check_orientation, check_point, check_tolerance, fmt_coord};
use super::{write_text, ExportReport, Format, DEFAULT_TOLERANCE};
use crate::error::{MeshError, Result};
use crate::mesh::PolyMesh;
use crate::tags::TagStore;

/// Options for list export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListOptions {
    /// Normal tolerance; see [`MshOptions::tolerance`](super::msh::MshOptions::tolerance).
    pub tolerance: f64,
    /// Project every vertex onto z = 0 instead of checking it.
    pub flatten: bool,
    /// Append the boilerplate that builds and shows a drawing of the mesh.
    pub drawing: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            flatten: false,
            drawing: false,
        }
    }
}

impl ListOptions {
    /// Set the normal tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable flattening onto z = 0.
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Enable or disable the drawing boilerplate.
    pub fn with_drawing(mut self, drawing: bool) -> Self {
        self.drawing = drawing;
        self
    }
}

const DRAWING_TRAILER: &str = "
mesh = Mesh(points, cells)
draw = Draw(mesh)
draw.show()
";

/// Render a tagged mesh as list script text.
///
/// Geometry problems are annotated inline and collected in
/// [`ExportReport::warnings`]; they do not fail the export.
pub fn to_string(mesh: &PolyMesh, tags: &TagStore, options: &ListOptions) -> Result<(String, ExportReport)> {
    let tolerance = check_tolerance(options.tolerance)?;
    if mesh.num_vertices() == 0 {
        return Err(MeshError::MissingSelection);
    }

    // Arity is a hard failure, so check it before producing anything.
    let kinds = mesh
        .face_ids()
        .map(|f| cell_kind(mesh, f))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("list export: {} cells classified", kinds.len());

    let mut warnings = Vec::new();
    let mut emitted = HashSet::new();
    let mut buf = String::new();

    writeln!(buf, "# points: [id, marker, x, y]")?;
    writeln!(buf, "points = [")?;
    for v in mesh.vertex_ids() {
        let p = mesh.world_position(v);
        write!(
            buf,
            "    [{}, {}, {}, {}],",
            v.index(),
            tags.vertex_marker(v),
            fmt_coord(p.x),
            fmt_coord(p.y)
        )?;
        if !options.flatten {
            annotate(&mut buf, &mut warnings, check_point(mesh, v))?;
        }
        buf.push('\n');
    }
    writeln!(buf, "]")?;

    writeln!(buf, "\n# cells: [id, attribute, [points], {{local_edge: marker}}]")?;
    writeln!(buf, "cells = [")?;
    for f in mesh.face_ids() {
        let points = mesh
            .face_vertices(f)
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let edge_map = mesh
            .face_edges(f)
            .filter_map(|(k, key)| {
                let marker = tags.edge_marker(key);
                if marker >= 0 {
                    return None;
                }
                emitted.insert(key);
                Some(format!("{k}: {marker}"))
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            buf,
            "    [{}, {}, [{}], {{{}}}],",
            f.index(),
            tags.face_marker(f),
            points,
            edge_map
        )?;
        annotate(
            &mut buf,
            &mut warnings,
            check_orientation(mesh, f, tolerance, options.flatten),
        )?;
        buf.push('\n');
    }
    writeln!(buf, "]")?;

    if options.drawing {
        buf.push_str(DRAWING_TRAILER);
    }

    for w in &warnings {
        log::warn!("{w}");
    }

    let report = ExportReport {
        format: Format::List,
        points: mesh.num_vertices(),
        cells: mesh.num_faces(),
        marked_edges: emitted.len(),
        warnings,
    };
    Ok((buf, report))
}

/// Turn a geometry error into an inline `# ERROR:` comment and a warning.
/// Any other error is passed through.
fn annotate(buf: &mut String, warnings: &mut Vec<String>, check: Result<()>) -> Result<()> {
    match check {
        Ok(()) => Ok(()),
        Err(e) if e.is_geometry() => {
            write!(buf, "  # ERROR: {e}")?;
            warnings.push(e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Save a tagged mesh as a list script.
pub fn save<P: AsRef<Path>>(
    mesh: &PolyMesh,
    tags: &TagStore,
    path: P,
    options: &ListOptions,
) -> Result<ExportReport> {
    let (text, report) = to_string(mesh, tags, options)?;
    write_text(path.as_ref(), &text)?;
    log::info!("wrote {}", path.as_ref().display());
    if !report.warnings.is_empty() {
        log::warn!(
            "{} written with {} geometry warning(s)",
            path.as_ref().display(),
            report.warnings.len()
        );
    }
    Ok(report)
}
