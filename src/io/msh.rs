//! 2D `msh` format support.
//!
//! The `msh` format is a small line-oriented text format read by external
//! meshing tools. Lines starting with `#` are comments. Layout:
//!
//! ```text
//! # header
//! # ndim npoint ncell nmarked_edge nmarked_face
//! 2 4 1 1 0
//!
//! # points
//! # id marker x y
//! 0 -100 0.00000000 0.00000000
//! ...
//!
//! # cells
//! # id attribute kind points
//! 0 0 qua4 0 1 2 3
//!
//! # marked edges
//! # marker p1 p2
//! -10 0 1
//! ```
//!
//! The marked-edges block is only written when at least one edge is tagged.
//! Every geometry problem is fatal: nothing is written unless the whole mesh
//! validates.

use std::fmt::Write as _;
use std::path::Path;

use super::validate::{cell_kind, check_orientation, check_point, check_tolerance, fmt_coord};
use super::{marked_edges, write_text, ExportReport, Format, DEFAULT_TOLERANCE};
use crate::error::{MeshError, Result};
use crate::mesh::PolyMesh;
use crate::tags::TagStore;

/// Options for `msh` export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MshOptions {
    /// Maximum allowed |x| and |y| of a cell's unit normal, and the minimum
    /// allowed z.
    pub tolerance: f64,
}

impl Default for MshOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MshOptions {
    /// Set the normal tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Render a tagged mesh as `msh` text.
///
/// # Example
///
/// ```
/// use planemark::io::msh::{self, MshOptions};
/// use planemark::mesh::{build_from_quads, VertexId};
/// use planemark::tags::TagStore;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
/// let mut tags = TagStore::new();
/// tags.set_vertex_tag(VertexId::new(0), -100);
///
/// let (text, _) = msh::to_string(&mesh, &tags, &MshOptions::default()).unwrap();
/// assert!(text.contains("\n2 4 1 0 0\n"));
/// assert!(text.contains("\n0 -100 0.00000000 0.00000000\n"));
/// ```
pub fn to_string(mesh: &PolyMesh, tags: &TagStore, options: &MshOptions) -> Result<(String, ExportReport)> {
    let tolerance = check_tolerance(options.tolerance)?;
    if mesh.num_vertices() == 0 {
        return Err(MeshError::MissingSelection);
    }

    log::info!("checking z-coordinates of {} vertices", mesh.num_vertices());
    for v in mesh.vertex_ids() {
        check_point(mesh, v)?;
    }

    let edges = marked_edges(mesh, tags);
    let mut buf = String::new();

    log::info!("writing msh buffer");
    writeln!(buf, "# header")?;
    writeln!(buf, "# ndim npoint ncell nmarked_edge nmarked_face")?;
    writeln!(
        buf,
        "2 {} {} {} 0",
        mesh.num_vertices(),
        mesh.num_faces(),
        edges.len()
    )?;

    writeln!(buf, "\n# points")?;
    writeln!(buf, "# id marker x y")?;
    for v in mesh.vertex_ids() {
        let p = mesh.world_position(v);
        writeln!(
            buf,
            "{} {} {} {}",
            v.index(),
            tags.vertex_marker(v),
            fmt_coord(p.x),
            fmt_coord(p.y)
        )?;
    }

    writeln!(buf, "\n# cells")?;
    writeln!(buf, "# id attribute kind points")?;
    for f in mesh.face_ids() {
        let kind = cell_kind(mesh, f)?;
        check_orientation(mesh, f, tolerance, false)?;

        write!(buf, "{} {} {}", f.index(), tags.face_marker(f), kind.tag())?;
        for &v in mesh.face_vertices(f) {
            write!(buf, " {v}")?;
        }
        buf.push('\n');
    }

    if !edges.is_empty() {
        writeln!(buf, "\n# marked edges")?;
        writeln!(buf, "# marker p1 p2")?;
        for (key, marker) in &edges {
            let (v0, v1) = key.endpoints();
            writeln!(buf, "{marker} {v0} {v1}")?;
        }
    }

    let report = ExportReport {
        format: Format::Msh,
        points: mesh.num_vertices(),
        cells: mesh.num_faces(),
        marked_edges: edges.len(),
        warnings: Vec::new(),
    };
    Ok((buf, report))
}

/// Save a tagged mesh to an `msh` file.
///
/// The file is only created once the mesh has fully validated.
pub fn save<P: AsRef<Path>>(
    mesh: &PolyMesh,
    tags: &TagStore,
    path: P,
    options: &MshOptions,
) -> Result<ExportReport> {
    let (text, report) = to_string(mesh, tags, options)?;
    write_text(path.as_ref(), &text)?;
    log::info!("wrote {}", path.as_ref().display());
    Ok(report)
}
