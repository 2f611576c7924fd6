//! Geometry checks shared by the exporters.

use crate::error::{MeshError, Result};
use crate::mesh::{FaceId, PolyMesh, VertexId};

/// Element kind of an exported cell, by node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Three-node cell.
    Lin3,
    /// Four-node cell.
    Qua4,
}

impl CellKind {
    /// The kind tag written to `msh` files.
    pub fn tag(self) -> &'static str {
        match self {
            CellKind::Lin3 => "lin3",
            CellKind::Qua4 => "qua4",
        }
    }
}

/// Classify a cell by its node count.
///
/// Anything other than three or four nodes is an error in every format.
pub fn cell_kind(mesh: &PolyMesh, f: FaceId) -> Result<CellKind> {
    match mesh.face_vertices(f).len() {
        3 => Ok(CellKind::Lin3),
        4 => Ok(CellKind::Qua4),
        nodes => Err(MeshError::InvalidCellArity {
            cell: f.index(),
            nodes,
        }),
    }
}

/// Check that a vertex lies on z = 0 in world space.
pub fn check_point(mesh: &PolyMesh, v: VertexId) -> Result<()> {
    let z = mesh.world_position(v).z;
    if z != 0.0 {
        return Err(MeshError::non_planar(format!(
            "vertex {} has non-zero z-coordinate ({z})",
            v.index()
        )));
    }
    Ok(())
}

/// Check that a cell is parallel to the xy-plane and wound counter-clockwise.
///
/// The unit normal must have `|x|, |y| <= tolerance` and `z >= tolerance`.
/// A degenerate cell (zero normal) fails the winding check. With `flatten`
/// the cell is projected onto z = 0 first, so only the winding is checked.
pub fn check_orientation(mesh: &PolyMesh, f: FaceId, tolerance: f64, flatten: bool) -> Result<()> {
    let n = if flatten {
        mesh.flattened_face_normal(f)
    } else {
        mesh.face_normal(f)
    };

    if n.x.abs() > tolerance || n.y.abs() > tolerance {
        return Err(MeshError::non_planar(format!(
            "cell {} has normal ({:.6}, {:.6}, {:.6}) non-parallel to z",
            f.index(),
            n.x,
            n.y,
            n.z
        )));
    }
    if n.z < tolerance {
        return Err(MeshError::WrongWinding { cell: f.index() });
    }
    Ok(())
}

/// Reject tolerances that are negative or not finite.
pub fn check_tolerance(tolerance: f64) -> Result<f64> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(MeshError::invalid_param(
            "tolerance",
            tolerance,
            "must be a finite, non-negative number",
        ));
    }
    Ok(tolerance)
}

/// Format a coordinate with eight decimals, printing negative zero as zero.
pub(crate) fn fmt_coord(x: f64) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x:.8}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_polygons;
    use nalgebra::{Matrix4, Point3, Vector3};

    fn mesh(points: &[[f64; 3]], faces: &[Vec<usize>]) -> PolyMesh {
        let vertices: Vec<_> = points.iter().map(|p| Point3::new(p[0], p[1], p[2])).collect();
        build_from_polygons(&vertices, faces).unwrap()
    }

    #[test]
    fn test_cell_kind() {
        let pts = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.5, 0.0],
        ];
        let m = mesh(&pts, &[vec![0, 1, 2], vec![0, 1, 2, 3], vec![0, 1, 2, 3, 4]]);
        assert_eq!(cell_kind(&m, FaceId::new(0)).unwrap().tag(), "lin3");
        assert_eq!(cell_kind(&m, FaceId::new(1)).unwrap().tag(), "qua4");
        assert!(matches!(
            cell_kind(&m, FaceId::new(2)),
            Err(MeshError::InvalidCellArity { cell: 2, nodes: 5 })
        ));
    }

    #[test]
    fn test_check_point() {
        let mut m = mesh(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], &[vec![0, 1, 2]]);
        assert!(check_point(&m, VertexId::new(0)).is_ok());

        m.set_transform(Matrix4::new_translation(&Vector3::new(0.0, 0.0, 0.25)));
        let err = check_point(&m, VertexId::new(0)).unwrap_err();
        assert!(err.to_string().contains("non-zero z-coordinate (0.25)"));
    }

    #[test]
    fn test_check_orientation() {
        let pts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let ccw = mesh(&pts, &[vec![0, 1, 2]]);
        assert!(check_orientation(&ccw, FaceId::new(0), 1e-4, false).is_ok());

        let cw = mesh(&pts, &[vec![0, 2, 1]]);
        assert!(matches!(
            check_orientation(&cw, FaceId::new(0), 1e-4, false),
            Err(MeshError::WrongWinding { cell: 0 })
        ));
    }

    #[test]
    fn test_tilted_cell() {
        let pts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.0]];
        let m = mesh(&pts, &[vec![0, 1, 2]]);
        assert!(matches!(
            check_orientation(&m, FaceId::new(0), 1e-4, false),
            Err(MeshError::NonPlanarGeometry { .. })
        ));
        assert!(check_orientation(&m, FaceId::new(0), 1e-4, true).is_ok());
    }

    #[test]
    fn test_check_tolerance() {
        assert_eq!(check_tolerance(1e-4).unwrap(), 1e-4);
        assert!(check_tolerance(-1.0).is_err());
        assert!(check_tolerance(f64::NAN).is_err());
    }

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(0.0), "0.00000000");
        assert_eq!(fmt_coord(-0.0), "0.00000000");
        assert_eq!(fmt_coord(1.5), "1.50000000");
        assert_eq!(fmt_coord(-2.25), "-2.25000000");
    }
}
