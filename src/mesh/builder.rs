//! Mesh construction utilities.
//!
//! This module provides functions for building polygon meshes from
//! face-vertex lists as commonly found in mesh file formats.

use std::collections::HashSet;

use nalgebra::Point3;

use super::polygon::PolyMesh;
use crate::error::{MeshError, Result};

/// Build a polygon mesh from vertices and faces of any arity.
///
/// Faces must have at least three vertices, reference existing vertices, and
/// use each vertex at most once. Winding and planarity are not checked here;
/// the exporters validate those.
///
/// # Example
/// ```
/// use planemark::mesh::build_from_polygons;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = build_from_polygons(&vertices, &[[0, 1, 2, 3]]).unwrap();
/// assert_eq!(mesh.num_vertices(), 4);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_polygons<F: AsRef<[usize]>>(
    vertices: &[Point3<f64>],
    faces: &[F],
) -> Result<PolyMesh> {
    for (fi, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(MeshError::InvalidCellArity {
                cell: fi,
                nodes: face.len(),
            });
        }

        let mut seen = HashSet::with_capacity(face.len());
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            if !seen.insert(vi) {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
    }

    let mut mesh = PolyMesh::with_capacity(vertices.len(), faces.len());
    for &pos in vertices {
        mesh.add_vertex(pos);
    }
    mesh.faces
        .extend(faces.iter().map(|face| face.as_ref().to_vec()));

    log::debug!(
        "built polygon mesh: {} vertices, {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );

    Ok(mesh)
}

/// Build a polygon mesh from vertices and triangle faces.
pub fn build_from_triangles(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Result<PolyMesh> {
    build_from_polygons(vertices, faces)
}

/// Build a polygon mesh from vertices and quad faces (counter-clockwise).
pub fn build_from_quads(vertices: &[Point3<f64>], faces: &[[usize; 4]]) -> Result<PolyMesh> {
    build_from_polygons(vertices, faces)
}

/// Convert a polygon mesh back to a face-vertex representation.
///
/// Returns `(vertices, faces)` with object-space positions.
pub fn to_face_vertex(mesh: &PolyMesh) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    (mesh.positions.clone(), mesh.faces.clone())
}
