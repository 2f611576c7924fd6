//! Planar polygon mesh.
//!
//! [`PolyMesh`] is a plain face-vertex mesh: an ordered list of positions and
//! an ordered list of polygons, each an ordered list of vertex indices. Unlike
//! a triangle mesh, polygons keep their original arity so that quads survive
//! unchanged through to export.
//!
//! Positions are stored in object space. An object-to-world transform is kept
//! alongside and applied by the `world_*` accessors; exporters only ever see
//! world coordinates.

use std::collections::HashSet;

use nalgebra::{Matrix4, Point3, Vector3};

use super::index::{EdgeKey, FaceId, VertexId};

/// Below this length a Newell normal is treated as zero (degenerate face).
const NORMAL_EPSILON: f64 = 1e-12;

/// A polygon mesh with per-face vertex lists.
#[derive(Debug, Clone)]
pub struct PolyMesh {
    /// Object-space vertex positions.
    pub(crate) positions: Vec<Point3<f64>>,

    /// Faces as ordered vertex index lists.
    pub(crate) faces: Vec<Vec<usize>>,

    /// Object-to-world transform.
    pub(crate) transform: Matrix4<f64>,
}

impl Default for PolyMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyMesh {
    /// Create a new empty mesh with an identity transform.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
            transform: Matrix4::identity(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        Self {
            positions: Vec::with_capacity(num_vertices),
            faces: Vec::with_capacity(num_faces),
            transform: Matrix4::identity(),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has neither vertices nor faces.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }

    /// Check whether a vertex id refers to a vertex of this mesh.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.positions.len()
    }

    /// Check whether a face id refers to a face of this mesh.
    #[inline]
    pub fn contains_face(&self, f: FaceId) -> bool {
        f.index() < self.faces.len()
    }

    /// Object-space position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.positions[v.index()]
    }

    /// World-space position of a vertex.
    pub fn world_position(&self, v: VertexId) -> Point3<f64> {
        self.transform.transform_point(self.position(v))
    }

    /// Vertex indices of a face, in winding order.
    #[inline]
    pub fn face_vertices(&self, f: FaceId) -> &[usize] {
        &self.faces[f.index()]
    }

    /// The object-to-world transform.
    pub fn transform(&self) -> &Matrix4<f64> {
        &self.transform
    }

    /// Replace the object-to-world transform.
    pub fn set_transform(&mut self, transform: Matrix4<f64>) {
        self.transform = transform;
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.positions.len()).map(VertexId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over the edges of a face as `(local_position, key)` pairs.
    ///
    /// Local edge `k` joins face vertex `k` to face vertex `(k + 1) % n`.
    pub fn face_edges(&self, f: FaceId) -> impl Iterator<Item = (usize, EdgeKey)> + '_ {
        let verts = self.face_vertices(f);
        let n = verts.len();
        (0..n).map(move |k| (k, EdgeKey::new(verts[k], verts[(k + 1) % n])))
    }

    /// All unique edges, in the order they are first met walking the faces.
    pub fn edges(&self) -> Vec<EdgeKey> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for f in self.face_ids() {
            for (_, key) in self.face_edges(f) {
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }
        edges
    }

    /// The set of unique edges, for membership tests.
    pub fn edge_set(&self) -> HashSet<EdgeKey> {
        self.face_ids()
            .flat_map(|f| self.face_edges(f).map(|(_, key)| key))
            .collect()
    }

    // ==================== Geometry ====================

    /// Compute the unit normal of a face in world space.
    ///
    /// Uses Newell's method, so non-triangular and slightly non-planar
    /// polygons get a well-defined average normal. A counter-clockwise face in
    /// the xy-plane has normal `+z`. Degenerate faces return the zero vector.
    pub fn face_normal(&self, f: FaceId) -> Vector3<f64> {
        newell_normal(self.face_vertices(f).iter().map(|&v| self.world_position(VertexId::new(v))))
    }

    /// Compute the unit normal of a face after projecting it onto z = 0.
    ///
    /// The result is `+z`, `-z` or zero depending on the winding of the
    /// projected polygon.
    pub fn flattened_face_normal(&self, f: FaceId) -> Vector3<f64> {
        newell_normal(self.face_vertices(f).iter().map(|&v| {
            let p = self.world_position(VertexId::new(v));
            Point3::new(p.x, p.y, 0.0)
        }))
    }

    /// Compute the world-space centroid (vertex average) of a face.
    pub fn face_centroid(&self, f: FaceId) -> Point3<f64> {
        let verts = self.face_vertices(f);
        let sum = verts
            .iter()
            .map(|&v| self.world_position(VertexId::new(v)).coords)
            .fold(Vector3::<f64>::zeros(), |acc, p| acc + p);
        Point3::from(sum / verts.len() as f64)
    }

    /// Compute the world-space midpoint of an edge.
    pub fn edge_midpoint(&self, key: EdgeKey) -> Point3<f64> {
        let p0 = self.world_position(key.v0());
        let p1 = self.world_position(key.v1());
        Point3::from((p0.coords + p1.coords) * 0.5)
    }

    /// Compute the world-space bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut points = self.vertex_ids().map(|v| self.world_position(v));
        let first = points.next()?;

        let (mut min, mut max) = (first, first);
        for p in points {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Whether every world-space vertex has z exactly zero.
    pub fn is_flat(&self) -> bool {
        self.vertex_ids().all(|v| self.world_position(v).z == 0.0)
    }

    // ==================== Construction ====================

    /// Add a new vertex and return its ID.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.positions.len());
        self.positions.push(position);
        id
    }
}

/// Newell's polygon normal, normalized; zero for degenerate polygons.
fn newell_normal(points: impl Iterator<Item = Point3<f64>>) -> Vector3<f64> {
    let pts: Vec<Point3<f64>> = points.collect();

    let mut n: Vector3<f64> = Vector3::zeros();
    for i in 0..pts.len() {
        let a = &pts[i];
        let b = &pts[(i + 1) % pts.len()];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }

    let len = n.norm();
    if len < NORMAL_EPSILON {
        Vector3::zeros()
    } else {
        n / len
    }
}
