//! Sparse marker overlays.
//!
//! A [`TagStore`] holds three independent overlays (vertices, edges, faces).
//! Each overlay is an insertion-ordered list of `(key, tag)` entries with a
//! hash index on the key, so lookups are O(1) and iteration order is the order
//! in which features were first tagged. Entries are never removed.

use std::collections::HashMap;
use std::hash::Hash;

use crate::mesh::{EdgeKey, FaceId, VertexId};

/// One insertion-ordered sparse overlay.
#[derive(Debug, Clone)]
struct TagLayer<K> {
    entries: Vec<(K, i32)>,
    index: HashMap<K, usize>,
}

impl<K> Default for TagLayer<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> TagLayer<K> {
    /// Returns `true` if the key was not tagged before.
    fn set(&mut self, key: K, tag: i32) -> bool {
        match self.index.get(&key) {
            Some(&slot) => {
                self.entries[slot].1 = tag;
                false
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, tag));
                true
            }
        }
    }

    fn get(&self, key: K) -> Option<i32> {
        self.index.get(&key).map(|&slot| self.entries[slot].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = (K, i32)> + '_ {
        self.entries.iter().copied()
    }
}

/// Markers attached to the vertices, edges and faces of one mesh.
///
/// Untagged features have marker `0`. Negative markers are boundary tags.
///
/// # Example
///
/// ```
/// use planemark::mesh::{EdgeKey, VertexId};
/// use planemark::tags::TagStore;
///
/// let mut tags = TagStore::new();
/// tags.set_vertex_tag(VertexId::new(0), -100);
/// tags.set_edge_tag(EdgeKey::new(1, 0), -10);
///
/// assert_eq!(tags.vertex_marker(VertexId::new(0)), -100);
/// assert_eq!(tags.vertex_marker(VertexId::new(1)), 0);
/// assert_eq!(tags.edge_marker(EdgeKey::new(0, 1)), -10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    vertices: TagLayer<VertexId>,
    edges: TagLayer<EdgeKey>,
    faces: TagLayer<FaceId>,
}

impl TagStore {
    /// Create an empty tag store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no feature has been tagged.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0 && self.edges.len() == 0 && self.faces.len() == 0
    }

    // ==================== Vertices ====================

    /// Tag a vertex, overwriting any existing tag.
    ///
    /// Returns `true` if the vertex was not tagged before.
    pub fn set_vertex_tag(&mut self, v: VertexId, tag: i32) -> bool {
        self.vertices.set(v, tag)
    }

    /// The tag of a vertex, if it has one.
    pub fn vertex_tag(&self, v: VertexId) -> Option<i32> {
        self.vertices.get(v)
    }

    /// The marker of a vertex (`0` when untagged).
    pub fn vertex_marker(&self, v: VertexId) -> i32 {
        self.vertex_tag(v).unwrap_or(0)
    }

    /// Number of tagged vertices.
    pub fn num_vertex_tags(&self) -> usize {
        self.vertices.len()
    }

    /// Tagged vertices in the order they were first tagged.
    pub fn vertex_tags(&self) -> impl Iterator<Item = (VertexId, i32)> + '_ {
        self.vertices.iter()
    }

    // ==================== Edges ====================

    /// Tag an edge, overwriting any existing tag.
    ///
    /// Returns `true` if the edge was not tagged before.
    pub fn set_edge_tag(&mut self, key: EdgeKey, tag: i32) -> bool {
        self.edges.set(key, tag)
    }

    /// The tag of an edge, if it has one.
    pub fn edge_tag(&self, key: EdgeKey) -> Option<i32> {
        self.edges.get(key)
    }

    /// The marker of an edge (`0` when untagged).
    pub fn edge_marker(&self, key: EdgeKey) -> i32 {
        self.edge_tag(key).unwrap_or(0)
    }

    /// Number of tagged edges.
    pub fn num_edge_tags(&self) -> usize {
        self.edges.len()
    }

    /// Tagged edges in the order they were first tagged.
    pub fn edge_tags(&self) -> impl Iterator<Item = (EdgeKey, i32)> + '_ {
        self.edges.iter()
    }

    // ==================== Faces ====================

    /// Tag a face, overwriting any existing tag.
    ///
    /// Returns `true` if the face was not tagged before.
    pub fn set_face_tag(&mut self, f: FaceId, tag: i32) -> bool {
        self.faces.set(f, tag)
    }

    /// The tag of a face, if it has one.
    pub fn face_tag(&self, f: FaceId) -> Option<i32> {
        self.faces.get(f)
    }

    /// The marker of a face (`0` when untagged).
    pub fn face_marker(&self, f: FaceId) -> i32 {
        self.face_tag(f).unwrap_or(0)
    }

    /// Number of tagged faces.
    pub fn num_face_tags(&self) -> usize {
        self.faces.len()
    }

    /// Tagged faces in the order they were first tagged.
    pub fn face_tags(&self) -> impl Iterator<Item = (FaceId, i32)> + '_ {
        self.faces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_marker_is_zero() {
        let tags = TagStore::new();
        assert!(tags.is_empty());
        assert_eq!(tags.vertex_marker(VertexId::new(3)), 0);
        assert_eq!(tags.edge_marker(EdgeKey::new(0, 1)), 0);
        assert_eq!(tags.face_marker(FaceId::new(0)), 0);
        assert_eq!(tags.vertex_tag(VertexId::new(3)), None);
    }

    #[test]
    fn test_retag_updates_in_place() {
        let mut tags = TagStore::new();
        assert!(tags.set_vertex_tag(VertexId::new(2), -100));
        assert!(tags.set_vertex_tag(VertexId::new(0), -100));
        assert!(!tags.set_vertex_tag(VertexId::new(2), -7));

        assert_eq!(tags.num_vertex_tags(), 2);
        assert_eq!(tags.vertex_marker(VertexId::new(2)), -7);

        // Order of first insertion is kept.
        let order: Vec<_> = tags.vertex_tags().collect();
        assert_eq!(order, vec![(VertexId::new(2), -7), (VertexId::new(0), -100)]);
    }

    #[test]
    fn test_edge_tags_are_unordered() {
        let mut tags = TagStore::new();
        assert!(tags.set_edge_tag(EdgeKey::new(4, 1), -10));
        assert!(!tags.set_edge_tag(EdgeKey::new(1, 4), -20));
        assert_eq!(tags.num_edge_tags(), 1);
        assert_eq!(tags.edge_marker(EdgeKey::new(4, 1)), -20);
    }

    #[test]
    fn test_face_tags() {
        let mut tags = TagStore::new();
        tags.set_face_tag(FaceId::new(1), -1);
        tags.set_face_tag(FaceId::new(1), -2);
        tags.set_face_tag(FaceId::new(0), 5);
        assert_eq!(tags.num_face_tags(), 2);
        assert_eq!(tags.face_marker(FaceId::new(1)), -2);
        assert_eq!(tags.face_marker(FaceId::new(0)), 5);
        assert!(!tags.is_empty());
    }
}
