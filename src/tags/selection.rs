//! Tagging a selection of mesh features.
//!
//! A [`Selection`] names the features a user has picked. [`tag_selection`]
//! walks the mesh in its own order and tags every selected feature, so the
//! resulting tag order does not depend on how the selection was built.

use std::collections::HashSet;

use super::{TagDefaults, TagKind, TagStore};
use crate::mesh::{EdgeKey, FaceId, PolyMesh, VertexId};

/// A set of selected vertices, edges and faces.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    vertices: HashSet<VertexId>,
    edges: HashSet<EdgeKey>,
    faces: HashSet<FaceId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select vertices by index.
    pub fn with_vertices(mut self, ids: impl IntoIterator<Item = usize>) -> Self {
        self.vertices.extend(ids.into_iter().map(VertexId::new));
        self
    }

    /// Select edges by endpoint pair (in either order).
    pub fn with_edges(mut self, keys: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.edges.extend(keys.into_iter().map(EdgeKey::from));
        self
    }

    /// Select faces by index.
    pub fn with_faces(mut self, ids: impl IntoIterator<Item = usize>) -> Self {
        self.faces.extend(ids.into_iter().map(FaceId::new));
        self
    }

    /// Whether nothing of the given kind is selected.
    pub fn is_empty_for(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Vertex => self.vertices.is_empty(),
            TagKind::Edge => self.edges.is_empty(),
            TagKind::Cell => self.faces.is_empty(),
        }
    }

    /// Whether nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        TagKind::ALL.iter().all(|&k| self.is_empty_for(k))
    }
}

/// Tag every selected feature of one kind with `value`.
///
/// Features are visited in mesh order. Selected ids that do not exist in the
/// mesh are skipped with a warning. Returns the number of features tagged.
pub fn tag_selected(
    tags: &mut TagStore,
    mesh: &PolyMesh,
    selection: &Selection,
    kind: TagKind,
    value: i32,
) -> usize {
    let mut count = 0;
    match kind {
        TagKind::Vertex => {
            for v in mesh.vertex_ids().filter(|v| selection.vertices.contains(v)) {
                tags.set_vertex_tag(v, value);
                count += 1;
            }
            for v in selection.vertices.iter().filter(|&&v| !mesh.contains_vertex(v)) {
                log::warn!("selected vertex {} is not in the mesh; skipped", v.index());
            }
        }
        TagKind::Edge => {
            let edges = mesh.edges();
            for key in edges.iter().filter(|k| selection.edges.contains(*k)) {
                tags.set_edge_tag(*key, value);
                count += 1;
            }
            let known = mesh.edge_set();
            for key in selection.edges.iter().filter(|k| !known.contains(*k)) {
                let (a, b) = key.endpoints();
                log::warn!("selected edge ({a}, {b}) is not in the mesh; skipped");
            }
        }
        TagKind::Cell => {
            for f in mesh.face_ids().filter(|f| selection.faces.contains(f)) {
                tags.set_face_tag(f, value);
                count += 1;
            }
            for f in selection.faces.iter().filter(|&&f| !mesh.contains_face(f)) {
                log::warn!("selected face {} is not in the mesh; skipped", f.index());
            }
        }
    }
    log::debug!("tagged {count} {} feature(s) with {value}", kind.name());
    count
}

/// Tag the whole selection with the current defaults.
///
/// Each kind that has something selected is tagged with its own default.
/// Returns the number of features tagged across all kinds.
pub fn tag_selection(
    tags: &mut TagStore,
    mesh: &PolyMesh,
    selection: &Selection,
    defaults: &TagDefaults,
) -> usize {
    TagKind::ALL
        .iter()
        .filter(|&&kind| !selection.is_empty_for(kind))
        .map(|&kind| tag_selected(tags, mesh, selection, kind, defaults.get(kind)))
        .sum()
}
