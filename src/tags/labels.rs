//! Tag label anchors.
//!
//! Computes where each boundary tag would be drawn over the mesh: vertex tags
//! at the vertex, edge tags at the edge midpoint, cell tags at the face
//! centroid. Only negative tags are labelled. All positions are world-space.

use nalgebra::Point3;

use super::{ShowTags, TagKind, TagStore};
use crate::mesh::PolyMesh;

/// A tag value anchored at a world-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct TagLabel {
    /// The kind of feature carrying the tag.
    pub kind: TagKind,
    /// Where the label is anchored.
    pub position: Point3<f64>,
    /// The tag value.
    pub tag: i32,
}

impl TagLabel {
    /// The label text.
    pub fn text(&self) -> String {
        self.tag.to_string()
    }
}

/// Collect labels for every shown, negative tag whose feature exists.
///
/// Labels are grouped by kind (vertices, edges, cells) and follow tag order
/// within each group.
pub fn tag_labels(mesh: &PolyMesh, tags: &TagStore, show: &ShowTags) -> Vec<TagLabel> {
    let mut labels = Vec::new();

    if show.shows(TagKind::Vertex) {
        labels.extend(
            tags.vertex_tags()
                .filter(|&(v, tag)| tag < 0 && mesh.contains_vertex(v))
                .map(|(v, tag)| TagLabel {
                    kind: TagKind::Vertex,
                    position: mesh.world_position(v),
                    tag,
                }),
        );
    }

    if show.shows(TagKind::Edge) {
        let known = mesh.edge_set();
        labels.extend(
            tags.edge_tags()
                .filter(|&(e, tag)| tag < 0 && known.contains(&e))
                .map(|(e, tag)| TagLabel {
                    kind: TagKind::Edge,
                    position: mesh.edge_midpoint(e),
                    tag,
                }),
        );
    }

    if show.shows(TagKind::Cell) {
        labels.extend(
            tags.face_tags()
                .filter(|&(f, tag)| tag < 0 && mesh.contains_face(f))
                .map(|(f, tag)| TagLabel {
                    kind: TagKind::Cell,
                    position: mesh.face_centroid(f),
                    tag,
                }),
        );
    }

    labels
}
