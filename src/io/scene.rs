//! Scene documents.
//!
//! A scene bundles everything that persists between tagging sessions: the
//! mesh with its transform, the three tag overlays, the default tag values
//! and the label display flags. It is stored as JSON:
//!
//! ```json
//! {
//!   "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!   "faces": [[0, 1, 2]],
//!   "tags": {
//!     "vertices": [{ "idx": 0, "tag": -100 }],
//!     "edges": [{ "v0": 0, "v1": 1, "tag": -10 }],
//!     "cells": [{ "idx": 0, "tag": -1 }]
//!   },
//!   "defaults": { "vertex": -100, "edge": -10, "cell": -1 },
//!   "show": { "vertex": true, "edge": true, "cell": true }
//! }
//! ```
//!
//! `transform` (a row-major 4x4 matrix), `tags`, `defaults` and `show` are
//! optional. Tag lists keep their order, which is the order features were
//! first tagged.

use std::fs;
use std::path::Path;

use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

use super::write_text;
use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, to_face_vertex, EdgeKey, FaceId, PolyMesh, VertexId};
use crate::tags::{ShowTags, TagDefaults, TagStore};

/// A mesh together with its tags and tagging settings.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// The mesh being tagged.
    pub mesh: PolyMesh,
    /// Tags on the mesh.
    pub tags: TagStore,
    /// Values applied by "set tag".
    pub defaults: TagDefaults,
    /// Which tag labels are displayed.
    pub show: ShowTags,
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transform: Option<[[f64; 4]; 4]>,
    vertices: Vec<[f64; 3]>,
    faces: Vec<Vec<usize>>,
    #[serde(default)]
    tags: TagDocument,
    #[serde(default)]
    defaults: TagDefaults,
    #[serde(default)]
    show: ShowTags,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TagDocument {
    #[serde(default)]
    vertices: Vec<IndexTag>,
    #[serde(default)]
    edges: Vec<EdgeTag>,
    #[serde(default)]
    cells: Vec<IndexTag>,
}

#[derive(Debug, Serialize, Deserialize)]
struct IndexTag {
    idx: usize,
    tag: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeTag {
    v0: usize,
    v1: usize,
    tag: i32,
}

impl Scene {
    /// Create a scene around a mesh with no tags and default settings.
    pub fn new(mesh: PolyMesh) -> Self {
        Self {
            mesh,
            ..Self::default()
        }
    }

    /// Create a scene around a mesh that is already tagged.
    pub fn with_tags(mesh: PolyMesh, tags: TagStore) -> Self {
        Self {
            mesh,
            tags,
            ..Self::default()
        }
    }

    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: SceneDocument = serde_json::from_str(text)?;
        doc.defaults.validate()?;

        let vertices: Vec<Point3<f64>> = doc
            .vertices
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect();
        let mut mesh = build_from_polygons(&vertices, &doc.faces)?;
        if let Some(rows) = doc.transform {
            let flat: Vec<f64> = rows.iter().flatten().copied().collect();
            mesh.set_transform(Matrix4::from_row_slice(&flat));
        }

        let mut tags = TagStore::new();
        for t in &doc.tags.vertices {
            tags.set_vertex_tag(VertexId::new(t.idx), t.tag);
        }
        for t in &doc.tags.edges {
            tags.set_edge_tag(EdgeKey::new(t.v0, t.v1), t.tag);
        }
        for t in &doc.tags.cells {
            tags.set_face_tag(FaceId::new(t.idx), t.tag);
        }

        Ok(Self {
            mesh,
            tags,
            defaults: doc.defaults,
            show: doc.show,
        })
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let (vertices, faces) = to_face_vertex(&self.mesh);
        let m = self.mesh.transform();
        let transform: Option<[[f64; 4]; 4]> = (*m != Matrix4::identity())
            .then(|| std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)])));

        let doc = SceneDocument {
            transform,
            vertices: vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
            faces,
            tags: TagDocument {
                vertices: self
                    .tags
                    .vertex_tags()
                    .map(|(v, tag)| IndexTag { idx: v.index(), tag })
                    .collect(),
                edges: self
                    .tags
                    .edge_tags()
                    .map(|(e, tag)| {
                        let (v0, v1) = e.endpoints();
                        EdgeTag { v0, v1, tag }
                    })
                    .collect(),
                cells: self
                    .tags
                    .face_tags()
                    .map(|(f, tag)| IndexTag { idx: f.index(), tag })
                    .collect(),
            },
            defaults: self.defaults,
            show: self.show,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Load a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json(&text).map_err(|e| match e {
            MeshError::Json(err) => MeshError::LoadError {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            other => other,
        })?;
        log::debug!(
            "loaded scene {}: {} vertices, {} faces",
            path.display(),
            scene.mesh.num_vertices(),
            scene.mesh.num_faces()
        );
        Ok(scene)
    }

    /// Save the scene to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut text = self.to_json()?;
        text.push('\n');
        write_text(path.as_ref(), &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TRIANGLE: &str = r#"{
        "vertices": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        "faces": [[0, 1, 2]],
        "tags": {
            "vertices": [{ "idx": 2, "tag": -100 }, { "idx": 0, "tag": -5 }],
            "edges": [{ "v0": 1, "v1": 0, "tag": -10 }]
        }
    }"#;

    #[test]
    fn test_parse_minimal_document() {
        let scene = Scene::from_json(TRIANGLE).unwrap();
        assert_eq!(scene.mesh.num_vertices(), 3);
        assert_eq!(scene.mesh.num_faces(), 1);
        assert_eq!(scene.tags.vertex_marker(VertexId::new(2)), -100);
        assert_eq!(scene.tags.edge_marker(EdgeKey::new(0, 1)), -10);
        assert_eq!(scene.tags.num_face_tags(), 0);
        assert_eq!(scene.defaults, TagDefaults::default());
        assert_eq!(scene.show, ShowTags::default());
    }

    #[test]
    fn test_round_trip_keeps_tag_order_and_transform() {
        let mut scene = Scene::from_json(TRIANGLE).unwrap();
        scene
            .mesh
            .set_transform(Matrix4::new_translation(&Vector3::new(1.0, 2.0, 0.0)));
        scene.defaults.edge = -20;

        let again = Scene::from_json(&scene.to_json().unwrap()).unwrap();
        let order: Vec<_> = again.tags.vertex_tags().collect();
        assert_eq!(order, vec![(VertexId::new(2), -100), (VertexId::new(0), -5)]);
        assert_eq!(again.mesh.transform(), scene.mesh.transform());
        assert_eq!(again.defaults.edge, -20);
    }

    #[test]
    fn test_identity_transform_is_omitted() {
        let scene = Scene::from_json(TRIANGLE).unwrap();
        assert!(!scene.to_json().unwrap().contains("transform"));
    }

    #[test]
    fn test_out_of_range_defaults_are_rejected() {
        let text = r#"{ "vertices": [], "faces": [], "defaults": { "edge": -500 } }"#;
        assert!(matches!(
            Scene::from_json(text),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_bad_face_is_rejected() {
        let text = r#"{ "vertices": [[0.0, 0.0, 0.0]], "faces": [[0, 1, 2]] }"#;
        assert!(matches!(
            Scene::from_json(text),
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let scene = Scene::from_json(TRIANGLE).unwrap();
        scene.save(&path).unwrap();

        let loaded = Scene::load(&path).unwrap();
        assert_eq!(loaded.tags.num_vertex_tags(), 2);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Scene::load(&path), Err(MeshError::LoadError { .. })));
    }
}
