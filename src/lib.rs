//! # Planemark
//!
//! Boundary marker tagging and export for 2D planar polygon meshes.
//!
//! Planemark lets you tag the vertices, edges and faces of a planar mesh with
//! integer markers, then export the tagged mesh to simple text formats read by
//! external meshing and triangulation tools.
//!
//! ## Features
//!
//! - **Polygon meshes**: faces keep their arity (triangles and quads)
//! - **Sparse tag overlays**: vertex, edge and face markers that never touch
//!   the geometry, with in-place re-tagging
//! - **Two export formats**: strict `msh` text and a lenient list-of-lists
//!   script notation
//! - **Scene documents**: mesh, tags and tagging settings persisted as JSON
//!
//! Negative markers denote boundary features; `0` means untagged.
//!
//! ## Quick Start
//!
//! ```
//! use planemark::prelude::*;
//! use planemark::io::msh::{self, MshOptions};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
//!
//! let mut tags = TagStore::new();
//! tags.set_vertex_tag(VertexId::new(0), -100);
//! tags.set_edge_tag(EdgeKey::new(0, 1), -10);
//!
//! let (text, report) = msh::to_string(&mesh, &tags, &MshOptions::default()).unwrap();
//! assert_eq!(report.points, 4);
//! assert!(text.contains("\n-10 0 1\n"));
//! ```
//!
//! ## Tagging a Selection
//!
//! ```
//! use planemark::prelude::*;
//! use nalgebra::Point3;
//!
//! # let vertices = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! # ];
//! # let mesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
//! let mut tags = TagStore::new();
//! let selection = Selection::new().with_vertices([0, 1]).with_edges([(0, 1)]);
//! let tagged = tag_selection(&mut tags, &mesh, &selection, &TagDefaults::default());
//! assert_eq!(tagged, 3);
//! assert_eq!(tags.vertex_marker(VertexId::new(1)), -100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod tags;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use planemark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::io::scene::Scene;
    pub use crate::io::{export, ExportOptions, ExportReport, Format};
    pub use crate::mesh::{
        build_from_polygons, build_from_quads, build_from_triangles, EdgeKey, FaceId, PolyMesh,
        VertexId,
    };
    pub use crate::tags::{
        tag_labels, tag_selection, Selection, ShowTags, TagDefaults, TagKind, TagLabel, TagStore,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
