//! Core mesh data structures.
//!
//! This module provides the polygon mesh representation and related types
//! for describing 2D planar meshes that are tagged and exported.
//!
//! # Overview
//!
//! The primary type is [`PolyMesh`], a face-vertex mesh that keeps every
//! polygon at its original arity. Positions are stored in object space with
//! an object-to-world transform applied on access.
//!
//! # Index Types
//!
//! Mesh features are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`FaceId`] - Identifies a face
//! - [`EdgeKey`] - Identifies an undirected edge by its sorted endpoints
//!
//! # Construction
//!
//! ```
//! use planemark::mesh::{build_from_quads, PolyMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh: PolyMesh = build_from_quads(&vertices, &[[0, 1, 2, 3]]).unwrap();
//! assert_eq!(mesh.edges().len(), 4);
//! ```

mod builder;
mod index;
mod polygon;

pub use builder::{build_from_polygons, build_from_quads, build_from_triangles, to_face_vertex};
pub use index::{EdgeKey, FaceId, VertexId};
pub use polygon::PolyMesh;
