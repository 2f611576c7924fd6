//! Index types for mesh features.
//!
//! Vertices and faces are identified by their position in the mesh, which is
//! stable for the lifetime of a scene. Edges have no storage slot of their own;
//! they are identified by the sorted pair of their endpoint indices.

use std::fmt::{self, Debug};

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(usize);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(usize);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(FaceId, "F");

/// An undirected edge, stored as its endpoint indices in ascending order.
///
/// `EdgeKey::new(a, b)` and `EdgeKey::new(b, a)` compare equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EdgeKey {
    v0: usize,
    v1: usize,
}

impl EdgeKey {
    /// Create an edge key from two endpoints in any order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn v0(self) -> VertexId {
        VertexId(self.v0)
    }

    /// The larger endpoint.
    #[inline]
    pub fn v1(self) -> VertexId {
        VertexId(self.v1)
    }

    /// Both endpoints as raw indices.
    #[inline]
    pub fn endpoints(self) -> (usize, usize) {
        (self.v0, self.v1)
    }
}

impl Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E({}, {})", self.v0, self.v1)
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(VertexId::from(42), v);
    }

    #[test]
    fn test_edge_key_is_unordered() {
        assert_eq!(EdgeKey::new(3, 1), EdgeKey::new(1, 3));
        let e = EdgeKey::new(7, 2);
        assert_eq!(e.endpoints(), (2, 7));
        assert_eq!(e.v0(), VertexId::new(2));
        assert_eq!(e.v1(), VertexId::new(7));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", VertexId::new(42)), "V(42)");
        assert_eq!(format!("{:?}", FaceId::new(3)), "F(3)");
        assert_eq!(format!("{:?}", EdgeKey::new(5, 4)), "E(4, 5)");
    }
}
