//! Feature tagging.
//!
//! Tags are integer markers layered over a mesh without touching its
//! geometry. A negative marker flags a boundary feature; `0` means untagged.
//!
//! - [`TagStore`]: sparse vertex, edge and face overlays
//! - [`TagDefaults`] / [`ShowTags`]: scene-wide tagging settings
//! - [`Selection`] / [`tag_selection`]: apply the defaults to selected features
//! - [`tag_labels`]: where tag labels sit over the mesh

mod defaults;
mod labels;
mod selection;
mod store;

use std::fmt;

pub use defaults::{ShowTags, TagDefaults};
pub use labels::{tag_labels, TagLabel};
pub use selection::{tag_selected, tag_selection, Selection};
pub use store::TagStore;

/// The kinds of mesh feature that can carry a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A vertex (point).
    Vertex,
    /// An edge between two vertices.
    Edge,
    /// A face (cell).
    Cell,
}

impl TagKind {
    /// All kinds, in export order.
    pub const ALL: [TagKind; 3] = [TagKind::Vertex, TagKind::Edge, TagKind::Cell];

    /// Lower-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Vertex => "vertex",
            TagKind::Edge => "edge",
            TagKind::Cell => "cell",
        }
    }

    pub(crate) fn param_name(self) -> &'static str {
        match self {
            TagKind::Vertex => "vertex_tag",
            TagKind::Edge => "edge_tag",
            TagKind::Cell => "cell_tag",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
