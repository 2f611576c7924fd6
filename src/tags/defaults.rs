//! Scene-wide tagging settings.
//!
//! [`TagDefaults`] holds the value that "set tag" applies to each feature kind.
//! [`ShowTags`] holds which kinds of tag labels are displayed.

use serde::{Deserialize, Serialize};

use super::TagKind;
use crate::error::{MeshError, Result};

/// Default marker applied when tagging a selection.
///
/// Each value is confined to a range. Vertex tags live in `[-1000, 0]`.
/// Edge and cell tags live in `[-99, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDefaults {
    /// Default vertex tag.
    pub vertex: i32,
    /// Default edge tag.
    pub edge: i32,
    /// Default cell tag.
    pub cell: i32,
}

impl Default for TagDefaults {
    fn default() -> Self {
        Self {
            vertex: -100,
            edge: -10,
            cell: -1,
        }
    }
}

impl TagDefaults {
    /// Allowed range of default values for a feature kind.
    pub fn range(kind: TagKind) -> (i32, i32) {
        match kind {
            TagKind::Vertex => (-1000, 0),
            TagKind::Edge | TagKind::Cell => (-99, 0),
        }
    }

    /// Check a value against the range for a feature kind.
    pub fn check(kind: TagKind, value: i32) -> Result<i32> {
        let (min, max) = Self::range(kind);
        if value < min || value > max {
            return Err(MeshError::invalid_param(
                kind.param_name(),
                value,
                "outside the allowed range for this feature kind",
            ));
        }
        Ok(value)
    }

    /// The default for a feature kind.
    pub fn get(&self, kind: TagKind) -> i32 {
        match kind {
            TagKind::Vertex => self.vertex,
            TagKind::Edge => self.edge,
            TagKind::Cell => self.cell,
        }
    }

    /// Set the default for a feature kind after range-checking it.
    pub fn set(&mut self, kind: TagKind, value: i32) -> Result<()> {
        let value = Self::check(kind, value)?;
        match kind {
            TagKind::Vertex => self.vertex = value,
            TagKind::Edge => self.edge = value,
            TagKind::Cell => self.cell = value,
        }
        Ok(())
    }

    /// Check every default against its range.
    pub fn validate(&self) -> Result<()> {
        for kind in TagKind::ALL {
            Self::check(kind, self.get(kind))?;
        }
        Ok(())
    }
}

/// Which tag kinds are displayed as labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowTags {
    /// Show vertex tags.
    pub vertex: bool,
    /// Show edge tags.
    pub edge: bool,
    /// Show cell tags.
    pub cell: bool,
}

impl Default for ShowTags {
    fn default() -> Self {
        Self {
            vertex: true,
            edge: true,
            cell: true,
        }
    }
}

impl ShowTags {
    /// Whether labels of a feature kind are shown.
    pub fn shows(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Vertex => self.vertex,
            TagKind::Edge => self.edge,
            TagKind::Cell => self.cell,
        }
    }
}
