//! Build platform descriptor.
//!
//! Every bundled app carries a descriptor telling it which platform it was
//! built for. This crate itself targets the web build, so the process-wide
//! [`PLATFORM`] constant holds `"web"` in all three fields; the bundler
//! stamps an owned [`BuildDescriptor`] into each output tree so native
//! builds self-identify correctly.

use serde::{Deserialize, Serialize};

use crate::tag::PlatformTag;

/// The identity of the current build. Read-only for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformDescriptor {
    /// Runtime mode the build targets.
    pub mode: &'static str,
    /// Platform name.
    pub name: &'static str,
    /// Platform identifier.
    pub id: &'static str,
}

/// The descriptor baked into this build.
pub const PLATFORM: PlatformDescriptor = PlatformDescriptor {
    mode: "web",
    name: "web",
    id: "web",
};

/// An owned descriptor for a specific build target.
///
/// Mirrors [`PlatformDescriptor`] field for field; produced when bundling
/// rewrites the descriptor in an output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub mode: String,
    pub name: String,
    pub id: String,
}

impl BuildDescriptor {
    /// Descriptor for a build targeting `tag`, all three fields carrying
    /// the canonical tag spelling.
    pub fn for_tag(tag: PlatformTag) -> Self {
        let value = tag.as_str();
        Self {
            mode: value.to_string(),
            name: value.to_string(),
            id: value.to_string(),
        }
    }
}
