//! The paint/mapping/shape vocabulary of the project document.
//!
//! Type tags are modeled as closed enums with an explicit carrier for
//! unrecognized tags, so dispatch in the reader is exhaustive and an unknown
//! tag keeps its spelling for error reporting.

use mapcast_types::{Point, Uid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paint type tags understood by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintKind {
    /// A static image paint (`type="image"`).
    Image,
    /// Any other tag, including the empty string.
    Unknown(String),
}

impl PaintKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "image" => PaintKind::Image,
            other => PaintKind::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            PaintKind::Image => "image",
            PaintKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for PaintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Mapping type tags understood by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingKind {
    /// A textured triangle (`type="triangle_texture"`).
    TriangleTexture,
    /// A textured mesh (`type="mesh_texture"`). Accepted but not yet
    /// implemented: the reader skips it without creating an entity.
    MeshTexture,
    /// Any other tag, including the empty string.
    Unknown(String),
}

impl MappingKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "triangle_texture" => MappingKind::TriangleTexture,
            "mesh_texture" => MappingKind::MeshTexture,
            other => MappingKind::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            MappingKind::TriangleTexture => "triangle_texture",
            MappingKind::MeshTexture => "mesh_texture",
            MappingKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Shape kinds carried by the `shape` attribute of a destination or source
/// element. Only triangles are supported today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Other(String),
}

impl ShapeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "triangle" => ShapeKind::Triangle,
            other => ShapeKind::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Other(tag) => tag,
        }
    }
}

/// An image paint as declared in a document: a picture anchored at a
/// position in project space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePaint {
    pub id: Uid,
    pub name: String,
    pub uri: String,
    pub x: f32,
    pub y: f32,
}

/// A triangle-texture mapping as declared in a document: three source
/// vertices on the paint projected onto three destination vertices.
///
/// Vertex order is significant; it defines the correspondence between the
/// two triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMapping {
    pub id: Uid,
    pub paint_id: Uid,
    pub source: [Point; 3],
    pub destination: [Point; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_kind_dispatch() {
        assert_eq!(PaintKind::from_tag("image"), PaintKind::Image);
        assert_eq!(
            PaintKind::from_tag("video"),
            PaintKind::Unknown("video".to_string())
        );
        assert_eq!(PaintKind::from_tag(""), PaintKind::Unknown(String::new()));
    }

    #[test]
    fn test_mapping_kind_dispatch() {
        assert_eq!(
            MappingKind::from_tag("triangle_texture"),
            MappingKind::TriangleTexture
        );
        assert_eq!(
            MappingKind::from_tag("mesh_texture"),
            MappingKind::MeshTexture
        );
        assert_eq!(
            MappingKind::from_tag("quad_texture"),
            MappingKind::Unknown("quad_texture".to_string())
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for tag in ["image", "something_else"] {
            assert_eq!(PaintKind::from_tag(tag).tag(), tag);
        }
        for tag in ["triangle_texture", "mesh_texture", "warp"] {
            assert_eq!(MappingKind::from_tag(tag).tag(), tag);
        }
        for tag in ["triangle", "ellipse"] {
            assert_eq!(ShapeKind::from_tag(tag).tag(), tag);
        }
    }
}
