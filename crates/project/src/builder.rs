//! Defines the `ProjectBuilder` trait, which decouples document reading from
//! the concrete project model that stores paints and mappings.

use mapcast_types::{Point, Uid};
use thiserror::Error;

/// Why a builder rejected an entity-creation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct CreateError {
    pub reason: String,
}

impl CreateError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The semantic actions of building a project, without exposing the
/// underlying entity types.
///
/// The reader calls these in document order, one call per declared entity.
/// `id` is the document's declared identity, [`Uid::NULL`] when the document
/// left it out; the builder returns the runtime identity it actually
/// assigned. A rejected creation is an `Err` — the reader records it and
/// keeps going.
pub trait ProjectBuilder {
    /// Creates an image paint from `uri`, anchored at (`x`, `y`).
    fn create_image_paint(
        &mut self,
        id: Uid,
        uri: &str,
        x: f32,
        y: f32,
    ) -> Result<Uid, CreateError>;

    /// Creates a triangle-texture mapping projecting `paint_id` from the
    /// `source` triangle onto the `destination` triangle.
    ///
    /// The vertex slices normally hold exactly three points each, but a
    /// document with an invalid shape can hand the builder fewer; the
    /// builder decides whether to reject such a mapping.
    fn create_triangle_texture_mapping(
        &mut self,
        id: Uid,
        paint_id: Uid,
        source: &[Point],
        destination: &[Point],
    ) -> Result<Uid, CreateError>;
}
