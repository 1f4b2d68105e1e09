//! Project document reading and writing.
//!
//! A project document is an XML description of the paints (visual sources)
//! and mappings (projections of a paint onto a destination shape) that make
//! up one projection-mapping project. This crate validates such a document
//! and replays it as entity-creation calls against a [`ProjectBuilder`], and
//! serializes paints and mappings back into the same vocabulary.

pub mod attr;
pub mod builder;
pub mod error;
pub mod model;
pub mod reader;
pub mod writer;

pub use builder::{CreateError, ProjectBuilder};
pub use error::{DocumentError, Location, ReadError};
pub use model::{ImagePaint, MappingKind, PaintKind, ShapeKind, TriangleMapping};
pub use reader::{FORMAT_VERSION, ReadReport, read_project};
pub use writer::{WriteError, write_project};
