//! The project document layer of the mapcast projection-mapping engine.
//!
//! A project document declares the paints (visual sources, e.g. images) and
//! mappings (projections of a paint onto a destination shape) of one
//! project:
//!
//! ```xml
//! <project version="1.0">
//!   <paints>
//!     <paint id="1" name="backdrop" type="image">
//!       <uri>images/backdrop.png</uri><x>0</x><y>0</y>
//!     </paint>
//!   </paints>
//!   <mappings>
//!     <mapping id="2" paint_id="1" type="triangle_texture">
//!       <destination shape="triangle">
//!         <vertex x="10" y="10"/><vertex x="20" y="10"/><vertex x="10" y="20"/>
//!       </destination>
//!       <source shape="triangle">
//!         <vertex x="0" y="0"/><vertex x="1" y="0"/><vertex x="0" y="1"/>
//!       </source>
//!     </mapping>
//!   </mappings>
//! </project>
//! ```
//!
//! [`read_project`] validates a document and replays it against a
//! [`ProjectBuilder`] implementation, recording every structural error it
//! finds while creating as many valid entities as it can;
//! [`write_project`] serializes paints and mappings back into the same
//! vocabulary.

pub use mapcast_project::{
    CreateError, DocumentError, FORMAT_VERSION, ImagePaint, Location, MappingKind, PaintKind,
    ProjectBuilder, ReadError, ReadReport, ShapeKind, TriangleMapping, WriteError, read_project,
    write_project,
};
pub use mapcast_types::{Point, Uid};
