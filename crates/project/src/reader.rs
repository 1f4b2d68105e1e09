//! Reads a project document and replays it as entity-creation calls against
//! a [`ProjectBuilder`].
//!
//! Reading is a single depth-first pass over the parsed tree. Recoverable
//! document errors are recorded in the [`ReadReport`] and traversal moves on
//! to the next sibling, so one bad paint does not cost the rest of the
//! project; only a malformed document or a version mismatch stops the run.

use crate::attr::{
    attr_str, attr_value, child_text, child_value, element_children, first_child_element,
};
use crate::builder::ProjectBuilder;
use crate::error::{DocumentError, ReadError};
use crate::model::{MappingKind, PaintKind, ShapeKind};
use mapcast_types::{Point, Uid};
use roxmltree::{Document, Node};

/// The project document version this reader understands.
pub const FORMAT_VERSION: &str = "1.0";

const ROOT_TAG: &str = "project";
const TRIANGLE_VERTICES: usize = 3;

/// The outcome of one document read.
///
/// Errors are kept in encounter order; the run succeeded only if none were
/// recorded, independently of how many entities were created along the way.
#[derive(Debug, Default)]
pub struct ReadReport {
    /// Number of entities the builder accepted.
    pub entities_created: usize,
    /// Every error recorded during the run, in document order.
    pub errors: Vec<DocumentError>,
}

impl ReadReport {
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&DocumentError> {
        self.errors.first()
    }

    pub fn last_error(&self) -> Option<&DocumentError> {
        self.errors.last()
    }
}

/// Parses `source` and replays the document against `builder`.
///
/// A source that is not well-formed XML yields a report with a single
/// [`ReadError::Malformed`] entry and no builder calls.
pub fn read_project(source: &str, builder: &mut dyn ProjectBuilder) -> ReadReport {
    let doc = match Document::parse(source) {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("project document is not well-formed: {}", e);
            let mut report = ReadReport::default();
            report.errors.push(DocumentError::new(
                ReadError::Malformed(e.to_string()),
                e.pos().into(),
            ));
            return report;
        }
    };
    ProjectReader::new(builder).read(&doc)
}

/// Walks a parsed document, dispatching each paint and mapping element and
/// accumulating the report.
struct ProjectReader<'b> {
    builder: &'b mut dyn ProjectBuilder,
    report: ReadReport,
}

impl<'b> ProjectReader<'b> {
    fn new(builder: &'b mut dyn ProjectBuilder) -> Self {
        Self {
            builder,
            report: ReadReport::default(),
        }
    }

    fn read(mut self, doc: &Document<'_>) -> ReadReport {
        let root = doc.root_element();
        if !root.has_tag_name(ROOT_TAG) || root.attribute("version") != Some(FORMAT_VERSION) {
            // The one fatal document error: nothing below the root is
            // inspected, so there is no node position to attach.
            log::warn!(
                "refusing document with root <{}> version {:?}",
                root.tag_name().name(),
                root.attribute("version").unwrap_or("")
            );
            self.report
                .errors
                .push(DocumentError::bare(ReadError::UnsupportedVersion));
            return self.report;
        }

        // A project without one of the sections is an old or hand-written
        // document with zero entities of that kind, not an error.
        if let Some(paints) = first_child_element(root, "paints") {
            for paint in element_children(paints) {
                self.read_paint(paint);
            }
        }
        if let Some(mappings) = first_child_element(root, "mappings") {
            for mapping in element_children(mappings) {
                self.read_mapping(mapping);
            }
        }

        log::debug!(
            "project read finished: {} entities created, {} errors",
            self.report.entities_created,
            self.report.errors.len()
        );
        self.report
    }

    fn read_paint(&mut self, paint: Node<'_, '_>) {
        let id = attr_value(paint, "id", Uid::NULL).value();
        // The format carries a display name, but nothing consumes it yet.
        let _name = attr_str(paint, "name").value();

        match PaintKind::from_tag(attr_str(paint, "type").value()) {
            PaintKind::Image => {
                let uri = child_text(paint, "uri").value();
                let x = child_value(paint, "x", 0.0f32).value();
                let y = child_value(paint, "y", 0.0f32).value();

                match self.builder.create_image_paint(id, uri, x, y) {
                    Ok(uid) => {
                        self.report.entities_created += 1;
                        log::debug!("created image paint {} from uri {}", uid, uri);
                    }
                    Err(e) => {
                        log::debug!("builder rejected image paint {}: {}", uri, e);
                        self.record(paint, ReadError::PaintCreationFailed(uri.to_string()));
                    }
                }
            }
            PaintKind::Unknown(tag) => {
                self.record(paint, ReadError::UnsupportedPaintType(tag));
            }
        }
    }

    fn read_mapping(&mut self, mapping: Node<'_, '_>) {
        let id = attr_value(mapping, "id", Uid::NULL).value();
        let paint_id = attr_value(mapping, "paint_id", Uid::NULL).value();

        match MappingKind::from_tag(attr_str(mapping, "type").value()) {
            MappingKind::TriangleTexture => {
                let destination = self.shape_points(mapping, "destination");
                let source = self.shape_points(mapping, "source");

                // Creation is attempted even when a shape failed to
                // validate; the builder sees whatever vertices were
                // recovered and makes the final call.
                match self.builder.create_triangle_texture_mapping(
                    id,
                    paint_id,
                    &source,
                    &destination,
                ) {
                    Ok(uid) => {
                        self.report.entities_created += 1;
                        log::debug!("created triangle texture mapping {} on paint {}", uid, paint_id);
                    }
                    Err(e) => {
                        log::debug!("builder rejected triangle texture mapping: {}", e);
                        self.record(mapping, ReadError::MappingCreationFailed);
                    }
                }
            }
            MappingKind::MeshTexture => {
                // Accepted but not yet implemented: newer documents may
                // declare mesh mappings, and this version skips them without
                // creating an entity or flagging the run.
            }
            MappingKind::Unknown(tag) => {
                self.record(mapping, ReadError::UnsupportedMappingType(tag));
            }
        }
    }

    /// Parses the named shape child of a mapping. A missing child reports
    /// like an empty shape element and contributes no vertices.
    fn shape_points(&mut self, mapping: Node<'_, '_>, name: &str) -> Vec<Point> {
        match first_child_element(mapping, name) {
            Some(shape) => self.read_shape(shape),
            None => {
                self.record(mapping, ReadError::WrongShapeType(String::new()));
                self.record(mapping, ReadError::WrongVertexCount { found: 0 });
                Vec::new()
            }
        }
    }

    fn read_shape(&mut self, shape: Node<'_, '_>) -> Vec<Point> {
        match ShapeKind::from_tag(attr_str(shape, "shape").value()) {
            ShapeKind::Triangle => {}
            ShapeKind::Other(tag) => self.record(shape, ReadError::WrongShapeType(tag)),
        }

        let vertices: Vec<Node<'_, '_>> = element_children(shape).collect();
        if vertices.len() != TRIANGLE_VERTICES {
            let found = vertices.len();
            self.record(shape, ReadError::WrongVertexCount { found });
        }

        // At most the first three vertices are read, in document order; a
        // short list yields a partial sequence rather than aborting the
        // mapping.
        vertices
            .iter()
            .take(TRIANGLE_VERTICES)
            .map(|vertex| read_vertex(*vertex))
            .collect()
    }

    fn record(&mut self, node: Node<'_, '_>, error: ReadError) {
        let location = node.document().text_pos_at(node.range().start).into();
        self.report.errors.push(DocumentError::new(error, location));
    }
}

fn read_vertex(vertex: Node<'_, '_>) -> Point {
    Point::new(
        attr_value(vertex, "x", 0.0).value(),
        attr_value(vertex, "y", 0.0).value(),
    )
}
