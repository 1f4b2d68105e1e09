//! Serializes paints and mappings back into the project document format.

use crate::model::{ImagePaint, TriangleMapping};
use crate::reader::FORMAT_VERSION;
use mapcast_types::Point;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes a complete project document for the given paints and mappings.
///
/// Entities are emitted in slice order, which becomes document order when
/// the result is read back.
pub fn write_project(
    paints: &[ImagePaint],
    mappings: &[TriangleMapping],
) -> Result<String, WriteError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut project = BytesStart::new("project");
    project.push_attribute(("version", FORMAT_VERSION));
    writer.write_event(Event::Start(project))?;

    writer.write_event(Event::Start(BytesStart::new("paints")))?;
    for paint in paints {
        write_paint(&mut writer, paint)?;
    }
    writer.write_event(Event::End(BytesEnd::new("paints")))?;

    writer.write_event(Event::Start(BytesStart::new("mappings")))?;
    for mapping in mappings {
        write_mapping(&mut writer, mapping)?;
    }
    writer.write_event(Event::End(BytesEnd::new("mappings")))?;

    writer.write_event(Event::End(BytesEnd::new("project")))?;

    log::debug!(
        "wrote project document with {} paints and {} mappings",
        paints.len(),
        mappings.len()
    );
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_paint<W: Write>(writer: &mut Writer<W>, paint: &ImagePaint) -> Result<(), WriteError> {
    let mut elem = BytesStart::new("paint");
    elem.push_attribute(("id", paint.id.to_string().as_str()));
    elem.push_attribute(("name", paint.name.as_str()));
    elem.push_attribute(("type", "image"));
    writer.write_event(Event::Start(elem))?;

    write_text_element(writer, "uri", &paint.uri)?;
    write_text_element(writer, "x", &paint.x.to_string())?;
    write_text_element(writer, "y", &paint.y.to_string())?;

    writer.write_event(Event::End(BytesEnd::new("paint")))?;
    Ok(())
}

fn write_mapping<W: Write>(
    writer: &mut Writer<W>,
    mapping: &TriangleMapping,
) -> Result<(), WriteError> {
    let mut elem = BytesStart::new("mapping");
    elem.push_attribute(("id", mapping.id.to_string().as_str()));
    elem.push_attribute(("paint_id", mapping.paint_id.to_string().as_str()));
    elem.push_attribute(("type", "triangle_texture"));
    writer.write_event(Event::Start(elem))?;

    write_shape(writer, "destination", &mapping.destination)?;
    write_shape(writer, "source", &mapping.source)?;

    writer.write_event(Event::End(BytesEnd::new("mapping")))?;
    Ok(())
}

fn write_shape<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    vertices: &[Point; 3],
) -> Result<(), WriteError> {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("shape", "triangle"));
    writer.write_event(Event::Start(elem))?;

    for vertex in vertices {
        let mut v = BytesStart::new("vertex");
        v.push_attribute(("x", vertex.x.to_string().as_str()));
        v.push_attribute(("y", vertex.y.to_string().as_str()));
        writer.write_event(Event::Empty(v))?;
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), WriteError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
