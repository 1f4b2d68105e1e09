use thiserror::Error;

/// A line/column position in the document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

impl From<roxmltree::TextPos> for Location {
    fn from(pos: roxmltree::TextPos) -> Self {
        Location {
            line: pos.row,
            col: pos.col,
        }
    }
}

/// A structural or content error found in a project document.
///
/// These are always document errors, never system faults: the reader has no
/// I/O of its own and treats the builder's rejections as content problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("XML parsing error: {0}")]
    Malformed(String),

    #[error("the document is not a project version 1.0 file")]
    UnsupportedVersion,

    #[error("unsupported paint type: {0}")]
    UnsupportedPaintType(String),

    #[error("cannot create image paint with uri {0}")]
    PaintCreationFailed(String),

    #[error("unsupported mapping type: {0}")]
    UnsupportedMappingType(String),

    #[error("cannot create triangle texture mapping")]
    MappingCreationFailed,

    #[error("wrong shape type: {0}")]
    WrongShapeType(String),

    #[error("shape has wrong number of vertices: expected 3, found {found}")]
    WrongVertexCount { found: usize },
}

/// A recorded [`ReadError`] together with where in the source it occurred.
///
/// Version and well-formedness failures happen before or outside node
/// traversal, so not every error carries a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentError {
    pub error: ReadError,
    pub location: Option<Location>,
}

impl DocumentError {
    pub fn new(error: ReadError, location: Location) -> Self {
        Self {
            error,
            location: Some(location),
        }
    }

    /// An error with no source position attached.
    pub fn bare(error: ReadError) -> Self {
        Self {
            error,
            location: None,
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} at {}", self.error, location),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
