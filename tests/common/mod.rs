//! Shared fixtures for the integration suites.

use mapcast::{CreateError, Point, ProjectBuilder, Uid};

/// One creation request as observed by the fake project.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCall {
    ImagePaint {
        id: Uid,
        uri: String,
        x: f32,
        y: f32,
    },
    TriangleTextureMapping {
        id: Uid,
        paint_id: Uid,
        source: Vec<Point>,
        destination: Vec<Point>,
    },
}

/// A [`ProjectBuilder`] that records every creation request in order and
/// hands out sequential runtime ids. Individual requests can be configured
/// to be rejected, to exercise the reader's creation-failure paths.
#[derive(Default)]
pub struct RecordingProject {
    pub calls: Vec<BuilderCall>,
    pub reject_uris: Vec<String>,
    pub reject_mappings: bool,
    next_uid: i64,
}

impl RecordingProject {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    fn assign_uid(&mut self) -> Uid {
        self.next_uid += 1;
        Uid::new(self.next_uid)
    }
}

impl ProjectBuilder for RecordingProject {
    fn create_image_paint(
        &mut self,
        id: Uid,
        uri: &str,
        x: f32,
        y: f32,
    ) -> Result<Uid, CreateError> {
        if self.reject_uris.iter().any(|rejected| rejected == uri) {
            return Err(CreateError::new(format!("cannot load image {}", uri)));
        }
        self.calls.push(BuilderCall::ImagePaint {
            id,
            uri: uri.to_string(),
            x,
            y,
        });
        Ok(self.assign_uid())
    }

    fn create_triangle_texture_mapping(
        &mut self,
        id: Uid,
        paint_id: Uid,
        source: &[Point],
        destination: &[Point],
    ) -> Result<Uid, CreateError> {
        if self.reject_mappings {
            return Err(CreateError::new("mapping store is full"));
        }
        self.calls.push(BuilderCall::TriangleTextureMapping {
            id,
            paint_id,
            source: source.to_vec(),
            destination: destination.to_vec(),
        });
        Ok(self.assign_uid())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
