//! GPX document assembly API

use gpx::{Gpx, GpxVersion, Track};

/// Standalone single track GPX document generator
pub struct GpxGenerator {
    pub track: Track,
    pub creator: String,
}

impl GpxGenerator {
    /// Prepare a new document holding only the provided track
    pub fn single(track: Track, creator: String) -> Self {
        Self { track, creator }
    }

    pub fn generate(self) -> Result<Gpx, String> {
        let mut gpx: Gpx = Default::default();
        gpx.version = GpxVersion::Gpx11;
        gpx.creator = Some(self.creator);
        gpx.tracks = vec![self.track];

        Ok(gpx)
    }
}
