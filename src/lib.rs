//! gpx2tracks - Split a GPX file into one GPX file per track

mod splitter;

pub use splitter::export::{ExportSummary, ExporterConfig, TrackExporter};
pub use splitter::gpx::GpxGenerator;
pub use splitter::sorting::{sort_track, sort_waypoints};
pub use splitter::timing::{effective_time, file_name, start_time, MISSING_TIME};
