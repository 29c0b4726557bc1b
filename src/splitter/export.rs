//! Track export API

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use gpx::{Gpx, Track};
use log::{info, warn};
use serde::Deserialize;
use time::macros::format_description;
use time::UtcOffset;

use super::gpx::GpxGenerator;
use super::sorting::sort_track;
use super::timing::file_name;

/// Exporter options, usually loaded from the run configuration file
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExporterConfig {
    /// Zone offset applied when naming the files, eg.: +02:00
    pub zone: Option<String>,
    /// Creator attribute of the generated documents
    pub creator: Option<String>,
}

/// Written/skipped report of one export run
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written, in track order
    pub written: Vec<PathBuf>,
    /// Tracks skipped after a per-track failure
    pub skipped: usize,
}

/// Tracks exporter: writes each track of a document to its own file,
/// named by the track start time, inside the destination directory
pub struct TrackExporter {
    /// Destination directory
    pub out_dir: PathBuf,
    /// Zone offset used when naming the files
    pub zone: UtcOffset,
    /// Creator attribute of the generated documents
    pub creator: String,
}

impl TrackExporter {
    /// Start a new exporter over the destination directory
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            zone: UtcOffset::UTC,
            creator: "gpx2tracks".to_string(),
        }
    }

    pub fn zone(&mut self, zone: UtcOffset) -> &mut Self {
        self.zone = zone;

        self
    }

    pub fn creator(&mut self, creator: String) -> &mut Self {
        self.creator = creator;

        self
    }

    /// Apply the provided config options over the exporter
    pub fn configure(&mut self, config: &ExporterConfig) -> Result<&mut Self, String> {
        if let Some(zone) = &config.zone {
            let zone_format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");

            self.zone = UtcOffset::parse(zone, zone_format)
                .map_err(|e| format!("Failed on parse the zone offset '{}': {}", zone, e))?;
        }

        if let Some(creator) = &config.creator {
            self.creator = creator.clone();
        }

        Ok(self)
    }

    /// Export every track of the document, one file per track, in
    /// document order.
    ///
    /// Tracks without any timed waypoint and tracks whose file cannot
    /// be written are reported and skipped. A skipped track never
    /// aborts the batch.
    pub fn export_all(&self, document: &Gpx) -> ExportSummary {
        let mut summary = ExportSummary::default();

        for (pos, track) in document.tracks.iter().enumerate() {
            match self.export_track(track) {
                Ok(file) => {
                    info!(
                        "Track '{}' written to '{}'",
                        track_label(track, pos),
                        file.display()
                    );
                    summary.written.push(file);
                }
                Err(e) => {
                    warn!("Skipping track '{}': {}", track_label(track, pos), e);
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// Export a single track, with its waypoints sorted by time, to
    /// its own file. Returns the written file path.
    pub fn export_track(&self, track: &Track) -> Result<PathBuf, String> {
        let name = file_name(track, self.zone)?;
        let file = self.out_dir.join(name);

        let document = GpxGenerator::single(sort_track(track), self.creator.clone()).generate()?;

        let dest = File::create(&file)
            .map_err(|e| format!("Failed on create the file '{}': {}", file.display(), e))?;

        let mut writer = BufWriter::new(dest);
        gpx::write(&document, &mut writer)
            .map_err(|e| format!("Failed on write the file '{}': {}", file.display(), e))?;

        Ok(file)
    }
}

/// Identifying representation of a track on the diagnostics
fn track_label(track: &Track, pos: usize) -> String {
    match &track.name {
        Some(name) => name.clone(),
        None => format!("#{}", pos + 1),
    }
}
