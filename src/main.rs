//! gpx2tracks cli - Split a GPX file into one file per track

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use argopt::cmd;
use log::info;
use serde::Deserialize;
use time::UtcOffset;

use gpx2tracks::{ExporterConfig, TrackExporter};

/// CLI of gpx2tracks - Extract every track of a GPX file to its own
/// file, each named by the date and time the track starts
#[cmd]
fn main(
    /// GPX file source
    source: String,
    /// Destination directory of the generated files
    destination: String,
    /// Exporter configuration. Default: .gpx2tracks.yaml, ~/.gpx2tracks.yaml
    #[opt(long)]
    config: Option<String>,
) -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let source = PathBuf::from(source);
    if !source.is_file() {
        return Err(format!("Source '{}' is not a file", source.display()));
    }

    let destination = fs::canonicalize(destination)
        .map_err(|e| format!("Failed on access the destination directory: {}", e))?;
    if !destination.is_dir() {
        return Err(format!(
            "Destination '{}' is not a directory",
            destination.display()
        ));
    }

    let file = File::open(&source)
        .map_err(|e| format!("Failed on open the source file: {}", e))?;

    let document = gpx::read(BufReader::new(file))
        .map_err(|e| format!("Failed on read the source GPX: {}", e))?;

    let mut exporter = TrackExporter::new(destination);
    exporter.zone(local_zone());
    exporter.configure(&load_configs(config))?;

    let summary = exporter.export_all(&document);

    info!(
        "{} track(s) written, {} skipped",
        summary.written.len(),
        summary.skipped
    );

    Ok(())
}

/// Zone offset of the system, UTC when it cannot be determined
fn local_zone() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Load the current config
fn load_configs(provided: Option<String>) -> ExporterConfig {
    let mut options = vec![];

    if let Some(sprovided) = provided {
        options.push(sprovided);
    }

    options.push(".gpx2tracks.yaml".to_string());

    if let Some(home) = dirs::home_dir() {
        if let Some(shome) = home.to_str() {
            options.push(format!("{}/.gpx2tracks.yaml", shome));
        }
    }

    let mut yaml: Option<String> = None;
    for fi in options {
        if let Ok(s) = fs::read_to_string(fi) {
            yaml = Some(s);
            break;
        }
    }

    if let Some(s) = yaml {
        if let Ok(conf) = serde_yaml::from_str::<Configs>(&s) {
            if let Some(exporter) = conf.exporter {
                return exporter;
            }
        }
    }

    ExporterConfig::default()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct Configs {
    pub exporter: Option<ExporterConfig>,
}

#[test]
fn parse_configs() -> Result<(), String> {
    let yaml = "\nexporter:";

    let conf: Configs = serde_yaml::from_str(&yaml).map_err(|e| e.to_string())?;

    assert_eq!(Configs { exporter: None }, conf);

    let yaml = "\nexporter:\n  zone: \"+02:00\"\n  creator: my tracker";

    let conf: Configs = serde_yaml::from_str(&yaml).map_err(|e| e.to_string())?;

    assert_eq!(
        Configs {
            exporter: Some(ExporterConfig {
                zone: Some("+02:00".to_string()),
                creator: Some("my tracker".to_string()),
            })
        },
        conf
    );

    Ok(())
}
