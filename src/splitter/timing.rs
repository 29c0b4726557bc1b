//! Track timing API

use gpx::{Track, Waypoint};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Sentinel used to order waypoints that carry no time of their own.
/// Only the ordering comparisons see it, the start time of a track never does.
pub const MISSING_TIME: OffsetDateTime = OffsetDateTime::UNIX_EPOCH;

/// Time of a waypoint for ordering purposes: its own, or [MISSING_TIME]
pub fn effective_time(wp: &Waypoint) -> OffsetDateTime {
    match wp.time {
        Some(time) => time.into(),
        None => MISSING_TIME,
    }
}

/// Earliest recorded time of the track, scanning every waypoint of
/// every segment. None when no waypoint carries a time.
pub fn start_time(track: &Track) -> Option<OffsetDateTime> {
    track
        .segments
        .iter()
        .flat_map(|seg| seg.points.iter())
        .filter_map(|wp| wp.time)
        .map(OffsetDateTime::from)
        .min()
}

/// Derive the file name of a track from its start time, rendered on
/// the provided zone offset
pub fn file_name(track: &Track, zone: UtcOffset) -> Result<String, String> {
    let stamp_format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

    let time = start_time(track).ok_or("No waypoint with a time on the track")?;

    let stamp = time
        .to_offset(zone)
        .format(stamp_format)
        .map_err(|e| format!("Failed on format the track time: {}", e))?;

    Ok(format!("{}.gpx", stamp))
}
