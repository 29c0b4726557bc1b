//! Waypoint sorting API

use gpx::{Track, Waypoint};

use super::timing::effective_time;

/// Sort the waypoints of one segment ascending by time.
///
/// Waypoints without a time land before any timed waypoint. The sort is
/// stable: waypoints sharing a time keep their recorded relative order.
pub fn sort_waypoints(points: &[Waypoint]) -> Vec<Waypoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(effective_time);

    sorted
}

/// Rebuild a track with every segment's waypoints sorted by time.
///
/// Each segment is sorted on its own, never against the other segments.
/// Segment order, segment count and the track metadata are kept as is.
pub fn sort_track(track: &Track) -> Track {
    let mut sorted = track.clone();

    for segment in sorted.segments.iter_mut() {
        segment.points = sort_waypoints(&segment.points);
    }

    sorted
}
