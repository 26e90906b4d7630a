// Ground sensor: contact flag plus a short downward probe

use glam::Vec3;

use super::body::RaycastQuery;
use super::config::{GROUND_PROBE_RANGE, GROUND_SNAP_DISTANCE};

/// One reading of the ground sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundReading {
    /// Whether the actor counts as grounded this frame
    pub grounded: bool,
    /// Probe distance to the ground, `f32::INFINITY` when nothing is in range
    pub probe_distance: f32,
}

/// Cast the ground probe straight down from `origin`.
/// Returns `f32::INFINITY` if nothing lies within `GROUND_PROBE_RANGE`.
pub fn ground_distance<Q: RaycastQuery + ?Sized>(query: &Q, origin: Vec3) -> f32 {
    query
        .raycast(origin, Vec3::NEG_Y, GROUND_PROBE_RANGE)
        .unwrap_or(f32::INFINITY)
}

/// Combine the collision-volume contact flag with the probe.
///
/// The contact flag lags a frame on slopes and steps; the probe catches
/// ground that is about to be touched.
pub fn sense_ground<Q: RaycastQuery + ?Sized>(query: &Q, origin: Vec3, contact: bool) -> GroundReading {
    let probe_distance = ground_distance(query, origin);
    GroundReading {
        grounded: contact || probe_distance < GROUND_SNAP_DISTANCE,
        probe_distance,
    }
}
