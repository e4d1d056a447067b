// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Fixed tuning for the guide-marker path. Distances are world meters,
/// durations seconds; nothing here is negotiated at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavConfig {
    /// Distance from the agent to the first marker.
    pub min_distance: f32,
    /// Distance between consecutive markers.
    pub spacing: f32,
    /// Markers beyond this distance from the agent are not rendered.
    pub max_render_distance: f32,
    /// Curvature begins this far before the turn point.
    pub turn_lead: f32,
    /// Markers closer than this are fully opaque.
    pub fade_start: f32,
    /// Markers at or past this are fully transparent.
    pub fade_end: f32,
    /// Lift applied to rendered markers so they sit just above the ground.
    pub ground_offset: f32,
    /// Search radius for anchoring ground probes to a nearby road node.
    pub snap_radius: f32,
    /// Base marker size in screen pixels.
    pub marker_size: f32,
    /// Raw oracle distance units to meters.
    pub oracle_distance_scale: f32,
    /// Seconds between directions-oracle polls.
    pub poll_period: f32,
    /// Seconds of rendering suppressed after the maneuver changes.
    pub freeze_duration: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            spacing: 3.0,
            max_render_distance: 50.0,
            turn_lead: 10.0,
            fade_start: 30.0,
            fade_end: 50.0,
            ground_offset: 0.1,
            snap_radius: 5.0,
            marker_size: 32.0,
            oracle_distance_scale: 0.1,
            poll_period: 0.25,
            freeze_duration: 0.05,
        }
    }
}
