// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use glam::Vec3;

/// Result of a ground height query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GroundSample {
    Found(f32),
    NotFound,
}

impl GroundSample {
    /// found returns the height, if any.
    pub fn found(self) -> Option<f32> {
        match self {
            Self::Found(height) => Some(height),
            Self::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Host collision queries used to pin markers to the ground. Budget for up
/// to one call per guide point per render tick.
pub trait GroundProbe {
    /// Precise probe downward and upward from the hint height.
    fn probe_height(&self, x: f32, y: f32, z_hint: f32) -> GroundSample;

    /// Coarser query consulted when the precise probe misses.
    fn coarse_height(&self, x: f32, y: f32) -> GroundSample;
}

/// Nearest road-graph node query. Only the node's height is consumed; the
/// path never follows road topology.
pub trait RoadGraph {
    fn nearest_node(&self, position: Vec3, radius: f32) -> Option<Vec3>;
}

/// Resolves ground heights through a precise probe with a coarse fallback,
/// anchoring the probe near a road node when one is close enough.
pub struct GroundSampler<'a> {
    probe: &'a dyn GroundProbe,
    roads: Option<&'a dyn RoadGraph>,
    snap_radius: f32,
}

impl<'a> GroundSampler<'a> {
    pub fn new(
        probe: &'a dyn GroundProbe,
        roads: Option<&'a dyn RoadGraph>,
        snap_radius: f32,
    ) -> Self {
        Self {
            probe,
            roads,
            snap_radius,
        }
    }

    /// sample probes precisely around the hint, then falls back to the
    /// coarse query. NotFound only if both miss (e.g. over water).
    pub fn sample(&self, x: f32, y: f32, z_hint: f32) -> GroundSample {
        match self.probe.probe_height(x, y, z_hint) {
            GroundSample::Found(height) => GroundSample::Found(height),
            GroundSample::NotFound => self.probe.coarse_height(x, y),
        }
    }

    /// snap resolves the ground height for a stepped path point. The probe
    /// hint is anchored at the nearest road node within the snap radius; a
    /// miss on both probes keeps the stepped height.
    pub fn snap(&self, stepped: Vec3) -> f32 {
        let hint = self
            .roads
            .and_then(|roads| roads.nearest_node(stepped, self.snap_radius))
            .map_or(stepped.z, |node| node.z);
        self.sample(stepped.x, stepped.y, hint)
            .found()
            .unwrap_or(stepped.z)
    }
}
