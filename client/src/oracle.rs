// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use common::pose::Pose;
use glam::Vec3;

/// What the directions oracle reports for the agent's current leg.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OracleQuery {
    /// Raw maneuver code, validated through Turn::from_code.
    pub classification: i32,
    /// Distance to the next turn in oracle units; see
    /// NavConfig::oracle_distance_scale.
    pub raw_distance: f32,
}

/// External turn-by-turn directions service, consulted at the tracker's
/// poll cadence only.
pub trait DirectionsOracle {
    fn directions(&self, pose: &Pose, destination: Vec3) -> OracleQuery;
}

/// Where the agent is currently headed, if anywhere.
pub trait DestinationSource {
    /// None while no destination is set.
    fn destination(&self) -> Option<Vec3>;
}
