// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::heading::Heading;
use arrayvec::ArrayVec;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Most markers a single projection emits.
pub const MAX_GUIDE_POINTS: usize = 15;

/// One rendered marker of the projected path.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuidePoint {
    /// Ground height plus the configured lift.
    pub position: Vec3,
    /// Facing at this step; markers are drawn pointing along it.
    pub heading: Heading,
    /// 0 transparent, 1 opaque.
    pub opacity: f32,
    /// Meters from the agent.
    pub distance: f32,
}

/// A fresh path fully replaces the previous one every render tick; markers
/// have no identity between frames.
pub type GuidePath = ArrayVec<GuidePoint, MAX_GUIDE_POINTS>;
