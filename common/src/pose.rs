// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::heading::Heading;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Pose stores the tracked agent's world position and facing, sampled once
/// per render tick (from its vehicle while mounted).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub heading: Heading,
}

impl Pose {
    /// new returns a zero Pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// from_position returns a Pose with a position and zero heading.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    pub fn new_at(position: Vec3, heading: Heading) -> Self {
        Self { position, heading }
    }
}
