// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use common::heading::Heading;

/// Camera pose the host reports each frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CameraState {
    /// Yaw, same compass convention as agent headings.
    pub heading: Heading,
    /// Degrees off the horizon; 0 is level, +/-90 straight up/down.
    pub pitch: f32,
}

impl CameraState {
    /// Markers never squash below this fraction of their width.
    const MIN_FLATTEN: f32 = 0.15;

    pub fn new(heading: Heading, pitch: f32) -> Self {
        Self { heading, pitch }
    }

    /// How flat a ground marker is drawn: a thin sliver when the camera is
    /// level, the full footprint when it looks straight down.
    pub fn flatten_factor(&self) -> f32 {
        (self.pitch.abs() * (1.0 / 90.0)).clamp(Self::MIN_FLATTEN, 1.0)
    }
}
