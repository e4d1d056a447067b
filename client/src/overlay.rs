// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::camera::CameraState;
use crate::oracle::{DestinationSource, DirectionsOracle};
use crate::rgb::Rgba;
use crate::sprite::marker_sprite;
use crate::tracker::NavigationTracker;
use common::config::NavConfig;
use common::ground::GroundSampler;
use common::pose::Pose;
use common::projector::project;
use glam::{Vec2, Vec3};

/// World-to-screen projection owned by the host renderer.
pub trait ScreenProjection {
    /// None when the point has no on-screen projection.
    fn to_screen(&self, world: Vec3) -> Option<Vec2>;
}

/// Drawing surface for markers. The overlay computes parameters; how the
/// pixels reach the screen is the host's concern.
pub trait MarkerSurface {
    fn draw_marker(&mut self, screen: Vec2, dimensions: Vec2, rotation: f32, color: Rgba);
}

/// Ties the tracking and render tasks together over shared state. Both run
/// cooperatively on one logical thread: `update` every tick (polling at its
/// own cadence), `render` every frame. Only the tracker writes the
/// maneuver/distance/freeze fields; `render` only reads them, so readers
/// never observe a torn value.
pub struct NavOverlay {
    pub tracker: NavigationTracker,
    config: NavConfig,
}

impl NavOverlay {
    pub fn new(config: NavConfig) -> Self {
        Self {
            tracker: NavigationTracker::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The slow task: advance timers and poll the directions oracle when
    /// due.
    pub fn update(
        &mut self,
        elapsed: f32,
        pose: &Pose,
        destinations: &dyn DestinationSource,
        oracle: &dyn DirectionsOracle,
    ) {
        self.tracker
            .update(elapsed, pose, destinations, oracle, &self.config);
    }

    /// The fast task: project the current guide path and draw it. Returns
    /// the number of markers drawn.
    pub fn render(
        &self,
        pose: &Pose,
        camera: &CameraState,
        ground: &GroundSampler,
        screen: &dyn ScreenProjection,
        surface: &mut dyn MarkerSurface,
    ) -> usize {
        let path = project(
            pose,
            self.tracker.turn(),
            self.tracker.distance_to_turn(),
            self.tracker.frozen(),
            ground,
            &self.config,
        );

        let mut drawn = 0;
        for point in &path {
            let sprite = marker_sprite(
                point,
                self.tracker.turn(),
                self.tracker.distance_to_turn(),
                camera,
                &self.config,
            );
            if let Some(position) = screen.to_screen(point.position) {
                surface.draw_marker(position, sprite.dimensions, sprite.rotation, sprite.color);
                drawn += 1;
            }
        }
        drawn
    }
}
