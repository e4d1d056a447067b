// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::camera::CameraState;
use crate::rgb::Rgba;
use common::config::NavConfig;
use common::guide::GuidePoint;
use common::range::map_ranges;
use common::turn::Turn;
use glam::Vec2;

/// Final draw parameters for one guide marker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerSprite {
    /// Screen dimensions; height already includes the camera flattening.
    pub dimensions: Vec2,
    /// Screen rotation in degrees, keeping the marker's world orientation
    /// fixed regardless of camera yaw.
    pub rotation: f32,
    pub color: Rgba,
}

/// A turn this close is drawn red.
const URGENT_DISTANCE: f32 = 10.0;
/// A turn this close is drawn yellow.
const APPROACH_DISTANCE: f32 = 30.0;
/// Markers shrink to this fraction of their base size at max render
/// distance.
const MIN_SIZE_SCALE: f32 = 0.6;

const URGENT_COLOR: Rgba = Rgba::opaque(224, 48, 48);
const APPROACH_COLOR: Rgba = Rgba::opaque(240, 208, 48);
const CALM_COLOR: Rgba = Rgba::opaque(64, 208, 96);

/// marker_sprite converts one guide point into draw parameters. Urgency
/// coloring applies only while the tracked maneuver is a real turn;
/// straight-ahead guidance stays calm however close the waypoint.
pub fn marker_sprite(
    point: &GuidePoint,
    turn: Option<Turn>,
    distance_to_turn: f32,
    camera: &CameraState,
    config: &NavConfig,
) -> MarkerSprite {
    let rotation = (point.heading - camera.heading).to_degrees();

    let size = config.marker_size
        * map_ranges(
            point.distance,
            0.0..config.max_render_distance,
            1.0..MIN_SIZE_SCALE,
            true,
        );
    let dimensions = Vec2::new(size, size * camera.flatten_factor());

    let color = match turn {
        Some(turn) if turn.is_maneuver() => {
            if distance_to_turn < URGENT_DISTANCE {
                URGENT_COLOR
            } else if distance_to_turn < APPROACH_DISTANCE {
                APPROACH_COLOR
            } else {
                CALM_COLOR
            }
        }
        _ => CALM_COLOR,
    };

    MarkerSprite {
        dimensions,
        rotation,
        color: color.with_alpha((point.opacity * 255.0) as u8),
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::CameraState;
    use crate::sprite::{
        marker_sprite, APPROACH_COLOR, CALM_COLOR, MIN_SIZE_SCALE, URGENT_COLOR,
    };
    use common::config::NavConfig;
    use common::guide::GuidePoint;
    use common::heading::Heading;
    use common::turn::Turn;
    use glam::Vec3;

    fn point(distance: f32, heading: Heading, opacity: f32) -> GuidePoint {
        GuidePoint {
            position: Vec3::ZERO,
            heading,
            opacity,
            distance,
        }
    }

    #[test]
    fn rotation_is_world_fixed() {
        let config = NavConfig::default();
        let camera = CameraState::new(Heading::from_degrees(90.0), -45.0);
        let sprite = marker_sprite(
            &point(10.0, Heading::from_degrees(90.0), 1.0),
            Some(Turn::Straight),
            100.0,
            &camera,
            &config,
        );
        assert_eq!(sprite.rotation, 0.0);

        let sprite = marker_sprite(
            &point(10.0, Heading::from_degrees(120.0), 1.0),
            Some(Turn::Straight),
            100.0,
            &camera,
            &config,
        );
        assert_eq!(sprite.rotation, 30.0);
    }

    #[test]
    fn shrinks_with_distance() {
        let config = NavConfig::default();
        let camera = CameraState::new(Heading::ZERO, -90.0);
        let near = marker_sprite(
            &point(0.0, Heading::ZERO, 1.0),
            Some(Turn::Straight),
            100.0,
            &camera,
            &config,
        );
        assert_eq!(near.dimensions.x, config.marker_size);

        let far = marker_sprite(
            &point(config.max_render_distance, Heading::ZERO, 0.0),
            Some(Turn::Straight),
            100.0,
            &camera,
            &config,
        );
        assert_eq!(far.dimensions.x, config.marker_size * MIN_SIZE_SCALE);
    }

    #[test]
    fn flattening_only_affects_height() {
        let config = NavConfig::default();
        let oblique = CameraState::new(Heading::ZERO, -45.0);
        let sprite = marker_sprite(
            &point(0.0, Heading::ZERO, 1.0),
            None,
            0.0,
            &oblique,
            &config,
        );
        assert_eq!(sprite.dimensions.x, config.marker_size);
        assert_eq!(sprite.dimensions.y, config.marker_size * 0.5);
    }

    #[test]
    fn urgency_colors_gate_on_maneuver() {
        let config = NavConfig::default();
        let camera = CameraState::default();
        let p = point(5.0, Heading::ZERO, 1.0);

        let close_turn = marker_sprite(&p, Some(Turn::Right), 5.0, &camera, &config);
        assert_eq!(close_turn.color, URGENT_COLOR.with_alpha(255));

        let approaching = marker_sprite(&p, Some(Turn::Right), 20.0, &camera, &config);
        assert_eq!(approaching.color, APPROACH_COLOR.with_alpha(255));

        let distant = marker_sprite(&p, Some(Turn::Right), 45.0, &camera, &config);
        assert_eq!(distant.color, CALM_COLOR.with_alpha(255));

        // Straight-ahead guidance never goes urgent.
        let straight = marker_sprite(&p, Some(Turn::Straight), 5.0, &camera, &config);
        assert_eq!(straight.color, CALM_COLOR.with_alpha(255));

        let none = marker_sprite(&p, None, 5.0, &camera, &config);
        assert_eq!(none.color, CALM_COLOR.with_alpha(255));
    }

    #[test]
    fn alpha_scales_opacity() {
        let config = NavConfig::default();
        let camera = CameraState::default();
        let sprite = marker_sprite(
            &point(40.0, Heading::ZERO, 0.5),
            Some(Turn::Left),
            100.0,
            &camera,
            &config,
        );
        assert_eq!(sprite.color.a, 127);
    }
}
