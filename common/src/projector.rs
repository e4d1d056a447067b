// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::config::NavConfig;
use crate::fade;
use crate::ground::GroundSampler;
use crate::guide::{GuidePath, GuidePoint, MAX_GUIDE_POINTS};
use crate::heading::Heading;
use crate::pose::Pose;
use crate::turn::Turn;
use glam::Vec3;

/// project synthesizes the guide path for one render tick.
///
/// The turn is None while no destination is active or while the oracle
/// reports an invalid code; both suppress the path entirely, as does the
/// tracker's freeze window after a maneuver flip.
///
/// The total deflection is spread evenly across the point cap and only
/// starts bending within the lead window before the turn, so the curve is a
/// constant-cost approximation rather than road geometry; it is not
/// guaranteed to reach the target heading at the turn point.
pub fn project(
    pose: &Pose,
    turn: Option<Turn>,
    distance_to_turn: f32,
    frozen: bool,
    ground: &GroundSampler,
    config: &NavConfig,
) -> GuidePath {
    let mut path = GuidePath::new();
    let turn = match turn {
        Some(turn) if !frozen => turn,
        _ => return path,
    };

    let mut heading = pose.heading;
    if turn == Turn::WrongWay {
        // Guidance points back the way the agent came.
        heading = heading.reversed();
    }

    // A turn past the render range is not visualized yet: run straight.
    let turn_visible = distance_to_turn <= config.max_render_distance;
    let total_deflection = if turn_visible {
        turn.deflection_degrees()
    } else {
        0.0
    };
    let per_step = Heading::from_degrees(total_deflection / MAX_GUIDE_POINTS as f32);

    let mut current = pose.position;
    for i in 1..=MAX_GUIDE_POINTS {
        let step = if i == 1 {
            config.min_distance
        } else {
            config.spacing
        };
        let cumulative = config.min_distance + (i - 1) as f32 * config.spacing;

        // Curvature begins only within the lead window before the turn.
        if turn_visible && cumulative >= distance_to_turn - config.turn_lead {
            heading += per_step;
        }

        let direction = heading.to_vec();
        let stepped = Vec3::new(
            current.x + direction.x * step,
            current.y + direction.y * step,
            current.z,
        );
        let snapped = Vec3::new(stepped.x, stepped.y, ground.snap(stepped));

        let distance = snapped.distance(pose.position);
        if distance > config.max_render_distance {
            // Truncate; later points would only be further out.
            break;
        }

        path.push(GuidePoint {
            position: snapped + Vec3::Z * config.ground_offset,
            heading,
            opacity: fade::opacity(distance, config),
            distance,
        });
        current = snapped;
    }

    path
}
