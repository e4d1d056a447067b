// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::oracle::{DestinationSource, DirectionsOracle};
use crate::rate_limiter::RateLimiter;
use common::config::NavConfig;
use common::pose::Pose;
use common::turn::Turn;

/// Tracks the agent's active route: polls the directions oracle at a fixed
/// cadence, holds the maneuver and distance constant between polls, and
/// debounces maneuver flips with a short render freeze.
///
/// Single writer of the maneuver/distance/freeze fields; the render task
/// only reads them.
pub struct NavigationTracker {
    /// None while inactive or while the oracle reports an invalid code.
    turn: Option<Turn>,
    /// Meters, as of the last poll.
    distance_to_turn: f32,
    freeze_remaining: f32,
    tracking: bool,
    poll: RateLimiter,
}

impl NavigationTracker {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            turn: None,
            distance_to_turn: 0.0,
            freeze_remaining: 0.0,
            tracking: false,
            poll: RateLimiter::new(config.poll_period),
        }
    }

    /// The maneuver to project.
    pub fn turn(&self) -> Option<Turn> {
        self.turn
    }

    /// Meters to the next turn as of the last poll.
    pub fn distance_to_turn(&self) -> f32 {
        self.distance_to_turn
    }

    /// Whether rendering is currently suppressed to debounce a maneuver
    /// flip.
    pub fn frozen(&self) -> bool {
        self.freeze_remaining > 0.0
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Call every render tick; the oracle is only consulted once per poll
    /// period. The freeze countdown runs on tick time so a flip suppresses
    /// roughly freeze_duration worth of frames.
    pub fn update(
        &mut self,
        elapsed: f32,
        pose: &Pose,
        destinations: &dyn DestinationSource,
        oracle: &dyn DirectionsOracle,
        config: &NavConfig,
    ) {
        self.freeze_remaining = (self.freeze_remaining - elapsed).max(0.0);
        if !self.poll.update_ready(elapsed) {
            return;
        }

        let destination = match destinations.destination() {
            Some(destination) => destination,
            None => {
                if self.tracking {
                    log::debug!("destination cleared, tracker inactive");
                }
                self.clear();
                return;
            }
        };

        let query = oracle.directions(pose, destination);
        let turn = Turn::from_code(query.classification);
        if turn.is_none() {
            log::warn!(
                "oracle returned invalid maneuver code {}",
                query.classification
            );
        }
        if turn != self.turn {
            log::debug!("maneuver changed {:?} -> {:?}", self.turn, turn);
            self.freeze_remaining = config.freeze_duration;
        }
        self.tracking = true;
        self.turn = turn;
        self.distance_to_turn = query.raw_distance * config.oracle_distance_scale;
    }

    /// Forget the route. The projector emits nothing until a later poll
    /// finds a destination again.
    pub fn clear(&mut self) {
        self.turn = None;
        self.distance_to_turn = 0.0;
        self.freeze_remaining = 0.0;
        self.tracking = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::oracle::{DestinationSource, DirectionsOracle, OracleQuery};
    use crate::tracker::NavigationTracker;
    use common::config::NavConfig;
    use common::pose::Pose;
    use common::turn::Turn;
    use glam::Vec3;
    use std::cell::Cell;

    struct Destination(Option<Vec3>);

    impl DestinationSource for Destination {
        fn destination(&self) -> Option<Vec3> {
            self.0
        }
    }

    struct Oracle {
        classification: Cell<i32>,
        raw_distance: Cell<f32>,
        polls: Cell<u32>,
    }

    impl Oracle {
        fn new(classification: i32, raw_distance: f32) -> Self {
            Self {
                classification: Cell::new(classification),
                raw_distance: Cell::new(raw_distance),
                polls: Cell::new(0),
            }
        }
    }

    impl DirectionsOracle for Oracle {
        fn directions(&self, _pose: &Pose, _destination: Vec3) -> OracleQuery {
            self.polls.set(self.polls.get() + 1);
            OracleQuery {
                classification: self.classification.get(),
                raw_distance: self.raw_distance.get(),
            }
        }
    }

    fn marker() -> Destination {
        Destination(Some(Vec3::new(100.0, 200.0, 0.0)))
    }

    #[test]
    fn acquires_and_converts_units() {
        let config = NavConfig::default();
        let mut tracker = NavigationTracker::new(&config);
        assert!(!tracker.is_tracking());

        let oracle = Oracle::new(Turn::Right as i32, 500.0);
        tracker.update(0.0, &Pose::new(), &marker(), &oracle, &config);

        assert!(tracker.is_tracking());
        assert_eq!(tracker.turn(), Some(Turn::Right));
        assert_eq!(tracker.distance_to_turn(), 50.0);
    }

    #[test]
    fn poll_cadence_is_independent_of_tick_rate() {
        let config = NavConfig::default();
        let mut tracker = NavigationTracker::new(&config);
        let oracle = Oracle::new(Turn::Straight as i32, 100.0);
        let destination = marker();

        // Simulate one second of 60 Hz ticks; a 250 ms poll period allows
        // the initial poll plus four more.
        for _ in 0..60 {
            tracker.update(1.0 / 60.0, &Pose::new(), &destination, &oracle, &config);
        }
        assert_eq!(oracle.polls.get(), 5);
    }

    #[test]
    fn freeze_on_maneuver_change_only() {
        let config = NavConfig::default();
        let mut tracker = NavigationTracker::new(&config);
        let oracle = Oracle::new(Turn::Straight as i32, 800.0);
        let destination = marker();

        // Initial acquisition is a change from None and freezes briefly.
        tracker.update(0.0, &Pose::new(), &destination, &oracle, &config);
        assert!(tracker.frozen());

        // The freeze expires on tick time, long before the next poll.
        tracker.update(config.freeze_duration, &Pose::new(), &destination, &oracle, &config);
        assert!(!tracker.frozen());

        // Re-polling the same classification does not freeze.
        tracker.update(config.poll_period, &Pose::new(), &destination, &oracle, &config);
        assert!(!tracker.frozen());

        // A flip does.
        oracle.classification.set(Turn::SharpLeft as i32);
        tracker.update(config.poll_period, &Pose::new(), &destination, &oracle, &config);
        assert!(tracker.frozen());
        assert_eq!(tracker.turn(), Some(Turn::SharpLeft));
    }

    #[test]
    fn invalid_code_suppresses_turn_but_keeps_tracking() {
        let config = NavConfig::default();
        let mut tracker = NavigationTracker::new(&config);
        let oracle = Oracle::new(9, 100.0);
        tracker.update(0.0, &Pose::new(), &marker(), &oracle, &config);

        assert!(tracker.is_tracking());
        assert_eq!(tracker.turn(), None);
        assert_eq!(tracker.distance_to_turn(), 10.0);
    }

    #[test]
    fn destination_removal_resets() {
        let config = NavConfig::default();
        let mut tracker = NavigationTracker::new(&config);
        let oracle = Oracle::new(Turn::Left as i32, 300.0);
        tracker.update(0.0, &Pose::new(), &marker(), &oracle, &config);
        assert!(tracker.is_tracking());

        tracker.update(
            config.poll_period,
            &Pose::new(),
            &Destination(None),
            &oracle,
            &config,
        );
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.turn(), None);
        assert_eq!(tracker.distance_to_turn(), 0.0);
        assert!(!tracker.frozen());
    }
}
