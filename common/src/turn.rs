// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// The next maneuver reported by the directions oracle.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    enum_iterator::IntoEnumIterator,
)]
pub enum Turn {
    /// Recalculating or no data yet.
    Unknown = 0,
    WrongWay = 1,
    Reserved = 2,
    Left = 3,
    Right = 4,
    Straight = 5,
    SharpLeft = 6,
    SharpRight = 7,
}

impl Turn {
    /// from_code converts a raw oracle code, returning None outside [0, 7].
    pub fn from_code(code: i32) -> Option<Self> {
        Self::iter().find(|turn| *turn as i32 == code)
    }

    /// iter returns an iterator that visits all maneuvers.
    pub fn iter() -> impl Iterator<Item = Self> {
        use enum_iterator::IntoEnumIterator;
        Self::into_enum_iter()
    }

    /// Total heading change spread across the guide path for this maneuver.
    /// Positive bears left.
    pub const fn deflection_degrees(self) -> f32 {
        match self {
            Self::WrongWay => 180.0,
            Self::Left => 30.0,
            Self::Right => -30.0,
            Self::SharpLeft => 50.0,
            Self::SharpRight => -50.0,
            Self::Unknown | Self::Reserved | Self::Straight => 0.0,
        }
    }

    /// Whether this maneuver participates in distance-based urgency
    /// coloring. Straight-ahead and placeholder codes never do.
    pub fn is_maneuver(self) -> bool {
        !matches!(self, Self::Unknown | Self::Reserved | Self::Straight)
    }
}
