// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use glam::Vec2;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A compass heading in degrees, normalized to [0, 360).
///
/// Stepping follows the host's screen convention: heading 0 advances +Y and
/// positive offsets bear toward the agent's left.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Heading(f32);

impl Heading {
    pub const ZERO: Self = Self(0.0);
    pub const HALF_TURN: Self = Self(180.0);

    pub fn new() -> Self {
        Self::ZERO
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    #[inline]
    pub fn to_degrees(self) -> f32 {
        self.0
    }

    pub fn from_radians(radians: f32) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Unit step in world X/Y for this heading.
    #[inline]
    pub fn to_vec(self) -> Vec2 {
        let (sin, cos) = self.to_radians().sin_cos();
        Vec2::new(-sin, cos)
    }

    /// The opposite heading.
    pub fn reversed(self) -> Self {
        self + Self::HALF_TURN
    }

    /// Shortest signed offset from other to self, in (-180, 180].
    pub fn signed_difference(self, other: Self) -> f32 {
        let difference = (self.0 - other.0).rem_euclid(360.0);
        if difference > 180.0 {
            difference - 360.0
        } else {
            difference
        }
    }

    pub fn lerp(self, other: Self, value: f32) -> Self {
        self + Self::from_degrees(other.signed_difference(self) * value)
    }
}

impl Add for Heading {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_degrees(self.0 + other.0)
    }
}

impl AddAssign for Heading {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Heading {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_degrees(self.0 - other.0)
    }
}

impl SubAssign for Heading {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Heading {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl Distribution<Heading> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        Heading::from_degrees(rng.gen::<f32>() * 360.0)
    }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} degrees", self.0)
    }
}

impl Serialize for Heading {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f32(self.0)
    }
}

impl<'de> Deserialize<'de> for Heading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(Self::from_degrees)
    }
}
