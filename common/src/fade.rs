// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::config::NavConfig;
use crate::range::map_ranges;

/// opacity returns marker visibility for a distance from the agent: fully
/// opaque through fade_start, fading linearly to zero at fade_end.
pub fn opacity(distance: f32, config: &NavConfig) -> f32 {
    map_ranges(distance, config.fade_start..config.fade_end, 1.0..0.0, true)
}
