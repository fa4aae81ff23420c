// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// Configuration the constraint presets are materialized from.
///
/// These values come from whatever configuration layer embeds this crate; they are
/// injected rather than read from a global so preset construction stays testable with
/// arbitrary configurations. `Default` carries the stock deployment values.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintsConfig {
    /// Max height, in pixels, forwarded for thumbnail (pinned but off-stage)
    /// endpoints.
    pub thumbnail_max_height: i32,

    /// Height the allocator eagerly targets for on-stage endpoints.
    pub onstage_preferred_height: i32,

    /// Frame rate the allocator eagerly targets for on-stage endpoints.
    pub onstage_preferred_fps: f64,
}

impl Default for ConstraintsConfig {
    fn default() -> Self {
        Self {
            thumbnail_max_height: 180,
            onstage_preferred_height: 360,
            onstage_preferred_fps: 30.0,
        }
    }
}
