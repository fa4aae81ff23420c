// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

/// The ideal video constraints a receiver expresses for a video source.
///
/// The bandwidth allocator reads these to decide which encoding of the source to
/// forward: it tries to get close to `ideal_height` when bandwidth is available and
/// never needs to exceed it. A value of `-1` in any field means the field is unset.
///
/// The type carries no endpoint or track identifier; associating a constraint with a
/// particular source is up to the caller (typically a map from endpoint id to
/// `VideoConstraints`).
#[derive(Debug, Clone, Copy)]
pub struct VideoConstraints {
    /// The ideal height of the constrained source. We try to forward an encoding that
    /// matches this resolution as closely as possible, if bandwidth is available.
    ideal_height: i32,

    /// A height the allocator should reach eagerly, at or below `ideal_height`, even
    /// before fully satisfying other receivers.
    preferred_height: i32,

    /// The frame rate targeted together with `preferred_height`.
    preferred_fps: f64,
}

impl VideoConstraints {
    /// A constraint with the given ideal height and no preferred values.
    ///
    /// No validation is performed; any height is stored verbatim. Range enforcement,
    /// if wanted, belongs to the signaling layer that produces these values.
    pub fn new(ideal_height: i32) -> Self {
        Self::with_preferred(ideal_height, -1, -1.0)
    }

    /// A constraint with all three fields set verbatim.
    pub fn with_preferred(ideal_height: i32, preferred_height: i32, preferred_fps: f64) -> Self {
        Self {
            ideal_height,
            preferred_height,
            preferred_fps,
        }
    }

    /// A global, endpoint-agnostic ceiling on allocation across all sources.
    ///
    /// This exists for tile view and low-bandwidth mode, where every source is
    /// nominally "selected" but capped: setting an ideal height as a global
    /// constraint tells the allocator to distribute bandwidth evenly across all
    /// participants, up to that height, instead of eagerly ramping selected
    /// endpoints.
    pub fn max_height(ideal_height: i32) -> Self {
        Self::new(ideal_height)
    }

    pub fn ideal_height(&self) -> i32 {
        self.ideal_height
    }

    pub fn preferred_height(&self) -> i32 {
        self.preferred_height
    }

    pub fn preferred_fps(&self) -> f64 {
        self.preferred_fps
    }
}

/// The empty constraint: everything unset.
impl Default for VideoConstraints {
    fn default() -> Self {
        Self::new(-1)
    }
}

// Identity is the ideal height alone. Two receivers asking for the same ceiling are
// interchangeable to the allocator, so the preferred fields stay out of equality and
// hashing. Collaborators key sets and maps on this behavior.
impl PartialEq for VideoConstraints {
    fn eq(&self, other: &Self) -> bool {
        self.ideal_height == other.ideal_height
    }
}

// Sound despite the f64 field: comparison never reads it.
impl Eq for VideoConstraints {}

impl Hash for VideoConstraints {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ideal_height.hash(state);
    }
}

impl fmt::Display for VideoConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ideal_height < 0 {
            return write!(f, "unconstrained");
        }
        write!(f, "{}p", self.ideal_height)?;
        if self.preferred_height >= 0 {
            write!(f, " (preferred {}p", self.preferred_height)?;
            if self.preferred_fps >= 0.0 {
                write!(f, "@{}fps", self.preferred_fps)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
