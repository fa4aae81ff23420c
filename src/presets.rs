// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::sync::OnceLock;

use log::debug;
use thiserror::Error;

use crate::config::ConstraintsConfig;
use crate::constraints::VideoConstraints;

static PRESETS: OnceLock<Presets> = OnceLock::new();

#[derive(Error, Debug)]
pub enum PresetsError {
    #[error("constraint presets were already initialized")]
    AlreadyInitialized,
}

/// The named constraints receivers signal for common endpoint states, computed once
/// from configuration and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presets {
    pinned_endpoint: VideoConstraints,
    selected_endpoint: VideoConstraints,
    empty: VideoConstraints,
}

impl Presets {
    /// Builds a preset set from `config`, without touching process-wide state.
    pub fn from_config(config: &ConstraintsConfig) -> Self {
        Self {
            pinned_endpoint: VideoConstraints::new(config.thumbnail_max_height),
            selected_endpoint: VideoConstraints::with_preferred(
                720,
                config.onstage_preferred_height,
                config.onstage_preferred_fps,
            ),
            empty: VideoConstraints::new(-1),
        }
    }

    /// Installs the process-wide presets from `config`.
    ///
    /// Succeeds at most once per process; later calls fail and leave the installed
    /// values untouched.
    pub fn init(config: &ConstraintsConfig) -> Result<(), PresetsError> {
        let presets = Self::from_config(config);
        PRESETS
            .set(presets)
            .map_err(|_| PresetsError::AlreadyInitialized)?;
        debug!(
            "installed video constraint presets: pinned {}, selected {}",
            presets.pinned_endpoint, presets.selected_endpoint
        );
        Ok(())
    }

    /// The process-wide presets.
    ///
    /// If [`Presets::init`] was never called, presets built from
    /// [`ConstraintsConfig::default`] are installed on first access.
    pub fn get() -> &'static Presets {
        PRESETS.get_or_init(|| Self::from_config(&ConstraintsConfig::default()))
    }

    /// A low-resolution floor for an endpoint kept visible while off-stage.
    ///
    /// Pinned endpoints are the ones a receiver always wants forwarded, in low
    /// definition when off-stage. A selected endpoint can also be pinned; that sounds
    /// redundant next to its 720p constraint, but it is what keeps the endpoint in
    /// the forwarded set once it goes off-stage. By asking for the thumbnail height
    /// the receiver gets these prioritized during the bandwidth allocation step.
    pub fn pinned_endpoint(&self) -> VideoConstraints {
        self.pinned_endpoint
    }

    /// The high-resolution constraint for an on-stage endpoint.
    ///
    /// Carries an eager secondary target the allocator reaches for before fully
    /// satisfying other receivers, bandwidth permitting.
    pub fn selected_endpoint(&self) -> VideoConstraints {
        self.selected_endpoint
    }

    /// The neutral constraint: everything unset.
    pub fn empty(&self) -> VideoConstraints {
        self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_from_config() {
        let config = ConstraintsConfig {
            thumbnail_max_height: 240,
            onstage_preferred_height: 540,
            onstage_preferred_fps: 24.0,
        };
        let presets = Presets::from_config(&config);

        assert_eq!(presets.pinned_endpoint().ideal_height(), 240);
        assert_eq!(presets.pinned_endpoint().preferred_height(), -1);
        assert_eq!(presets.pinned_endpoint().preferred_fps(), -1.0);

        assert_eq!(presets.selected_endpoint().ideal_height(), 720);
        assert_eq!(presets.selected_endpoint().preferred_height(), 540);
        assert_eq!(presets.selected_endpoint().preferred_fps(), 24.0);

        assert_eq!(presets.empty().ideal_height(), -1);
        assert_eq!(presets.empty().preferred_height(), -1);
        assert_eq!(presets.empty().preferred_fps(), -1.0);
    }

    #[test]
    fn stock_preset_values() {
        let presets = Presets::from_config(&ConstraintsConfig::default());
        assert_eq!(presets.pinned_endpoint(), VideoConstraints::new(180));
        assert_eq!(presets.selected_endpoint().ideal_height(), 720);
        assert_eq!(presets.selected_endpoint().preferred_height(), 360);
        assert_eq!(presets.selected_endpoint().preferred_fps(), 30.0);
        assert_eq!(presets.empty(), VideoConstraints::default());
    }

    // The only test that touches process-wide state; everything else goes through
    // from_config so tests can run in parallel.
    #[test]
    fn process_wide_init_is_once() {
        let config = ConstraintsConfig {
            thumbnail_max_height: 216,
            onstage_preferred_height: 480,
            onstage_preferred_fps: 25.0,
        };
        Presets::init(&config).unwrap();

        assert!(matches!(
            Presets::init(&ConstraintsConfig::default()),
            Err(PresetsError::AlreadyInitialized)
        ));

        // Installed values survive the failed second init.
        let presets = Presets::get();
        assert_eq!(presets.pinned_endpoint().ideal_height(), 216);
        assert_eq!(presets.selected_endpoint().preferred_height(), 480);
        assert_eq!(presets.selected_endpoint().preferred_fps(), 25.0);
    }
}
