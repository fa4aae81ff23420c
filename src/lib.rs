// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub mod config;
pub mod constraints;
pub mod presets;

pub use config::ConstraintsConfig;
pub use constraints::VideoConstraints;
pub use presets::Presets;
pub use presets::PresetsError;
