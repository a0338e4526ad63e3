// ABOUTME: Nervous system classifier mapping the stress x energy pair onto four quadrants
// ABOUTME: Strict greater-than thresholds favor the lower-intensity bucket at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenWork Wellness Intelligence

use crate::config::intelligence::NervousSystemConfig;
use zenwork_core::models::{NervousSystem, NervousSystemState};

/// Table-driven stress x energy quadrant lookup
pub struct NervousSystemClassifier;

impl NervousSystemClassifier {
    /// Quadrant for a (stress, energy) score pair
    #[must_use]
    pub fn classify(
        stress_score: f64,
        energy_score: f64,
        config: &NervousSystemConfig,
    ) -> NervousSystemState {
        let high_stress = stress_score > config.high_stress_threshold;
        let high_energy = energy_score > config.high_energy_threshold;

        match (high_stress, high_energy) {
            (true, true) => NervousSystemState::Activated,
            (true, false) => NervousSystemState::Overdrive,
            (false, true) => NervousSystemState::Flow,
            (false, false) => NervousSystemState::Recharge,
        }
    }

    /// Quadrant with its label and description
    #[must_use]
    pub fn describe(
        stress_score: f64,
        energy_score: f64,
        config: &NervousSystemConfig,
    ) -> NervousSystem {
        NervousSystem::from(Self::classify(stress_score, energy_score, config))
    }
}
