/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for the Mie engine

use serde::{Deserialize, Serialize};

/// Term ceiling for the recurrence buffers
///
/// Corresponds to |m|x of roughly 1.5e5, far beyond any grain the engine is
/// normally asked about.
pub const DEFAULT_MAX_TERMS: usize = 150_000;

/// Batches with at least this many wavelengths are spread over the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16;

/// Mie engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MieConfig {
    /// Largest recurrence buffer width a request may need
    pub max_terms: usize,
    /// Minimum number of wavelengths before lanes run in parallel
    pub parallel_threshold: usize,
}

impl Default for MieConfig {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MieConfig {
    /// Configuration that never fans out to the thread pool
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Whether a batch of `lanes` wavelengths should run in parallel
    pub fn run_parallel(&self, lanes: usize) -> bool {
        lanes > 1 && lanes >= self.parallel_threshold
    }
}
