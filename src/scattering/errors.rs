/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the scattering engine

use thiserror::Error;

/// Result type for scattering calculations
pub type Result<T> = std::result::Result<T, MieError>;

/// Errors raised by the Mie engine
///
/// All errors are raised before the term loop starts, so a failed call never
/// leaves a partial result behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MieError {
    /// The request is malformed or describes an unphysical particle
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The series would need more terms than the configured ceiling
    #[error("Series needs {required} terms, exceeding the limit of {limit}")]
    NumericalLimit { required: usize, limit: usize },

    /// Propagation of error from a refractive-index model
    #[error("Composition error: {0}")]
    Composition(#[from] crate::composition::CompositionError),
}
