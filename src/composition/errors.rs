/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for refractive-index models

use thiserror::Error;

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, CompositionError>;

/// Errors raised while building a refractive-index model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    /// Model parameter outside its physical range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
