/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Mie scattering by homogeneous spheres
//!
//! This module implements the Bohren & Huffman solution (BHMIE) for a plane
//! wave scattered by a homogeneous, isotropic sphere. For each wavelength the
//! engine
//!
//! 1. builds the logarithmic derivative D_n(mx) by downward recurrence,
//! 2. generates the Riccati-Bessel functions of x by upward recurrence,
//! 3. forms the Mie coefficients a_n and b_n term by term, and
//! 4. sums them into Qsca, Qext, Qback, g and, on request, the amplitude
//!    functions S1 and S2 at arbitrary scattering angles.
//!
//! # Reference
//! Bohren & Huffman, *Absorption and Scattering of Light by Small Particles* (1983).

mod angular;
mod calculator;
mod config;
mod engine;
pub mod errors;
mod log_derivative;
mod request;
mod result;
mod riccati_bessel;

pub use calculator::MieCalculator;
pub use config::{MieConfig, DEFAULT_MAX_TERMS, DEFAULT_PARALLEL_THRESHOLD};
pub use engine::compute_request;
pub use errors::{MieError, Result};
pub use request::ScatteringRequest;
pub use result::{Efficiencies, ScatteringAmplitude, ScatteringResult};
pub use riccati_bessel::{mie_coefficients, series_length, MieCoefficients, MIN_SIZE_PARAMETER};

use crate::utils::WavelengthUnit;
use num_complex::Complex64;

/// Calculate Mie efficiencies for one grain radius
///
/// This is a high-level function that assembles a [`ScatteringRequest`] and
/// runs it with the default configuration.
///
/// # Arguments
///
/// * `radius` - Grain radius in microns
/// * `wavelengths` - Photon energies (keV) or wavelengths (Angstrom)
/// * `unit` - Unit of `wavelengths`
/// * `refractive_index` - One complex index for all wavelengths, or one per wavelength
/// * `angles` - Optional scattering angles in arcseconds
///
/// # Returns
///
/// A ScatteringResult with efficiencies and, if angles were given, the
/// differential cross-section. Size parameters below [`MIN_SIZE_PARAMETER`]
/// are rejected as invalid input, and grains needing more terms than the
/// default ceiling give [`MieError::NumericalLimit`].
pub fn compute(
    radius: f64,
    wavelengths: &[f64],
    unit: WavelengthUnit,
    refractive_index: &[Complex64],
    angles: Option<&[f64]>,
) -> Result<ScatteringResult> {
    let mut request = ScatteringRequest::new(radius, wavelengths, unit, Complex64::new(1.0, 0.0))
        .with_indices(refractive_index);
    if let Some(angles) = angles {
        request = request.with_angles(angles);
    }
    compute_request(&request, &MieConfig::default())
}
