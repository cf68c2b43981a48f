/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Refractive-index models
//!
//! The scattering engine only needs a complex index of refraction at each
//! wavelength. Anything that can provide one implements [`RefractiveIndex`].
//! The imaginary part follows the absorption-positive convention.

mod drude;
pub mod errors;

pub use drude::Drude;
pub use errors::{CompositionError, Result};

use crate::utils::WavelengthUnit;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A source of complex refractive indices as a function of wavelength
pub trait RefractiveIndex {
    /// Real part of the index of refraction at `lam` (expressed in `unit`)
    fn real_part(&self, lam: f64, unit: WavelengthUnit) -> f64;

    /// Imaginary part of the index of refraction at `lam` (expressed in `unit`)
    fn imaginary_part(&self, lam: f64, unit: WavelengthUnit) -> f64;

    /// Complex index of refraction at `lam`
    fn refractive_index(&self, lam: f64, unit: WavelengthUnit) -> Complex64 {
        Complex64::new(self.real_part(lam, unit), self.imaginary_part(lam, unit))
    }
}

/// Wavelength-independent refractive index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantIndex(pub Complex64);

impl ConstantIndex {
    /// Create a constant index from its real and imaginary parts
    pub fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }
}

impl From<Complex64> for ConstantIndex {
    fn from(index: Complex64) -> Self {
        Self(index)
    }
}

impl RefractiveIndex for ConstantIndex {
    fn real_part(&self, _lam: f64, _unit: WavelengthUnit) -> f64 {
        self.0.re
    }

    fn imaginary_part(&self, _lam: f64, _unit: WavelengthUnit) -> f64 {
        self.0.im
    }

    fn refractive_index(&self, _lam: f64, _unit: WavelengthUnit) -> Complex64 {
        self.0
    }
}
