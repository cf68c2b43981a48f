/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Drude approximation for the X-ray index of refraction
//!
//! At X-ray energies well above the absorption edges the grain material
//! behaves like a free-electron gas. With roughly one electron per two nucleons
//! the real part of the index deviates from unity by
//!
//! m - 1 = rho / (2 m_p) * r_e / (2 pi) * lambda^2
//!
//! and absorption is neglected.
//!
//! # Reference
//! Bohren & Huffman, *Absorption and Scattering of Light by Small Particles* (1983).

use super::errors::{CompositionError, Result};
use super::RefractiveIndex;
use crate::utils::constants::{ELECTRON_RADIUS, HC_KEV_CM, PROTON_MASS};
use crate::utils::{angstrom_to_kev, WavelengthUnit};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default grain density in g cm^-3
const DEFAULT_DENSITY: f64 = 3.0;

/// Drude-approximation refractive index for a grain of given density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drude {
    /// Grain density in g cm^-3
    rho: f64,
}

impl Default for Drude {
    fn default() -> Self {
        Self {
            rho: DEFAULT_DENSITY,
        }
    }
}

impl Drude {
    /// Citation for the approximation
    pub const CITATION: &'static str = "Using the Drude approximation.\nBohren, C. F. & Huffman, D. R., 1983, Absorption and Scattering of Light by Small Particles (New York: Wiley)";

    /// Create a Drude model for a grain density in g cm^-3
    pub fn new(rho: f64) -> Result<Self> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(CompositionError::InvalidParameter(format!(
                "grain density must be positive and finite, got {}",
                rho
            )));
        }
        Ok(Self { rho })
    }

    /// Grain density in g cm^-3
    pub fn density(&self) -> f64 {
        self.rho
    }

    /// The deviation of the real index from unity, m - 1
    pub fn index_decrement(&self, lam: f64, unit: WavelengthUnit) -> f64 {
        let energy = match unit {
            WavelengthUnit::Kev => lam,
            WavelengthUnit::Angstrom => angstrom_to_kev(lam),
        };
        let lam_cm = HC_KEV_CM / energy;
        self.rho / (2.0 * PROTON_MASS) * ELECTRON_RADIUS / (2.0 * PI) * lam_cm * lam_cm
    }
}

impl RefractiveIndex for Drude {
    fn real_part(&self, lam: f64, unit: WavelengthUnit) -> f64 {
        self.index_decrement(lam, unit) + 1.0
    }

    fn imaginary_part(&self, _lam: f64, _unit: WavelengthUnit) -> f64 {
        0.0
    }
}
