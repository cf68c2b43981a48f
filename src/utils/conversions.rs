/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit conversion utilities

use super::constants;
use super::errors::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a wavelength value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WavelengthUnit {
    /// Photon energy in keV
    #[default]
    #[serde(rename = "kev")]
    Kev,
    /// Wavelength in Angstroms
    #[serde(rename = "angs")]
    Angstrom,
}

impl WavelengthUnit {
    /// Short tag used in configuration and log output
    pub fn tag(&self) -> &'static str {
        match self {
            WavelengthUnit::Kev => "kev",
            WavelengthUnit::Angstrom => "angs",
        }
    }
}

impl fmt::Display for WavelengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WavelengthUnit {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kev" => Ok(WavelengthUnit::Kev),
            "angs" | "angstrom" | "angstroms" => Ok(WavelengthUnit::Angstrom),
            _ => Err(UtilsError::UnknownUnit(s.to_string())),
        }
    }
}

/// Convert a wavelength or photon energy to a wavelength in centimeters
///
/// # Arguments
///
/// * `lam` - Photon energy (keV) or wavelength (Angstrom), depending on `unit`
/// * `unit` - The unit `lam` is expressed in
///
/// # Returns
///
/// The wavelength in cm
pub fn wavelength_cm(lam: f64, unit: WavelengthUnit) -> f64 {
    match unit {
        WavelengthUnit::Kev => constants::HC_KEV_CM / lam,
        WavelengthUnit::Angstrom => constants::ANGSTROM_TO_CM * lam,
    }
}

/// Convert photon energy in keV to wavelength in Angstroms
pub fn kev_to_angstrom(kev: f64) -> f64 {
    constants::HC_KEV_ANGSTROM / kev
}

/// Convert wavelength in Angstroms to photon energy in keV
pub fn angstrom_to_kev(angstrom: f64) -> f64 {
    constants::HC_KEV_ANGSTROM / angstrom
}

/// Convert microns to centimeters
pub fn micron_to_cm(micron: f64) -> f64 {
    micron * constants::MICRON_TO_CM
}

/// Convert arcseconds to radians
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec * constants::ARCSEC_TO_RAD
}

/// Convert radians to arcseconds
pub fn rad_to_arcsec(rad: f64) -> f64 {
    rad / constants::ARCSEC_TO_RAD
}
