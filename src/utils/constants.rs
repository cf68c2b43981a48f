/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in Mie calculations
//!
//! Lengths are CGS (centimeters) unless the name says otherwise.

/// Planck constant times the speed of light in keV cm
pub const HC_KEV_CM: f64 = 1.239_841_98e-7;

/// Planck constant times the speed of light in keV Angstrom
pub const HC_KEV_ANGSTROM: f64 = 12.398_419_8;

/// Conversion from Angstroms to centimeters
pub const ANGSTROM_TO_CM: f64 = 1.0e-8;

/// Conversion from microns to centimeters
pub const MICRON_TO_CM: f64 = 1.0e-4;

/// Conversion from arcseconds to radians
pub const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Proton mass in grams
pub const PROTON_MASS: f64 = 1.672_621_92e-24;

/// Classical electron radius in cm
pub const ELECTRON_RADIUS: f64 = 2.817_940_326_2e-13;
