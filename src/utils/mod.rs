/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions for Mie calculations
//!
//! This module provides the physical constants and unit conversions shared by
//! the composition models and the scattering engine.

pub mod constants;
pub mod conversions;
pub mod errors;

pub use conversions::{
    angstrom_to_kev, arcsec_to_rad, kev_to_angstrom, micron_to_cm, rad_to_arcsec, wavelength_cm,
    WavelengthUnit,
};
pub use errors::{Result, UtilsError};
