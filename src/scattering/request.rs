/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Scattering requests
//!
//! A request bundles one grain radius with one or more wavelengths, the
//! complex refractive index at each of them, and optionally a list of
//! scattering angles. Requests are plain data; validation happens when the
//! engine turns them into per-wavelength lanes.

use super::engine::Lane;
use super::errors::{MieError, Result};
use super::riccati_bessel::invalid_size_parameter;
use crate::composition::RefractiveIndex;
use crate::utils::{arcsec_to_rad, micron_to_cm, wavelength_cm, WavelengthUnit};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inputs for a single Mie calculation
///
/// Every wavelength must give a size parameter 2 pi a / lambda of at least
/// [`MIN_SIZE_PARAMETER`](super::MIN_SIZE_PARAMETER); smaller
/// grains are rejected because the Riccati-Bessel recurrence no longer
/// resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatteringRequest {
    /// Grain radius in microns
    radius: f64,
    /// Photon energies or wavelengths, see `unit`
    wavelengths: Vec<f64>,
    unit: WavelengthUnit,
    /// One index shared by every wavelength, or one per wavelength
    refractive_index: Vec<Complex64>,
    /// Scattering angles in arcseconds
    angles: Option<Vec<f64>>,
}

impl ScatteringRequest {
    /// Create a request with one refractive index shared by all wavelengths
    ///
    /// # Arguments
    ///
    /// * `radius` - Grain radius in microns
    /// * `wavelengths` - Photon energies (keV) or wavelengths (Angstrom)
    /// * `unit` - Unit of `wavelengths`
    /// * `refractive_index` - Complex index of refraction of the grain
    pub fn new(
        radius: f64,
        wavelengths: impl Into<Vec<f64>>,
        unit: WavelengthUnit,
        refractive_index: Complex64,
    ) -> Self {
        Self {
            radius,
            wavelengths: wavelengths.into(),
            unit,
            refractive_index: vec![refractive_index],
            angles: None,
        }
    }

    /// Create a request whose indices come from a refractive-index model
    ///
    /// The model is evaluated once per wavelength, here, before any
    /// recurrence runs.
    pub fn with_model<M: RefractiveIndex + ?Sized>(
        radius: f64,
        wavelengths: impl Into<Vec<f64>>,
        unit: WavelengthUnit,
        model: &M,
    ) -> Self {
        let wavelengths = wavelengths.into();
        let refractive_index = wavelengths
            .iter()
            .map(|&lam| model.refractive_index(lam, unit))
            .collect();
        Self {
            radius,
            wavelengths,
            unit,
            refractive_index,
            angles: None,
        }
    }

    /// Create a request from a radius array, as handed over by a grain population
    ///
    /// The engine works on exactly one radius per call; anything else is
    /// rejected.
    pub fn from_radii<M: RefractiveIndex + ?Sized>(
        radii: &[f64],
        wavelengths: impl Into<Vec<f64>>,
        unit: WavelengthUnit,
        model: &M,
    ) -> Result<Self> {
        match radii {
            [radius] => Ok(Self::with_model(*radius, wavelengths, unit, model)),
            _ => Err(MieError::InvalidInput(format!(
                "exactly one grain radius per calculation is supported, got {}",
                radii.len()
            ))),
        }
    }

    /// Replace the refractive indices with explicit per-wavelength values
    pub fn with_indices(mut self, refractive_index: impl Into<Vec<Complex64>>) -> Self {
        self.refractive_index = refractive_index.into();
        self
    }

    /// Request the angular pattern at the given scattering angles (arcsec)
    ///
    /// With a single wavelength every angle is evaluated at that wavelength.
    /// With several wavelengths the angles are paired element-wise with them.
    pub fn with_angles(mut self, angles: impl Into<Vec<f64>>) -> Self {
        self.angles = Some(angles.into());
        self
    }

    /// Grain radius in microns
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Photon energies or wavelengths, in [`Self::unit`]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Unit of the wavelength values
    pub fn unit(&self) -> WavelengthUnit {
        self.unit
    }

    /// The refractive indices as supplied (one shared value or one per wavelength)
    pub fn refractive_indices(&self) -> &[Complex64] {
        &self.refractive_index
    }

    /// Requested scattering angles in arcseconds
    pub fn angles(&self) -> Option<&[f64]> {
        self.angles.as_deref()
    }

    /// Number of wavelengths in the request
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Whether the request holds no wavelengths
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Refractive index used at wavelength `i`
    pub fn index_at(&self, i: usize) -> Option<Complex64> {
        match self.refractive_index.as_slice() {
            [shared] if i < self.wavelengths.len() => Some(*shared),
            indices => indices.get(i).copied(),
        }
    }

    /// Check the request shape and values without computing anything
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MieError::InvalidInput(format!(
                "grain radius must be positive and finite, got {}",
                self.radius
            )));
        }

        if self.wavelengths.is_empty() {
            return Err(MieError::InvalidInput(
                "at least one wavelength is required".to_string(),
            ));
        }

        let n_lam = self.wavelengths.len();
        let n_index = self.refractive_index.len();
        if n_index != 1 && n_index != n_lam {
            return Err(MieError::InvalidInput(format!(
                "{} refractive indices supplied for {} wavelengths",
                n_index, n_lam
            )));
        }

        if let Some(m) = self
            .refractive_index
            .iter()
            .find(|m| !m.is_finite() || m.im < 0.0)
        {
            return Err(MieError::InvalidInput(format!(
                "refractive index must be finite with non-negative imaginary part, got {}",
                m
            )));
        }

        if let Some(angles) = &self.angles {
            if n_lam > 1 && angles.len() != n_lam {
                return Err(MieError::InvalidInput(format!(
                    "{} angles supplied for {} wavelengths; paired angles need one per wavelength",
                    angles.len(),
                    n_lam
                )));
            }
            if angles.iter().any(|theta| !theta.is_finite()) {
                return Err(MieError::InvalidInput(
                    "scattering angles must be finite".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Size parameter x = 2 pi a / lambda for every wavelength
    pub fn size_parameters(&self) -> Vec<f64> {
        let radius_cm = micron_to_cm(self.radius);
        self.wavelengths
            .iter()
            .map(|&lam| 2.0 * PI * radius_cm / wavelength_cm(lam, self.unit))
            .collect()
    }

    /// Split the request into independent per-wavelength lanes
    pub(crate) fn lanes(&self) -> Result<Vec<Lane>> {
        self.validate()?;

        let angles_rad: Option<Vec<f64>> = self
            .angles
            .as_ref()
            .map(|angles| angles.iter().map(|&theta| arcsec_to_rad(theta)).collect());

        self.size_parameters()
            .into_iter()
            .enumerate()
            .map(|(i, x)| {
                if let Some(reason) = invalid_size_parameter(x) {
                    return Err(MieError::InvalidInput(format!(
                        "{} at {} {}",
                        reason, self.wavelengths[i], self.unit
                    )));
                }

                let m = self.index_at(i).ok_or_else(|| {
                    MieError::InvalidInput(format!("no refractive index for wavelength {}", i))
                })?;

                let angles = match &angles_rad {
                    None => Vec::new(),
                    Some(all) if self.wavelengths.len() == 1 => all.clone(),
                    Some(all) => vec![all[i]],
                };

                Ok(Lane { x, m, angles })
            })
            .collect()
    }
}
