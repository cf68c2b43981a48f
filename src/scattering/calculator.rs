/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Memoizing front end for the Mie engine
//!
//! A grain population typically asks the same particle for several
//! quantities in a row (Qsca, then Qext, then the angular pattern). The
//! calculator keeps the last request and its result so those follow-up
//! accessors do not rerun the series. The memo holds one entry; any request
//! that differs from it replaces it.

use super::config::MieConfig;
use super::engine::compute_request;
use super::errors::Result;
use super::request::ScatteringRequest;
use super::result::ScatteringResult;
use log::debug;
use ndarray::Array1;

/// Mie calculator with a single-slot result memo
#[derive(Debug, Clone, Default)]
pub struct MieCalculator {
    config: MieConfig,
    last: Option<(ScatteringRequest, ScatteringResult)>,
}

impl MieCalculator {
    /// Citation for the algorithm
    pub const CITATION: &'static str = "Mie scattering solution";

    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration
    pub fn with_config(config: MieConfig) -> Self {
        Self { config, last: None }
    }

    /// The configuration used for every calculation
    pub fn config(&self) -> &MieConfig {
        &self.config
    }

    /// Compute the result for `request`, reusing the memo when it matches
    pub fn calculate(&mut self, request: &ScatteringRequest) -> Result<&ScatteringResult> {
        let entry = match self.last.take() {
            Some(entry) if entry.0 == *request => {
                debug!("Mie memo hit for a={} um", request.radius());
                entry
            }
            _ => {
                debug!("Mie memo miss for a={} um", request.radius());
                let result = compute_request(request, &self.config)?;
                (request.clone(), result)
            }
        };
        Ok(&self.last.insert(entry).1)
    }

    /// Whether the memo currently holds the result for `request`
    pub fn is_cached(&self, request: &ScatteringRequest) -> bool {
        matches!(&self.last, Some((cached, _)) if cached == request)
    }

    /// The most recent result, if any
    pub fn last_result(&self) -> Option<&ScatteringResult> {
        self.last.as_ref().map(|(_, result)| result)
    }

    /// Drop the memoized result
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Scattering efficiency per wavelength
    pub fn qsca(&mut self, request: &ScatteringRequest) -> Result<Array1<f64>> {
        Ok(self.calculate(request)?.qsca.clone())
    }

    /// Extinction efficiency per wavelength
    pub fn qext(&mut self, request: &ScatteringRequest) -> Result<Array1<f64>> {
        Ok(self.calculate(request)?.qext.clone())
    }

    /// Absorption efficiency per wavelength
    pub fn qabs(&mut self, request: &ScatteringRequest) -> Result<Array1<f64>> {
        Ok(self.calculate(request)?.qabs())
    }

    /// Backscattering efficiency per wavelength
    pub fn qback(&mut self, request: &ScatteringRequest) -> Result<Array1<f64>> {
        Ok(self.calculate(request)?.qback.clone())
    }

    /// Asymmetry parameter per wavelength
    pub fn gsca(&mut self, request: &ScatteringRequest) -> Result<Array1<f64>> {
        Ok(self.calculate(request)?.gsca.clone())
    }

    /// Differential cross-section, `None` when the request has no angles
    pub fn diff(&mut self, request: &ScatteringRequest) -> Result<Option<Array1<f64>>> {
        Ok(self.calculate(request)?.diff.clone())
    }
}
