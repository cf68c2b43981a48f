/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! The Mie term loop and its reduction to efficiency factors
//!
//! Every wavelength of a request becomes an independent lane: it builds its
//! own logarithmic-derivative buffer and runs its own term loop, stopping at
//! its own cut-off. Lanes share nothing except the buffer width `nmx`, which
//! is sized for the most demanding wavelength of the batch.

use super::angular::AngularState;
use super::config::MieConfig;
use super::errors::Result;
use super::log_derivative::log_derivative;
use super::request::ScatteringRequest;
use super::result::{ScatteringAmplitude, ScatteringResult};
use super::riccati_bessel::{
    buffer_height, checked_width, series_length, MieCoefficients, RiccatiBessel, BUFFER_MARGIN,
};
use log::{debug, trace, warn};
use ndarray::Array1;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Largest physical scattering angle, 180 degrees in arcseconds
const MAX_SCATTERING_ANGLE: f64 = 180.0 * 3600.0;

/// One wavelength of a request
#[derive(Debug, Clone)]
pub(crate) struct Lane {
    /// Size parameter
    pub x: f64,
    /// Relative refractive index
    pub m: Complex64,
    /// Scattering angles in radians evaluated on this lane
    pub angles: Vec<f64>,
}

/// Reduced output of one lane
#[derive(Debug, Clone)]
pub(crate) struct LaneOutput {
    pub qsca: f64,
    pub qext: f64,
    pub qback: f64,
    pub gsca: f64,
    pub s1: Vec<Complex64>,
    pub s2: Vec<Complex64>,
}

impl Lane {
    /// Last term of the series for this lane
    fn nstop(&self) -> usize {
        series_length(self.x) as usize
    }

    /// Buffer height this lane alone would need
    fn required_height(&self) -> f64 {
        buffer_height(self.x, self.m)
    }

    /// Run the term loop and reduce to efficiencies
    ///
    /// `nmx` must be at least [`Lane::required_height`].
    fn run(&self, nmx: usize) -> LaneOutput {
        let x = self.x;
        let nstop = self.nstop();
        trace!("lane x={} m={} stops after {} terms", x, self.m, nstop);

        let d = log_derivative(self.m * x, nmx);
        let mut riccati = RiccatiBessel::new(x);

        let mut forward = AngularState::forward();
        let mut backward = AngularState::backward();
        let mut angular: Vec<AngularState> =
            self.angles.iter().map(|&theta| AngularState::new(theta)).collect();

        let mut qsca = 0.0;
        let mut gsca = 0.0;
        let mut previous: Option<MieCoefficients> = None;
        let mut parity = -1.0;

        for n in 1..=nstop {
            let en = n as f64;
            let term = riccati.term(n);
            let coefficients = MieCoefficients::from_recurrence(d[n], self.m, n, &riccati, &term);

            qsca += coefficients.scattering_term(n);
            gsca += coefficients.asymmetry_term(n, previous.as_ref());

            parity = -parity;
            let weight = (2.0 * en + 1.0) / (en * (en + 1.0));
            forward.accumulate(n, weight, parity, &coefficients);
            backward.accumulate(n, weight, parity, &coefficients);
            for state in angular.iter_mut() {
                state.accumulate(n, weight, parity, &coefficients);
            }

            riccati.advance(&term);
            previous = Some(coefficients);
        }

        // m == 1 scatters nothing and leaves g undefined
        let gsca = if qsca > 0.0 { 2.0 * gsca / qsca } else { 0.0 };
        let x2 = x * x;

        LaneOutput {
            qsca: 2.0 / x2 * qsca,
            qext: 4.0 / x2 * forward.s1.re,
            qback: (backward.s1.norm() / x).powi(2) / PI,
            gsca,
            s1: angular.iter().map(|state| state.s1).collect(),
            s2: angular.iter().map(|state| state.s2).collect(),
        }
    }
}

/// Shared buffer width for a batch of lanes, capped at `max_terms`
fn buffer_width(lanes: &[Lane], max_terms: usize) -> Result<usize> {
    let height = lanes
        .iter()
        .map(Lane::required_height)
        .fold(BUFFER_MARGIN as f64, |widest, height| {
            if height.is_nan() || height > widest {
                height
            } else {
                widest
            }
        });
    checked_width(height, max_terms)
}

/// Run a full Mie calculation for a request
///
/// # Arguments
///
/// * `request` - Radius, wavelengths, refractive indices and optional angles
/// * `config` - Term ceiling and parallelism settings
///
/// # Returns
///
/// Efficiencies for every wavelength and, if angles were requested, the
/// differential cross-section at every angle
pub fn compute_request(
    request: &ScatteringRequest,
    config: &MieConfig,
) -> Result<ScatteringResult> {
    let lanes = request.lanes()?;

    let nmx = buffer_width(&lanes, config.max_terms)?;

    debug!(
        "Mie: a={} um, {} wavelength(s) in {}, buffer width {}",
        request.radius(),
        lanes.len(),
        request.unit(),
        nmx
    );

    let outputs: Vec<LaneOutput> = if config.run_parallel(lanes.len()) {
        lanes.par_iter().map(|lane| lane.run(nmx)).collect()
    } else {
        lanes.iter().map(|lane| lane.run(nmx)).collect()
    };

    let mut result = ScatteringResult {
        size_parameter: lanes.iter().map(|lane| lane.x).collect(),
        qsca: outputs.iter().map(|out| out.qsca).collect(),
        qext: outputs.iter().map(|out| out.qext).collect(),
        qback: outputs.iter().map(|out| out.qback).collect(),
        gsca: outputs.iter().map(|out| out.gsca).collect(),
        diff: None,
        amplitudes: None,
    };

    if let Some(angles) = request.angles() {
        let (diff, amplitudes) = angular_pattern(angles, &lanes, &outputs);
        result.diff = Some(diff);
        result.amplitudes = Some(amplitudes);
    }

    Ok(result)
}

/// Gather the per-lane amplitudes in request order and form dsigma/dOmega
fn angular_pattern(
    angles: &[f64],
    lanes: &[Lane],
    outputs: &[LaneOutput],
) -> (Array1<f64>, Vec<ScatteringAmplitude>) {
    let per_angle = lanes.iter().zip(outputs).flat_map(|(lane, out)| {
        out.s1
            .iter()
            .zip(&out.s2)
            .map(move |(&s1, &s2)| (lane.x, s1, s2))
    });

    let mut out_of_range = 0;
    let mut diff = Vec::with_capacity(angles.len());
    let mut amplitudes = Vec::with_capacity(angles.len());
    for (&theta, (x, s1, s2)) in angles.iter().zip(per_angle) {
        let amplitude = if theta > MAX_SCATTERING_ANGLE {
            out_of_range += 1;
            ScatteringAmplitude {
                theta,
                s1: Complex64::new(0.0, 0.0),
                s2: Complex64::new(0.0, 0.0),
            }
        } else {
            ScatteringAmplitude { theta, s1, s2 }
        };
        diff.push(amplitude.intensity() / (PI * x * x));
        amplitudes.push(amplitude);
    }

    if out_of_range > 0 {
        warn!(
            "{} scattering angle(s) above 180 degrees set to zero intensity",
            out_of_range
        );
    }

    (Array1::from(diff), amplitudes)
}
