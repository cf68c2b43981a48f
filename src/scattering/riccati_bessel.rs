/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Riccati-Bessel functions and Mie coefficients
//!
//! psi_n(x) = x j_n(x) and chi_n(x) = -x y_n(x) are generated by upward
//! recurrence from their n = -1 and n = 0 values; xi_n = psi_n - i chi_n.
//! Together with the logarithmic derivative D_n(mx) they give the external
//! field coefficients a_n and b_n.

use super::config::DEFAULT_MAX_TERMS;
use super::errors::{MieError, Result};
use super::log_derivative::log_derivative;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Riccati-Bessel state holding orders n-1 and n-2
#[derive(Debug, Clone, Copy)]
pub(crate) struct RiccatiBessel {
    x: f64,
    psi0: f64,
    psi1: f64,
    chi0: f64,
    chi1: f64,
    xi1: Complex64,
}

/// Riccati-Bessel values at the current order n
#[derive(Debug, Clone, Copy)]
pub(crate) struct RiccatiTerm {
    pub psi: f64,
    pub chi: f64,
    pub xi: Complex64,
}

impl RiccatiBessel {
    /// Seed the recurrence at real argument `x`
    pub fn new(x: f64) -> Self {
        let (sin, cos) = x.sin_cos();
        Self {
            x,
            psi0: cos,
            psi1: sin,
            chi0: -sin,
            chi1: cos,
            xi1: Complex64::new(sin, -cos),
        }
    }

    /// Values at order `n`, given the state holds orders n-1 and n-2
    pub fn term(&self, n: usize) -> RiccatiTerm {
        let f = (2 * n - 1) as f64 / self.x;
        let psi = f * self.psi1 - self.psi0;
        let chi = f * self.chi1 - self.chi0;
        RiccatiTerm {
            psi,
            chi,
            xi: Complex64::new(psi, -chi),
        }
    }

    /// Shift the state up one order
    pub fn advance(&mut self, term: &RiccatiTerm) {
        self.psi0 = self.psi1;
        self.psi1 = term.psi;
        self.chi0 = self.chi1;
        self.chi1 = term.chi;
        self.xi1 = Complex64::new(self.psi1, -self.chi1);
    }
}

/// Mie coefficients a_n and b_n for one term of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MieCoefficients {
    /// Electric multipole coefficient a_n
    pub a: Complex64,
    /// Magnetic multipole coefficient b_n
    pub b: Complex64,
}

impl MieCoefficients {
    /// Form a_n and b_n from D_n(mx) and the Riccati-Bessel values
    ///
    /// `state` must still hold orders n-1 and n-2, i.e. `advance` has not yet
    /// been called with `term`.
    pub(crate) fn from_recurrence(
        d_n: Complex64,
        m: Complex64,
        n: usize,
        state: &RiccatiBessel,
        term: &RiccatiTerm,
    ) -> Self {
        let n_over_x = n as f64 / state.x;

        let da = d_n / m + n_over_x;
        let a = (da * term.psi - state.psi1) / (da * term.xi - state.xi1);

        let db = m * d_n + n_over_x;
        let b = (db * term.psi - state.psi1) / (db * term.xi - state.xi1);

        Self { a, b }
    }

    /// Contribution of this term to the sum behind Qsca
    pub fn scattering_term(&self, n: usize) -> f64 {
        (2 * n + 1) as f64 * (self.a.norm_sqr() + self.b.norm_sqr())
    }

    /// Contribution of this term to the sum behind g = <cos(theta)>
    ///
    /// The cross term couples this term with the previous one, so the caller
    /// hands in the coefficients of term n-1 (none for n = 1).
    pub fn asymmetry_term(&self, n: usize, previous: Option<&MieCoefficients>) -> f64 {
        let en = n as f64;
        let mut g = (2.0 * en + 1.0) / (en * (en + 1.0)) * (self.a * self.b.conj()).re;
        if let Some(prev) = previous {
            g += (en - 1.0) * (en + 1.0) / en
                * ((prev.a * self.a.conj()).re + (prev.b * self.b.conj()).re);
        }
        g
    }
}

/// Number of series terms for size parameter `x`
///
/// The series is cut after x + 4 x^(1/3) + 2 terms (Wiscombe's criterion as
/// used by Bohren & Huffman).
pub fn series_length(x: f64) -> f64 {
    x + 4.0 * x.cbrt() + 2.0
}

/// Smallest size parameter the upward chi recurrence resolves
///
/// Below this chi_n overflows its precision within the first few orders and
/// the efficiencies drift away from the Rayleigh law.
pub const MIN_SIZE_PARAMETER: f64 = 1.0e-6;

/// Extra buffer height above the larger of the series cut-off and |mx|
pub(crate) const BUFFER_MARGIN: usize = 15;

/// Reason `x` cannot be used as a size parameter, if any
pub(crate) fn invalid_size_parameter(x: f64) -> Option<String> {
    if !x.is_finite() || x <= 0.0 {
        Some(format!("size parameter must be positive and finite, got {}", x))
    } else if x < MIN_SIZE_PARAMETER {
        Some(format!(
            "size parameter {} is below the supported minimum {}",
            x, MIN_SIZE_PARAMETER
        ))
    } else {
        None
    }
}

/// Height of the logarithmic-derivative buffer for one sphere
///
/// Kept in floating point so that oversized spheres can be rejected before
/// any conversion to an index.
pub(crate) fn buffer_height(x: f64, m: Complex64) -> f64 {
    series_length(x).max((m * x).norm()).floor() + BUFFER_MARGIN as f64
}

/// Convert a buffer height to a term count no larger than `max_terms`
pub(crate) fn checked_width(height: f64, max_terms: usize) -> Result<usize> {
    if !height.is_finite() || height > max_terms as f64 {
        let required = if height.is_finite() {
            height as usize
        } else {
            usize::MAX
        };
        return Err(MieError::NumericalLimit {
            required,
            limit: max_terms,
        });
    }
    Ok(height as usize)
}

/// Mie coefficients a_n, b_n for n = 1 up to the series cut-off
///
/// # Arguments
///
/// * `x` - Size parameter 2 pi a / lambda
/// * `m` - Refractive index of the sphere relative to the medium
///
/// # Returns
///
/// The coefficients in order, element 0 holding n = 1. Spheres needing more
/// than [`DEFAULT_MAX_TERMS`] terms give [`MieError::NumericalLimit`].
pub fn mie_coefficients(x: f64, m: Complex64) -> Result<Vec<MieCoefficients>> {
    if let Some(reason) = invalid_size_parameter(x) {
        return Err(MieError::InvalidInput(reason));
    }
    if !m.is_finite() {
        return Err(MieError::InvalidInput(format!(
            "refractive index must be finite, got {}",
            m
        )));
    }

    let nmx = checked_width(buffer_height(x, m), DEFAULT_MAX_TERMS)?;
    let nstop = series_length(x) as usize;

    let d = log_derivative(m * x, nmx);
    let mut state = RiccatiBessel::new(x);
    let mut coefficients = Vec::with_capacity(nstop);
    for n in 1..=nstop {
        let term = state.term(n);
        coefficients.push(MieCoefficients::from_recurrence(d[n], m, n, &state, &term));
        state.advance(&term);
    }
    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_orders_match_closed_form() {
        let x = 3.7_f64;
        let mut state = RiccatiBessel::new(x);

        let t1 = state.term(1);
        assert_relative_eq!(t1.psi, x.sin() / x - x.cos(), max_relative = 1e-12);
        assert_relative_eq!(t1.chi, x.cos() / x + x.sin(), max_relative = 1e-12);
        state.advance(&t1);

        // psi_2 = (3/x^2 - 1) sin x - 3 cos x / x
        let t2 = state.term(2);
        let psi2 = (3.0 / (x * x) - 1.0) * x.sin() - 3.0 * x.cos() / x;
        assert_relative_eq!(t2.psi, psi2, max_relative = 1e-12);
        assert_relative_eq!(t2.xi.re, t2.psi);
        assert_relative_eq!(t2.xi.im, -t2.chi);
    }

    #[test]
    fn test_series_length() {
        assert_relative_eq!(series_length(8.0), 8.0 + 8.0 + 2.0, max_relative = 1e-12);
        let coefficients = mie_coefficients(8.0, Complex64::new(1.33, 0.0)).unwrap();
        assert_eq!(coefficients.len(), 18);
    }

    #[test]
    fn test_rayleigh_limit_of_a1() {
        // For x << 1, a_1 -> -(2i/3) x^3 (m^2 - 1)/(m^2 + 2)
        let x = 1e-3;
        let m = Complex64::new(1.5, 0.1);
        let coefficients = mie_coefficients(x, m).unwrap();
        let m2 = m * m;
        let expected = Complex64::new(0.0, -2.0 / 3.0) * x.powi(3) * (m2 - 1.0) / (m2 + 2.0);
        assert_relative_eq!(coefficients[0].a.re, expected.re, max_relative = 1e-3);
        assert_relative_eq!(coefficients[0].a.im, expected.im, max_relative = 1e-3);
        // b_1 is two orders of x smaller
        assert!(coefficients[0].b.norm() < 1e-4 * coefficients[0].a.norm());
    }

    #[test]
    fn test_nonabsorbing_coefficients_on_unit_circle() {
        // For real m, a_n = (1 - e^{i phi}) / 2 lies on the circle |a - 1/2| = 1/2
        let coefficients = mie_coefficients(5.0, Complex64::new(1.5, 0.0)).unwrap();
        for c in &coefficients {
            assert_relative_eq!((c.a - 0.5).norm(), 0.5, epsilon = 1e-10);
            assert_relative_eq!((c.b - 0.5).norm(), 0.5, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_invalid_size_parameter() {
        let m = Complex64::new(1.5, 0.0);
        assert!(mie_coefficients(0.0, m).is_err());
        assert!(mie_coefficients(f64::INFINITY, m).is_err());
        assert!(mie_coefficients(1.0, Complex64::new(f64::NAN, 0.0)).is_err());
        assert!(matches!(
            mie_coefficients(1e-8, m),
            Err(MieError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_oversized_sphere_hits_term_ceiling() {
        let m = Complex64::new(1.5, 0.0);
        for x in [1.0e6, 1.0e25, f64::MAX] {
            match mie_coefficients(x, m) {
                Err(MieError::NumericalLimit { required, limit }) => {
                    assert_eq!(limit, DEFAULT_MAX_TERMS);
                    assert!(required > limit);
                }
                other => panic!("expected a numerical limit error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_checked_width() {
        assert_eq!(checked_width(33.0, 100).unwrap(), 33);
        assert_eq!(checked_width(100.0, 100).unwrap(), 100);
        assert!(checked_width(101.0, 100).is_err());
        assert!(checked_width(f64::INFINITY, 100).is_err());
        assert!(checked_width(f64::NAN, 100).is_err());
        assert_eq!(buffer_height(8.0, Complex64::new(3.0, 1.0)), 40.0);
    }
}
