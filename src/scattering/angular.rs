/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Angular part of the scattered field
//!
//! The amplitude functions S1 and S2 at each scattering angle are built term
//! by term from pi_n(cos theta) and tau_n(cos theta). Only |cos theta| enters
//! the pi/tau recursion; angles in the backward hemisphere reuse the
//! forward-hemisphere functions and pick up the parity (-1)^(n+1).

use super::riccati_bessel::MieCoefficients;
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, PI};

/// Per-angle recursion state and accumulated amplitudes
#[derive(Debug, Clone, Copy)]
pub(crate) struct AngularState {
    /// |cos(theta)|
    amu: f64,
    /// theta >= 90 degrees
    backward: bool,
    /// pi_{n-1}
    pi0: f64,
    /// pi_n
    pi1: f64,
    pub s1: Complex64,
    pub s2: Complex64,
}

impl AngularState {
    /// Start the recursion for scattering angle `theta` in radians
    pub fn new(theta: f64) -> Self {
        Self {
            amu: theta.cos().abs(),
            backward: theta >= FRAC_PI_2,
            pi0: 0.0,
            pi1: 1.0,
            s1: Complex64::new(0.0, 0.0),
            s2: Complex64::new(0.0, 0.0),
        }
    }

    /// Exact forward direction, theta = 0
    pub fn forward() -> Self {
        Self::new(0.0)
    }

    /// Exact backward direction, theta = 180 degrees
    pub fn backward() -> Self {
        Self::new(PI)
    }

    /// Add term `n` to S1 and S2 and advance pi to order n+1
    ///
    /// # Arguments
    ///
    /// * `n` - Term index, starting at 1
    /// * `weight` - (2n+1) / (n(n+1))
    /// * `parity` - +1 for odd n, -1 for even n
    /// * `coefficients` - a_n and b_n
    pub fn accumulate(
        &mut self,
        n: usize,
        weight: f64,
        parity: f64,
        coefficients: &MieCoefficients,
    ) {
        let en = n as f64;
        let MieCoefficients { a, b } = *coefficients;

        let pi = self.pi1;
        let tau = en * self.amu * pi - (en + 1.0) * self.pi0;

        if self.backward {
            self.s1 += weight * parity * (a * pi - b * tau);
            self.s2 += weight * parity * (b * pi - a * tau);
        } else {
            self.s1 += weight * (a * pi + b * tau);
            self.s2 += weight * (a * tau + b * pi);
        }

        self.pi1 = ((2.0 * en + 1.0) * self.amu * pi - (en + 1.0) * self.pi0) / en;
        self.pi0 = pi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_a() -> MieCoefficients {
        MieCoefficients {
            a: Complex64::new(1.0, 0.0),
            b: Complex64::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_pi_tau_follow_legendre_derivatives() {
        // pi_2(mu) = 3 mu, tau_2(mu) = 3 cos(2 theta)
        let theta: f64 = 0.6;
        let mu = theta.cos();
        let mut state = AngularState::new(theta);

        state.accumulate(1, 1.5, 1.0, &unit_a());
        assert_relative_eq!(state.pi1, 3.0 * mu, max_relative = 1e-12);

        // With a_2 = 1 and b_2 = 0, S1 picks up weight * pi_2 and S2 weight * tau_2
        let before = state;
        state.accumulate(2, 5.0 / 6.0, -1.0, &unit_a());
        assert_relative_eq!(
            (state.s1 - before.s1).re,
            5.0 / 6.0 * 3.0 * mu,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            (state.s2 - before.s2).re,
            5.0 / 6.0 * 3.0 * (2.0 * theta).cos(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_backward_branch_matches_direct_evaluation() {
        // pi_n(-mu) = (-1)^(n+1) pi_n(mu), tau_n(-mu) = (-1)^n tau_n(mu)
        let theta = 2.3;
        let mut state = AngularState::new(theta);
        assert!(state.backward);

        let coefficients = MieCoefficients {
            a: Complex64::new(0.3, 0.2),
            b: Complex64::new(-0.1, 0.4),
        };
        state.accumulate(1, 1.5, 1.0, &coefficients);

        // pi_1 = 1 and tau_1 = cos(theta) at any angle
        let mu = theta.cos();
        let expected_s1 = 1.5 * (coefficients.a + coefficients.b * mu);
        let expected_s2 = 1.5 * (coefficients.a * mu + coefficients.b);
        assert_relative_eq!(state.s1.re, expected_s1.re, max_relative = 1e-12);
        assert_relative_eq!(state.s1.im, expected_s1.im, max_relative = 1e-12);
        assert_relative_eq!(state.s2.re, expected_s2.re, max_relative = 1e-12);
        assert_relative_eq!(state.s2.im, expected_s2.im, max_relative = 1e-12);
    }

    #[test]
    fn test_canonical_directions() {
        let forward = AngularState::forward();
        assert!(!forward.backward);
        assert_relative_eq!(forward.amu, 1.0);

        let backward = AngularState::backward();
        assert!(backward.backward);
        assert_relative_eq!(backward.amu, 1.0);
    }
}
