/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Results of a Mie calculation

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Complex amplitude functions at one scattering angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatteringAmplitude {
    /// Scattering angle in arcseconds
    pub theta: f64,
    /// Perpendicular amplitude S1
    pub s1: Complex64,
    /// Parallel amplitude S2
    pub s2: Complex64,
}

impl ScatteringAmplitude {
    /// Unpolarized intensity (|S1|^2 + |S2|^2) / 2
    pub fn intensity(&self) -> f64 {
        0.5 * (self.s1.norm_sqr() + self.s2.norm_sqr())
    }
}

/// Efficiency factors at one wavelength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiencies {
    /// Scattering efficiency
    pub qsca: f64,
    /// Extinction efficiency
    pub qext: f64,
    /// Absorption efficiency, qext - qsca
    pub qabs: f64,
    /// Backscattering efficiency per steradian
    pub qback: f64,
    /// Asymmetry parameter <cos(theta)>
    pub gsca: f64,
}

/// Output of the Mie engine for one request
///
/// Per-wavelength arrays follow the order of the request's wavelengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatteringResult {
    /// Size parameter x = 2 pi a / lambda
    pub size_parameter: Array1<f64>,
    /// Scattering efficiency
    pub qsca: Array1<f64>,
    /// Extinction efficiency, from the forward-direction amplitude
    pub qext: Array1<f64>,
    /// Backscattering efficiency, |S1(180)|^2 / (pi x^2)
    pub qback: Array1<f64>,
    /// Asymmetry parameter <cos(theta)>
    pub gsca: Array1<f64>,
    /// Differential cross-section per steradian in units of the geometric
    /// cross-section, one value per requested angle
    ///
    /// With a single wavelength every entry belongs to that wavelength; with
    /// several wavelengths entry i belongs to wavelength i. Angles above 180
    /// degrees give zero.
    pub diff: Option<Array1<f64>>,
    /// Complex amplitudes behind `diff`, in the same order
    pub amplitudes: Option<Vec<ScatteringAmplitude>>,
}

impl ScatteringResult {
    /// Number of wavelengths
    pub fn len(&self) -> usize {
        self.qsca.len()
    }

    /// Whether the result holds no wavelengths
    pub fn is_empty(&self) -> bool {
        self.qsca.is_empty()
    }

    /// Absorption efficiency, qext - qsca
    pub fn qabs(&self) -> Array1<f64> {
        &self.qext - &self.qsca
    }

    /// All efficiency factors at wavelength `i`
    pub fn efficiencies(&self, i: usize) -> Option<Efficiencies> {
        if i >= self.len() {
            return None;
        }
        Some(Efficiencies {
            qsca: self.qsca[i],
            qext: self.qext[i],
            qabs: self.qext[i] - self.qsca[i],
            qback: self.qback[i],
            gsca: self.gsca[i],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> ScatteringResult {
        ScatteringResult {
            size_parameter: array![1.0, 2.0],
            qsca: array![0.5, 1.5],
            qext: array![0.75, 1.5],
            qback: array![0.1, 0.2],
            gsca: array![0.2, 0.4],
            diff: None,
            amplitudes: None,
        }
    }

    #[test]
    fn test_qabs_and_efficiencies() {
        let result = sample();
        assert_eq!(result.len(), 2);
        assert_eq!(result.qabs(), array![0.25, 0.0]);

        let eff = result.efficiencies(0).unwrap();
        assert_eq!(eff.qabs, 0.25);
        assert_eq!(eff.gsca, 0.2);
        assert!(result.efficiencies(2).is_none());
    }

    #[test]
    fn test_amplitude_intensity() {
        let amplitude = ScatteringAmplitude {
            theta: 0.0,
            s1: Complex64::new(3.0, 4.0),
            s2: Complex64::new(0.0, 1.0),
        };
        assert_eq!(amplitude.intensity(), 13.0);
    }

    #[test]
    fn test_result_serializes() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: ScatteringResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
