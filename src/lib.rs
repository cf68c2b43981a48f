/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # mie-rs
//!
//! Light scattering and absorption by homogeneous spheres (Mie theory),
//! following the Bohren & Huffman BHMIE algorithm.
//!
//! Given a grain radius, one or more photon energies or wavelengths, and the
//! complex refractive index of the grain, the crate computes the scattering,
//! extinction, absorption and backscattering efficiencies, the asymmetry
//! parameter, and optionally the differential scattering cross-section.
//!
//! ```no_run
//! use mie_rs::composition::Drude;
//! use mie_rs::scattering::{MieCalculator, ScatteringRequest};
//! use mie_rs::utils::WavelengthUnit;
//!
//! let request = ScatteringRequest::with_model(0.1, vec![0.5, 1.0, 2.0], WavelengthUnit::Kev, &Drude::default())
//!     .with_angles(vec![10.0, 100.0, 1000.0]);
//!
//! let mut mie = MieCalculator::new();
//! let qsca = mie.qsca(&request).unwrap();
//! let diff = mie.diff(&request).unwrap();
//! ```

pub mod composition;
pub mod scattering;
pub mod utils;

pub use scattering::{compute, MieCalculator, MieError, ScatteringRequest, ScatteringResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
