/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Logarithmic derivative D_n(mx) by downward recurrence
//!
//! D_n(y) = psi_n'(y) / psi_n(y) for the complex argument y = m x. Upward
//! recurrence is unstable for absorbing grains, so the buffer is seeded with
//! zero at `nmx` (well above the last term the series needs) and filled
//! downward.

use ndarray::Array1;
use num_complex::Complex64;

/// Build the logarithmic-derivative buffer for argument `y`
///
/// # Arguments
///
/// * `y` - Complex argument m x
/// * `nmx` - Index of the zero seed; must exceed the last term of the series
///
/// # Returns
///
/// A buffer of length `nmx + 1`. Entries 1 through `nmx - 1` hold D_n(y);
/// entry 0 is unused and left at zero.
pub(crate) fn log_derivative(y: Complex64, nmx: usize) -> Array1<Complex64> {
    let mut d = Array1::<Complex64>::zeros(nmx + 1);
    for n in (1..nmx).rev() {
        let en = (n + 1) as f64 / y;
        d[n] = en - 1.0 / (d[n + 1] + en);
    }
    d
}
