//! Superposition of directional wave spectra.

use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::math::Real;
use crate::ocean::empirical::{frequency_spectrum, Spectrum, SpectrumJONSWAP};
use crate::ocean::spreading::{directional_spreading, SpreadingModel};
use crate::ocean::{check_direction_axis, check_frequency_axis};

/// A single wave train (swell or wind sea) of a superposed sea state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveCondition<T: Real> {
    pub significant_height: T, // Hs [m]
    pub peak_period: T,        // Tp [s]
    pub peak_direction: T,     // [deg]
    pub directional_spread: T, // [deg]
    pub gamma: T,
    pub model: SpreadingModel,
}

impl<T: Real> WaveCondition<T> {
    pub fn spectrum(&self) -> SpectrumJONSWAP<T> {
        SpectrumJONSWAP {
            significant_height: self.significant_height,
            peak_period: self.peak_period,
            gamma: self.gamma,
        }
    }

    /// Checks every field of the record before any sampling happens.
    pub fn validate(&self) -> Result<()> {
        self.spectrum().validate()?;
        if !(self.directional_spread > T::zero()) || !self.directional_spread.is_finite() {
            return Err(Error::InvalidParameter {
                name: "directional_spread",
                reason: format!("{:?} must be finite and > 0", self.directional_spread),
            });
        }
        if !self.peak_direction.is_finite() {
            return Err(Error::InvalidParameter {
                name: "peak_direction",
                reason: format!("{:?} must be finite", self.peak_direction),
            });
        }
        Ok(())
    }
}

/// 2-D energy density field `[frequency][direction]` of the superposed
/// conditions [m²/Hz/rad].
///
/// Every condition contributes the outer product of its frequency spectrum
/// and its spreading density; contributions accumulate by addition, so the
/// double integral of the field recovers the summed Hs²/16 of all trains.
/// Conditions are evaluated in parallel; the reduction is commutative, so
/// ordering only matters up to float non-associativity. An empty condition
/// list yields a zero field.
pub fn directional_spectrum<T: Real>(
    f: ArrayView1<T>,
    dirs: ArrayView1<T>,
    conditions: &[WaveCondition<T>],
) -> Result<Array2<T>> {
    check_frequency_axis(f)?;
    check_direction_axis(dirs)?;

    let dim = (f.len(), dirs.len());
    conditions
        .par_iter()
        .map(|condition| condition_field(f, dirs, condition))
        .try_reduce(|| Array2::zeros(dim), |total, field| Ok(total + field))
}

fn condition_field<T: Real>(
    f: ArrayView1<T>,
    dirs: ArrayView1<T>,
    condition: &WaveCondition<T>,
) -> Result<Array2<T>> {
    debug!(
        hs = ?condition.significant_height,
        tp = ?condition.peak_period,
        dirp = ?condition.peak_direction,
        spr = ?condition.directional_spread,
        model = condition.model.as_str(),
        "sampling wave condition"
    );

    condition.validate()?;
    let energy = frequency_spectrum(f, &condition.spectrum())?;
    let spread = directional_spreading(
        dirs,
        condition.peak_direction,
        condition.directional_spread,
        condition.model,
    )?;
    Ok(outer(&energy, &spread))
}

fn outer<T: Real>(column: &Array1<T>, row: &Array1<T>) -> Array2<T> {
    Array2::from_shape_fn((column.len(), row.len()), |(i, j)| column[i] * row[j])
}
