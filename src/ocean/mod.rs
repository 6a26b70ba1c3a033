//! Parametric directional wave spectra.
//!
//! Reference:
//!     [Hasselmann73] K. Hasselmann et al., 1973,
//!                    Measurements of wind-wave growth and swell decay during
//!                    the Joint North Sea Wave Project (JONSWAP),
//!                    Ergänzungsheft zur Deutschen Hydrographischen
//!                    Zeitschrift, Reihe A(8), Nr. 12
//!     [Holthuijsen07] L. H. Holthuijsen, 2007,
//!                    Waves in Oceanic and Coastal Waters,
//!                    Cambridge University Press

pub mod directional;
pub mod empirical;
pub mod spreading;

pub use self::directional::{directional_spectrum, WaveCondition};
pub use self::empirical::{frequency_spectrum, Spectrum, SpectrumJONSWAP};
pub use self::spreading::{directional_spreading, SpreadingModel};

use crate::error::{Error, Result};
use crate::math::Real;
use ndarray::{Array1, ArrayView1};

/// Uniform frequency axis `df, 2·df, ..` up to `f_max` [Hz]; excludes zero.
///
/// `f_max` is taken as the nearest whole number of steps.
pub fn frequency_axis<T: Real>(df: T, f_max: T) -> Result<Array1<T>> {
    if !(df > T::zero()) || !df.is_finite() {
        return Err(Error::InvalidParameter {
            name: "df",
            reason: format!("step {:?} must be finite and > 0", df),
        });
    }
    if !(f_max >= df) || !f_max.is_finite() {
        return Err(Error::InvalidParameter {
            name: "f_max",
            reason: format!("upper bound {:?} must be finite and >= df", f_max),
        });
    }

    let steps = num::cast::<T, usize>((f_max / df).round()).ok_or_else(|| {
        Error::InvalidParameter {
            name: "f_max",
            reason: format!("axis length {:?} is not representable", f_max / df),
        }
    })?;
    Ok(Array1::from_shape_fn(steps, |i| df * T::new(i + 1)))
}

/// Direction axis `0, step, ..` covering a full circle, open at 360° [deg].
pub fn direction_axis<T: Real>(step: T) -> Result<Array1<T>> {
    if !(step > T::zero()) || !step.is_finite() {
        return Err(Error::InvalidParameter {
            name: "step",
            reason: format!("step {:?} must be finite and > 0", step),
        });
    }

    let samples = num::cast::<T, usize>((T::new(360.0) / step).round()).unwrap_or(0);
    if samples < 3 {
        return Err(Error::InvalidParameter {
            name: "step",
            reason: format!("step {:?} leaves fewer than 3 direction samples", step),
        });
    }
    Ok(Array1::from_shape_fn(samples, |i| step * T::new(i)))
}

pub(crate) fn check_frequency_axis<T: Real>(f: ArrayView1<T>) -> Result<()> {
    if f.is_empty() {
        return Err(Error::InvalidParameter {
            name: "frequency axis",
            reason: "axis is empty".to_string(),
        });
    }
    for (i, &sample) in f.iter().enumerate() {
        if !sample.is_finite() || sample <= T::zero() {
            return Err(Error::InvalidParameter {
                name: "frequency axis",
                reason: format!("sample {} is {:?}, expected finite and > 0", i, sample),
            });
        }
        if i > 0 && sample <= f[i - 1] {
            return Err(Error::InvalidParameter {
                name: "frequency axis",
                reason: format!("sample {} breaks strict monotonicity", i),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_direction_axis<T: Real>(dirs: ArrayView1<T>) -> Result<()> {
    if dirs.len() < 3 {
        return Err(Error::InvalidParameter {
            name: "direction axis",
            reason: format!("{} samples, need at least 3", dirs.len()),
        });
    }
    for (i, &sample) in dirs.iter().enumerate() {
        if !sample.is_finite() {
            return Err(Error::InvalidParameter {
                name: "direction axis",
                reason: format!("sample {} is {:?}, expected finite", i, sample),
            });
        }
        if i > 0 && sample <= dirs[i - 1] {
            return Err(Error::InvalidParameter {
                name: "direction axis",
                reason: format!("sample {} breaks strict monotonicity", i),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_axis_excludes_zero_and_reaches_bound() {
        let f = frequency_axis(0.001f64, 1.0).unwrap();
        assert_eq!(f.len(), 1000);
        assert!((f[0] - 0.001).abs() < 1e-12);
        assert!((f[999] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn direction_axis_tiles_the_circle_open_at_360() {
        let dirs = direction_axis(5.0f64).unwrap();
        assert_eq!(dirs.len(), 72);
        assert_eq!(dirs[0], 0.0);
        assert!((dirs[71] - 355.0).abs() < 1e-12);
    }

    #[test]
    fn axis_builders_reject_bad_steps() {
        assert!(matches!(
            frequency_axis(0.0f64, 1.0),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            direction_axis(-5.0f64),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            direction_axis(180.0f64),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
