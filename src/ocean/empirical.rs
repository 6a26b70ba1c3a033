//! Empirical one-dimensional frequency spectra.

use ndarray::{Array1, ArrayView1};

use crate::error::{Error, Result};
use crate::math::{trapezoid, Real};
use crate::ocean::check_frequency_axis;

const GRAVITY: f64 = 9.807; // [m/s^2]

/// Representing a spectral density function of frequency.
///
/// This is only the non-directional component of the sea state; sampled
/// densities are relative until [`frequency_spectrum`] rescales them against
/// the target significant height.
pub trait Spectrum<T: Real>: Sync {
    /// Target significant wave height Hs [m].
    fn significant_height(&self) -> T;

    /// Parameter checks, surfaced before any sampling happens.
    fn validate(&self) -> Result<()>;

    /// Unnormalized energy density at frequency `f` [Hz].
    fn evaluate(&self, f: T) -> T;
}

/// Joint North Sea Wave Observation Project (JONSWAP) spectrum [Hasselmann73],
/// parameterized by sea state (Hs, Tp) instead of wind speed and fetch.
pub struct SpectrumJONSWAP<T: Real> {
    pub significant_height: T, // Hs [m]
    pub peak_period: T,        // Tp [s]
    pub gamma: T,              // peak enhancement, typically 1..7
}

impl<T: Real> SpectrumJONSWAP<T> {
    pub fn peak_frequency(&self) -> T {
        T::one() / self.peak_period
    }
}

impl<T: Real> Spectrum<T> for SpectrumJONSWAP<T> {
    fn significant_height(&self) -> T {
        self.significant_height
    }

    fn validate(&self) -> Result<()> {
        if !(self.significant_height > T::zero()) || !self.significant_height.is_finite() {
            return Err(Error::InvalidParameter {
                name: "significant_height",
                reason: format!("{:?} must be finite and > 0", self.significant_height),
            });
        }
        if !(self.peak_period > T::zero()) || !self.peak_period.is_finite() {
            return Err(Error::InvalidParameter {
                name: "peak_period",
                reason: format!("{:?} must be finite and > 0", self.peak_period),
            });
        }
        if !(self.gamma > T::zero()) || !self.gamma.is_finite() {
            return Err(Error::InvalidParameter {
                name: "gamma",
                reason: format!("{:?} must be finite and > 0", self.gamma),
            });
        }
        Ok(())
    }

    fn evaluate(&self, f: T) -> T {
        if f < T::default_epsilon() {
            return T::zero();
        }

        let fp = self.peak_frequency();
        // Peak enhancement decays with width 0.07 fp below and 0.08 fp above
        // the peak.
        let sigma = T::new(if f <= fp { 0.07 } else { 0.08 });
        let r = (-(f - fp).powi(2) / (T::new(2.0) * (sigma * fp).powi(2))).exp();

        let g = T::new(GRAVITY);
        let two_pi = T::new(2.0 * std::f64::consts::PI);

        // Pierson-Moskowitz base shape times the enhancement factor.
        (g.powi(2) * two_pi.powi(-4) / (fp * f.powi(4)))
            * (-(f / fp).powi(-4)).exp()
            * self.gamma.powf(r)
    }
}

/// Samples `spectrum` over the frequency axis and rescales so the discrete
/// zeroth moment reproduces the target significant height (Hs = 4·sqrt(m0)).
pub fn frequency_spectrum<S, T>(f: ArrayView1<T>, spectrum: &S) -> Result<Array1<T>>
where
    S: Spectrum<T>,
    T: Real,
{
    spectrum.validate()?;
    check_frequency_axis(f)?;

    let raw = f.mapv(|sample| spectrum.evaluate(sample));
    let m0 = trapezoid(raw.view(), f);
    if !(m0 > T::zero()) || !m0.is_finite() {
        return Err(Error::NumericDegeneracy {
            context: "frequency spectrum",
            reason: format!(
                "zeroth moment {:?} cannot normalize; the axis may not bracket the peak",
                m0
            ),
        });
    }

    let hs = spectrum.significant_height();
    let scale = hs * hs / (T::new(16.0) * m0);
    Ok(raw.mapv(|density| density * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::frequency_axis;
    use ndarray::Array1;

    fn jonswap(hs: f64, tp: f64, gamma: f64) -> SpectrumJONSWAP<f64> {
        SpectrumJONSWAP {
            significant_height: hs,
            peak_period: tp,
            gamma,
        }
    }

    fn argmax(values: &Array1<f64>) -> usize {
        let mut best = 0;
        for (i, &v) in values.iter().enumerate() {
            if v > values[best] {
                best = i;
            }
        }
        best
    }

    #[test]
    fn zeroth_moment_reproduces_significant_height() {
        let f = frequency_axis(0.001f64, 5.0).unwrap();
        for &(hs, tp, gamma) in &[(1.5, 10.0, 3.3), (0.5, 15.0, 1.0), (4.0, 8.0, 7.0)] {
            let energy = frequency_spectrum(f.view(), &jonswap(hs, tp, gamma)).unwrap();
            let m0 = trapezoid(energy.view(), f.view());
            assert!(
                (4.0 * m0.sqrt() - hs).abs() < 1e-9,
                "Hs {} not recovered, got {}",
                hs,
                4.0 * m0.sqrt()
            );
        }
    }

    #[test]
    fn density_peaks_at_peak_frequency() {
        let f = frequency_axis(0.001f64, 1.0).unwrap();
        let energy = frequency_spectrum(f.view(), &jonswap(1.5, 10.0, 3.3)).unwrap();
        let peak = argmax(&energy);
        assert!((f[peak] - 0.1).abs() < 0.0015, "peak at {}", f[peak]);
    }

    #[test]
    fn output_is_non_negative_and_finite() {
        let f = frequency_axis(0.01f64, 2.0).unwrap();
        let energy = frequency_spectrum(f.view(), &jonswap(2.0, 6.0, 3.3)).unwrap();
        assert!(energy.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let f = frequency_axis(0.01f64, 1.0).unwrap();
        for spectrum in [
            jonswap(1.5, 0.0, 3.3),
            jonswap(1.5, -10.0, 3.3),
            jonswap(0.0, 10.0, 3.3),
            jonswap(-1.0, 10.0, 3.3),
            jonswap(1.5, 10.0, 0.0),
        ] {
            assert!(matches!(
                frequency_spectrum(f.view(), &spectrum),
                Err(Error::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn axis_missing_the_peak_reports_degeneracy() {
        // Far below fp = 0.1 Hz the exp(-(f/fp)^-4) tail underflows to zero
        // at every sample, so the zeroth moment cannot normalize.
        let f = frequency_axis(0.0001f64, 0.001).unwrap();
        assert!(matches!(
            frequency_spectrum(f.view(), &jonswap(1.5, 10.0, 3.3)),
            Err(Error::NumericDegeneracy { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_axes() {
        let spectrum = jonswap(1.5, 10.0, 3.3);
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            frequency_spectrum(empty.view(), &spectrum),
            Err(Error::InvalidParameter { .. })
        ));

        let with_zero = Array1::from_vec(vec![0.0, 0.1, 0.2]);
        assert!(matches!(
            frequency_spectrum(with_zero.view(), &spectrum),
            Err(Error::InvalidParameter { .. })
        ));

        let decreasing = Array1::from_vec(vec![0.3, 0.2, 0.1]);
        assert!(matches!(
            frequency_spectrum(decreasing.view(), &spectrum),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
