//! Directional spreading functions.

use std::fmt;
use std::str::FromStr;

use ndarray::{s, Array1, ArrayView1};

use crate::error::{Error, Result};
use crate::math::{trapezoid, Real};
use crate::ocean::check_direction_axis;

/// Fraction of the directional density contained within ±spread/2 of the
/// peak direction; fixes the concentration of every kernel.
const SPREAD_FRACTION: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadingModel {
    /// Hyperbolic-secant-squared kernel.
    Sech2,
    /// Cosine-power kernel `cos((θ - θp)/2)^(2s)`.
    Cos2s,
}

impl SpreadingModel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sech2 => "sech2",
            Self::Cos2s => "cos2s",
        }
    }
}

impl fmt::Display for SpreadingModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpreadingModel {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self> {
        match identifier {
            "sech2" | "sech" => Ok(Self::Sech2),
            "cos2s" => Ok(Self::Cos2s),
            other => Err(Error::InvalidParameter {
                name: "model",
                reason: format!("unsupported spreading model `{}`", other),
            }),
        }
    }
}

enum Kernel<T> {
    Sech2 { beta: T },
    Cos2s { two_s: T },
}

impl<T: Real> Kernel<T> {
    /// `spread_rad` is the angular spread in radians.
    ///
    /// Both kernels use the same half-width convention: the density falls to
    /// `1 - SPREAD_FRACTION²` of its peak at an offset of spread/2, which for
    /// the sech² form means a `tanh` mass fraction of `SPREAD_FRACTION`
    /// inside ±spread/2.
    fn for_model(model: SpreadingModel, spread_rad: T) -> Result<Self> {
        let frac = T::new(SPREAD_FRACTION);
        match model {
            SpreadingModel::Sech2 => Ok(Kernel::Sech2 {
                beta: T::new(2.0) * frac.atanh() / spread_rad,
            }),
            SpreadingModel::Cos2s => {
                let quarter = spread_rad / T::new(4.0);
                if quarter >= T::new(std::f64::consts::FRAC_PI_2) {
                    return Err(Error::InvalidParameter {
                        name: "directional_spread",
                        reason: format!(
                            "{:?} rad spread exceeds the cos2s kernel domain (< 360°)",
                            spread_rad
                        ),
                    });
                }
                Ok(Kernel::Cos2s {
                    two_s: (T::one() - frac * frac).ln() / quarter.cos().ln(),
                })
            }
        }
    }

    /// Density per radian at an offset `delta_rad` from the peak direction.
    fn density(&self, delta_rad: T) -> T {
        match *self {
            Kernel::Sech2 { beta } => {
                let sech = |x: T| T::one() / x.cosh();
                T::new(0.5) * beta * sech(beta * delta_rad).powi(2)
            }
            // The half-angle cosine goes negative past ±180°; its lobe ends
            // there, so clamp instead of feeding powf a negative base.
            Kernel::Cos2s { two_s } => (delta_rad / T::new(2.0))
                .cos()
                .max(T::zero())
                .powf(two_s),
        }
    }
}

/// Direction-normalized spreading density over `dirs` (degrees).
///
/// The kernel has support past the axis ends and the axis is cyclic, so the
/// kernel is evaluated on an extended axis (second half prepended at −360°,
/// first half appended at +360°) and the overflow samples are folded back
/// onto their wrapped primary positions by addition. Nothing leaks across
/// the 355°→0° seam.
///
/// Normalization integrates the discrete samples as given: the axis is
/// treated as open at 360°, the closing segment is not re-added.
pub fn directional_spreading<T: Real>(
    dirs: ArrayView1<T>,
    peak_direction: T,
    spread: T,
    model: SpreadingModel,
) -> Result<Array1<T>> {
    check_direction_axis(dirs)?;
    if !(spread > T::zero()) || !spread.is_finite() {
        return Err(Error::InvalidParameter {
            name: "directional_spread",
            reason: format!("{:?} must be finite and > 0", spread),
        });
    }
    if !peak_direction.is_finite() {
        return Err(Error::InvalidParameter {
            name: "peak_direction",
            reason: format!("{:?} must be finite", peak_direction),
        });
    }

    let deg = T::new(std::f64::consts::PI / 180.0);
    let kernel = Kernel::for_model(model, spread * deg)?;

    let nd = dirs.len();
    let nd2 = nd / 2;
    let head = nd - nd2;
    let full_turn = T::new(360.0);

    // Cyclic extension: half a turn on either side of the primary axis.
    let mut extended = Array1::zeros(2 * nd);
    for (i, &d) in dirs.slice(s![nd2..]).iter().enumerate() {
        extended[i] = d - full_turn;
    }
    for (i, &d) in dirs.iter().enumerate() {
        extended[head + i] = d;
    }
    for (i, &d) in dirs.slice(s![..nd2]).iter().enumerate() {
        extended[head + nd + i] = d + full_turn;
    }

    // Density per degree of axis.
    let density = extended.mapv(|d| kernel.density((d - peak_direction) * deg) * deg);

    // Fold the wrap segments back onto the primary axis.
    let mut folded = density.slice(s![head..head + nd]).to_owned();
    for i in 0..nd2 {
        folded[i] = folded[i] + density[head + nd + i];
    }
    for i in 0..head {
        folded[nd2 + i] = folded[nd2 + i] + density[i];
    }

    let area = trapezoid(folded.view(), dirs);
    if !(area > T::zero()) || !area.is_finite() {
        return Err(Error::NumericDegeneracy {
            context: "directional spreading",
            reason: format!("density integral {:?} cannot normalize", area),
        });
    }
    Ok(folded.mapv(|d| d / area))
}
