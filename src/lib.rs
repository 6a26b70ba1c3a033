//! Directional ocean-wave energy spectra from sea-state parameters.
//!
//! A sea state is described by one or more wave trains (swell, wind sea),
//! each given as significant wave height, peak period, peak direction and
//! directional spread. The crate samples a JONSWAP frequency spectrum and a
//! directional spreading function for every train and superposes the outer
//! products into a 2-D energy density field over frequency and direction.
//!
//! The field is raw model output; any logarithmic scaling, clamping or
//! color mapping is left to the rendering side.

pub mod error;
pub mod math;
pub mod ocean;

pub use error::{Error, Result};
pub use ocean::{
    directional_spectrum, directional_spreading, frequency_spectrum, SpectrumJONSWAP,
    SpreadingModel, WaveCondition,
};
