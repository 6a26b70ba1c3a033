use super::Real;
use ndarray::ArrayView1;

/// Trapezoidal rule over sampled values with a matching, possibly
/// non-uniform sample axis.
pub fn trapezoid<T: Real>(values: ArrayView1<T>, axis: ArrayView1<T>) -> T {
    debug_assert_eq!(values.len(), axis.len());

    let half = T::new(0.5);
    let mut integral = T::zero();
    for i in 1..values.len() {
        integral = integral + half * (values[i] + values[i - 1]) * (axis[i] - axis[i - 1]);
    }
    integral
}
