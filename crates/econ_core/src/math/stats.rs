//! Sample statistics over slices.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.
//! Empty inputs yield `None` rather than NaN so that callers decide how a
//! degenerate reduction is reported.

use num_traits::Float;

/// Arithmetic mean of a slice.
///
/// # Returns
/// `None` for an empty slice.
///
/// # Examples
/// ```
/// use econ_core::math::stats::mean;
///
/// assert_eq!(mean(&[2.0_f64, 4.0]), Some(3.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
#[inline]
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    let n = T::from(values.len())?;
    Some(sum / n)
}

/// Sample standard deviation (n − 1 denominator).
///
/// # Returns
/// `None` when fewer than two values are supplied.
///
/// # Examples
/// ```
/// use econ_core::math::stats::sample_std_dev;
///
/// let sd = sample_std_dev(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert!((sd - 1.2909944487358056).abs() < 1e-12);
/// ```
pub fn sample_std_dev<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
    let denom = T::from(values.len() - 1)?;
    Some((ss / denom).sqrt())
}

/// Mean of the element-wise product of two equally long slices.
///
/// # Returns
/// `None` when the slices are empty or their lengths differ.
///
/// # Examples
/// ```
/// use econ_core::math::stats::mean_product;
///
/// assert_eq!(mean_product(&[1.0_f64, 2.0], &[3.0, 4.0]), Some(5.5));
/// ```
pub fn mean_product<T: Float>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let sum = a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
    let n = T::from(a.len())?;
    Some(sum / n)
}

/// Sample covariance of two equally long slices (n − 1 denominator).
///
/// # Returns
/// `None` when fewer than two pairs are supplied or the lengths differ.
pub fn sample_covariance<T: Float>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }
    let ma = mean(a)?;
    let mb = mean(b)?;
    let sum = a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - ma) * (y - mb));
    let denom = T::from(a.len() - 1)?;
    Some(sum / denom)
}
