use crate::error::{Error, Result};

/// Extends slices of floats with checked summaries
pub trait SliceExt<T> {
    /// Smallest and largest value as a `(min, max)` pair
    ///
    /// Used for column summaries, where a single `NaN` or infinity would make
    /// the range meaningless. These are reported as errors instead.
    ///
    /// ```rust
    /// # use stools_utils::{Error, SliceExt};
    /// assert_eq!([3.0_f64, -1.0, 2.0].try_range(), Ok((-1.0, 3.0)));
    ///
    /// assert_eq!([1.0_f64, f64::NAN].try_range(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_range(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_range(&self) -> Result<(T, T)>;
}

impl SliceExt<f64> for [f64] {
    fn try_range(&self) -> Result<(f64, f64)> {
        let first = *self.first().ok_or(Error::SliceContainsNoValues)?;

        let mut range = (first, first);
        for v in self {
            if !v.is_finite() {
                return Err(Error::SliceContainsUndefinedValues);
            }
            range.0 = range.0.min(*v);
            range.1 = range.1.max(*v);
        }

        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values() {
        assert_eq!([-3.5_f64, -10.0, -0.1].try_range(), Ok((-10.0, -0.1)));
    }

    #[test]
    fn single_value_range() {
        assert_eq!([42.0_f64].try_range(), Ok((42.0, 42.0)));
    }

    #[test]
    fn extreme_finite_values() {
        assert_eq!([f64::MAX, 0.0, f64::MIN].try_range(), Ok((f64::MIN, f64::MAX)));
    }

    #[test]
    fn undefined_values_fail_range() {
        assert_eq!(
            [1.0_f64, f64::NEG_INFINITY].try_range(),
            Err(Error::SliceContainsUndefinedValues)
        );
        assert_eq!(
            [f64::NAN].try_range(),
            Err(Error::SliceContainsUndefinedValues)
        );
    }
}
