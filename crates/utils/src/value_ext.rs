use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Consistent scientific number formatting
    ///
    /// Values in Stella models span tens of orders of magnitude (radii of
    /// ~1e15 cm next to mass fractions of ~1e-30), so summaries always use a
    /// signed and padded exponent.
    ///
    /// Works for anything implementing `LowerExp`.
    ///
    /// ```rust
    /// # use stools_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(1.5e15_f64.sci(3, 2), "1.500e+15".to_string());
    /// assert_eq!(2.0e-7_f64.sci(2, 3), "2.00e-007".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut number = f!("{:.precision$e}", &self, precision = precision);

        // `LowerExp` always writes an 'e', fall back to the raw string if not
        let Some(split) = number.find('e') else {
            return number;
        };
        let exponent = number.split_off(split);

        // make sure the exponent is always signed
        let (sign, digits) = match exponent.strip_prefix("e-") {
            Some(digits) => ('-', digits),
            None => ('+', &exponent[1..]),
        };

        number.push_str(&f!("e{}{:0>pad$}", sign, digits, pad = exp_pad));
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_signed() {
        assert_eq!(0.0_f64.sci(2, 2), "0.00e+00");
    }

    #[test]
    fn exponent_wider_than_padding() {
        assert_eq!(1.0e-123_f64.sci(1, 2), "1.0e-123");
    }
}
