use thiserror::Error;

/// Largest exponent magnitude accepted by [`powi`].
pub const MAX_EXPONENT: i32 = 999_999_999;

/// Exponents up to this size are evaluated by plain repeated
/// multiplication; larger ones recurse on `exponent / 4`.
const SQUARING_BLOCK: u32 = 4;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PowerError {
    #[error("unsupported exponent value: {0}")]
    UnsupportedExponent(i32),
    #[error("reached f64 infinity computing power of base {base} with exponent {exponent}")]
    Overflow { base: f64, exponent: u32 },
}

/// Computes `base` to the power of `exponent` using exponentiation by
/// squaring in blocks of four:
///
/// ```text
///   pow(b, a) = b * b * ... * b            for a <= 4 (so pow(b, 0) = 1)
///   pow(b, a) = pow(pow(b, a / 4), 4)
///             * pow(b, a % 4)              otherwise
/// ```
///
/// This bounds the recursion depth to O(log4 a) and the total number of
/// multiplications to O(log a).
///
/// The exponent must lie in `[-MAX_EXPONENT, MAX_EXPONENT]`. If any
/// intermediate magnitude reaches infinity, the computation fails with
/// [`PowerError::Overflow`] naming the operands of the failing recursion
/// level.
///
/// Negative exponents return `1.0 / powi(base, -exponent)`, with the
/// overflow check applied to the positive branch *before* the reciprocal
/// is taken. Two consequences of that ordering:
///
/// * a base with magnitude > 1 and a large negative exponent fails with
///   `Overflow` even though the true value is tiny and finite;
/// * a base with magnitude < 1 and a large negative exponent can return
///   `Ok(f64::INFINITY)`, because the positive branch underflows to zero
///   and only infinities are checked.
pub fn powi(base: f64, exponent: i32) -> Result<f64, PowerError> {
    if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        return Err(PowerError::UnsupportedExponent(exponent));
    }

    let magnitude = pow_abs(base, exponent.unsigned_abs())?;
    if exponent >= 0 {
        Ok(magnitude)
    } else {
        Ok(1.0 / magnitude)
    }
}

fn pow_abs(base: f64, exponent: u32) -> Result<f64, PowerError> {
    let power = if exponent <= SQUARING_BLOCK {
        let mut acc = 1.0;
        for _ in 0..exponent {
            acc *= base;
        }
        acc
    } else {
        let root = pow_abs(base, exponent / SQUARING_BLOCK)?;
        pow_abs(root, SQUARING_BLOCK)? * pow_abs(base, exponent % SQUARING_BLOCK)?
    };

    if power.is_infinite() {
        return Err(PowerError::Overflow { base, exponent });
    }
    Ok(power)
}

/// Arithmetic mean of the values, or `None` if there are none.
pub fn average<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (count, sum) = values
        .into_iter()
        .fold((0u64, 0.0), |(count, sum), value| (count + 1, sum + value));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod test {
    use super::{average, powi, PowerError, MAX_EXPONENT};

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(powi(0.0, 0), Ok(1.0));
        assert_eq!(powi(2.0, 0), Ok(1.0));
        assert_eq!(powi(-13.7, 0), Ok(1.0));
    }

    #[test]
    fn small_exponents() {
        assert_eq!(powi(2.0, 1), Ok(2.0));
        assert_eq!(powi(2.0, 4), Ok(16.0));
        assert_eq!(powi(-3.0, 3), Ok(-27.0));
    }

    #[test]
    fn correctness() {
        for i in 0..63 {
            assert_eq!(powi(2.0, i), Ok((1u64 << i) as f64));
        }
        assert_eq!(powi(2.0, 10), Ok(1024.0));
        assert_eq!(powi(10.0, 5), Ok(100_000.0));
    }

    #[test]
    fn negative_exponents() {
        assert_eq!(powi(2.0, -3), Ok(0.125));
        assert_eq!(powi(10.0, -2), Ok(0.01));
    }

    #[test]
    fn reciprocal_identity() {
        for &base in &[1.5, 2.0, 3.25, 10.0] {
            for &n in &[1, 2, 7, 19, 100] {
                let product = powi(base, n).unwrap() * powi(base, -n).unwrap();
                assert!((product - 1.0).abs() < 1e-9, "base {base}, n {n}: {product}");
            }
        }
    }

    #[test]
    fn exponent_out_of_range() {
        assert_eq!(
            powi(2.0, 1_000_000_000),
            Err(PowerError::UnsupportedExponent(1_000_000_000))
        );
        assert_eq!(
            powi(2.0, -1_000_000_000),
            Err(PowerError::UnsupportedExponent(-1_000_000_000))
        );
        assert!(powi(2.0, MAX_EXPONENT - 1).is_err()); // overflows instead
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            powi(1e300, 10),
            Err(PowerError::Overflow { .. })
        ));
    }

    // The positive branch is checked for infinity before the reciprocal is
    // taken, so a huge negative exponent on a base > 1 is an overflow even
    // though the true value is a tiny finite number.
    #[test]
    fn negative_exponent_overflows_before_reciprocation() {
        assert!(matches!(
            powi(10.0, -400),
            Err(PowerError::Overflow { .. })
        ));
    }

    // The mirror image: the positive branch underflows to zero, which is
    // not an infinity, and the reciprocal of zero is infinite.
    #[test]
    fn negative_exponent_can_return_infinity() {
        assert_eq!(powi(0.5, -2000), Ok(f64::INFINITY));
    }

    #[test]
    fn average_of_values() {
        assert_eq!(average([1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(average([42.0]), Some(42.0));
        assert_eq!(average([]), None);
    }
}
