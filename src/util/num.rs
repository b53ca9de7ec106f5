use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_I64_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use pyrite::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside the safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64`, truncating toward zero.
///
/// The value must be finite and, after truncation, inside the `i64` range.
///
/// ## Errors
/// Returns `RuntimeError::TypeError` for non-finite values and
/// `RuntimeError::LiteralTooLarge` for values out of range.
///
/// ## Example
/// ```
/// use pyrite::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert_eq!(f64_to_i64_checked(-2.9, 1).unwrap(), -2);
/// assert!(f64_to_i64_checked(1e20, 1).is_err());
/// assert!(f64_to_i64_checked(f64::NAN, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("cannot convert non-finite value {value} to an integer"),
                                             line });
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(value.trunc() as i64)
}
