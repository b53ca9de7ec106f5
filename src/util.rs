/// Safe numeric conversion helpers.
///
/// Checked conversions between `i64` and `f64`, used when promoting integers
/// for mixed arithmetic and when truncating reals in the `int` built-in.
pub mod num;
