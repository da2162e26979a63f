//! Rendering of arithmetic results.

/// Render an arithmetic result for the display.
///
/// Whole values print without a decimal point. Everything else uses the
/// default `f64` rendering. Infinity and NaN are not intercepted and show
/// up as `inf`, `-inf` or `NaN`.
///
/// # Example
///
/// ```rust
/// use zcalc::core::format_result;
///
/// assert_eq!(format_result(12.0), "12");
/// assert_eq!(format_result(0.5), "0.5");
/// assert_eq!(format_result(f64::INFINITY), "inf");
/// ```
pub fn format_result(value: f64) -> String {
    // `as` saturates: infinities and huge values fail the comparison,
    // NaN truncates to 0 and fails it too.
    let truncated = value as i64;
    if value == truncated as f64 {
        truncated.to_string()
    } else {
        value.to_string()
    }
}
