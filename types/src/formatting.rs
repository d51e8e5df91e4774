//! Centralized number formatting for table cells.
//!
//! All cell display strings go through this module so column definitions
//! stay declarative and render identically across tables.

/// Format a number with K/M suffix for compact display.
///
/// - Magnitudes >= 1,000,000 are formatted as `X.XXM`
/// - Magnitudes >= 1,000 are formatted as `X.XXK`
/// - Smaller magnitudes are formatted with no decimals
///
/// Safe for zero, negative, and very large inputs.
///
/// # Examples
/// ```
/// use simview_types::formatting::format_compact;
/// assert_eq!(format_compact(0.0), "0");
/// assert_eq!(format_compact(512.0), "512");
/// assert_eq!(format_compact(1_500.0), "1.50K");
/// assert_eq!(format_compact(2_345_678.0), "2.35M");
/// assert_eq!(format_compact(-1_500.0), "-1.50K");
/// ```
pub fn format_compact(n: f64) -> String {
    let mag = n.abs();
    if mag >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if mag >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Format a decimal with the given precision.
///
/// # Examples
/// ```
/// use simview_types::formatting::format_decimal;
/// assert_eq!(format_decimal(3.46, 1), "3.5");
/// assert_eq!(format_decimal(50.0, 1), "50.0");
/// ```
pub fn format_decimal(n: f64, precision: usize) -> String {
    format!("{:.prec$}", n, prec = precision)
}

/// Format a percentage value with two decimal places.
///
/// The input is already on the 0-100 scale.
///
/// # Examples
/// ```
/// use simview_types::formatting::format_pct;
/// assert_eq!(format_pct(12.3456), "12.35%");
/// assert_eq!(format_pct(0.0), "0.00%");
/// ```
pub fn format_pct(n: f64) -> String {
    format!("{:.2}%", n)
}

/// Default cell rendering for an extracted value: one decimal place,
/// switching to compact K/M formatting for large magnitudes.
///
/// # Examples
/// ```
/// use simview_types::formatting::format_value;
/// assert_eq!(format_value(42.26), "42.3");
/// assert_eq!(format_value(1_500.0), "1.50K");
/// ```
pub fn format_value(n: f64) -> String {
    if n.abs() >= 1_000.0 {
        format_compact(n)
    } else {
        format_decimal(n, 1)
    }
}
