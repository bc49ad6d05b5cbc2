//! Unit conversion for throughput values.

pub const KILO_LIMIT_F64: f64 = 1000.0;
pub const MEGA_LIMIT_F64: f64 = 1_000_000.0;
pub const GIGA_LIMIT_F64: f64 = 1_000_000_000.0;

/// Returns a tuple containing the value and the unit in bytes. In units of
/// 1000. This only supports up to a giga. Anything under a kilo, including
/// negative values, is left as plain bytes.
#[inline]
pub fn get_decimal_bytes(bytes: f64) -> (f64, &'static str) {
    match bytes {
        b if b >= GIGA_LIMIT_F64 => (bytes / GIGA_LIMIT_F64, "GB"),
        b if b >= MEGA_LIMIT_F64 => (bytes / MEGA_LIMIT_F64, "MB"),
        b if b >= KILO_LIMIT_F64 => (bytes / KILO_LIMIT_F64, "KB"),
        _ => (bytes, "bytes"),
    }
}

/// Formats a raw value into a human-readable string with a base-1000 prefix,
/// e.g. `1500.0` becomes `"1.50 KB"` and `999.0` becomes `"999 bytes"`.
pub fn format_units(value: f64) -> String {
    let (scaled, unit) = get_decimal_bytes(value);

    if value >= KILO_LIMIT_F64 {
        format!("{scaled:.2} {unit}")
    } else {
        format!("{scaled:.0} {unit}")
    }
}
