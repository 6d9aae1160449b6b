//! Small math helpers used across indicators

/// Largest precision the exact rounding supports (10^20 * 2^53 fits in u128)
const MAX_DECIMALS: u32 = 20;

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value of `value`, so 100.005 (stored as
/// 100.00499...) becomes 100.0. Values that are exactly halfway, like 0.125,
/// round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    match round_scaled(value, decimals) {
        Some(scaled) => {
            let rounded = scaled as f64 / 10f64.powi(decimals as i32);
            if value < 0.0 {
                -rounded
            } else {
                rounded
            }
        }
        None => value,
    }
}

/// Round to two decimals, the precision every published indicator uses
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Fixed-point text with the same rounding as [`round_to`]
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let Some(scaled) = round_scaled(value, decimals) else {
        return format!("{:.*}", decimals as usize, value);
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let unit = 10u128.pow(decimals);
    if decimals == 0 {
        format!("{}{}", sign, scaled)
    } else {
        format!(
            "{}{}.{:0width$}",
            sign,
            scaled / unit,
            scaled % unit,
            width = decimals as usize
        )
    }
}

/// `|value| * 10^decimals` rounded to an integer in exact arithmetic.
///
/// `None` for integral or non-finite values (nothing to round) and for
/// precisions beyond `MAX_DECIMALS`.
fn round_scaled(value: f64, decimals: u32) -> Option<u128> {
    if !value.is_finite() || value.fract() == 0.0 || decimals > MAX_DECIMALS {
        return None;
    }

    // value = mantissa / 2^shift; shift > 0 because value is not integral
    let bits = value.abs().to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as u32;
    let fraction = (bits & ((1u64 << 52) - 1)) as u128;
    let (mantissa, shift) = if exponent == 0 {
        (fraction, 1074)
    } else {
        (fraction | (1u128 << 52), 1075 - exponent)
    };

    let scaled = mantissa * 10u128.pow(decimals);
    if shift >= 128 {
        // scaled < 2^127 <= 2^(shift - 1): below one half
        return Some(0);
    }

    let whole = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    Some(if remainder >= half { whole + 1 } else { whole })
}

/// Arithmetic mean of the trailing `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
