//! Ingredient quantity scaling.
//!
//! Scales a base amount to a target serving count and renders it the way a
//! cook reads it: whole numbers stay whole, remainders close to a common
//! fraction become a glyph (`1½`, `⅓`), anything else falls back to a short
//! decimal (`0.4`).

use crate::error::{Error, Result};

/// Canonical fractions and their glyphs, in lookup order.
///
/// The order matters: the nearest-fraction search replaces its candidate
/// only on a strictly smaller distance, so earlier entries win exact ties.
pub const FRACTIONS: [(f64, &str); 5] = [
    (0.25, "¼"),
    (0.33, "⅓"),
    (0.5, "½"),
    (0.67, "⅔"),
    (0.75, "¾"),
];

/// Maximum distance between a remainder and a fraction for the glyph to be used.
pub const SNAP_TOLERANCE: f64 = 0.06;

/// Candidate the nearest-fraction search starts from.
const INITIAL_FRACTION: (f64, &str) = (0.5, "½");

/// Scales `amount` from `base_servings` to `target_servings` and formats it.
///
/// # Errors
///
/// Returns [`Error::InvalidServings`] if either serving count is zero and
/// [`Error::InvalidAmount`] if the amount is negative or not finite.
///
/// # Examples
///
/// ```
/// use salem_core::scale::scale;
///
/// assert_eq!(scale(4.0, 4, 4).unwrap(), "4");
/// assert_eq!(scale(1.0, 4, 2).unwrap(), "½");
/// assert_eq!(scale(3.0, 4, 6).unwrap(), "4½");
/// ```
pub fn scale(amount: f64, base_servings: u32, target_servings: u32) -> Result<String> {
    let scaled = scaled_amount(amount, base_servings, target_servings)?;
    Ok(format_quantity(scaled))
}

/// Computes the raw scaled amount without formatting.
///
/// The amount is multiplied by the target before dividing by the base, so
/// `scaled_amount(a * k, b * k, t)` and `scaled_amount(a, b, t)` agree
/// exactly whenever the intermediate products are representable.
///
/// Computing `a * (t / b)` instead can land on the other side of a rounding
/// boundary: for `(0.01, 6, 21)` that order gives `0.035` stored just above
/// the half (shown as `0.04`) where this one gives `0.034999999999999996` (`0.03`).
pub fn scaled_amount(amount: f64, base_servings: u32, target_servings: u32) -> Result<f64> {
    if base_servings == 0 || target_servings == 0 {
        return Err(Error::InvalidServings {
            base: base_servings,
            target: target_servings,
        });
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    Ok(amount * f64::from(target_servings) / f64::from(base_servings))
}

/// Formats an already scaled, non-negative quantity.
pub fn format_quantity(scaled: f64) -> String {
    if scaled.fract() == 0.0 {
        return format!("{scaled}");
    }

    let whole = scaled.floor();
    let frac = scaled - whole;
    let (key, glyph) = nearest_fraction(frac);

    if (key - frac).abs() < SNAP_TOLERANCE {
        if whole > 0.0 {
            format!("{whole}{glyph}")
        } else {
            glyph.to_string()
        }
    } else {
        format_decimal(scaled)
    }
}

/// Finds the fraction-table entry closest to `frac`.
pub fn nearest_fraction(frac: f64) -> (f64, &'static str) {
    closest_entry(&FRACTIONS, INITIAL_FRACTION, frac)
}

fn closest_entry<'a>(
    entries: &[(f64, &'a str)],
    start: (f64, &'a str),
    frac: f64,
) -> (f64, &'a str) {
    entries.iter().fold(start, |closest, &entry| {
        if (entry.0 - frac).abs() < (closest.0 - frac).abs() {
            entry
        } else {
            closest
        }
    })
}

/// Two decimal places, trailing zeros and point removed.
///
/// Rounds the exact binary value, so `0.015` (stored just below the half)
/// becomes `0.01`. Only values that sit exactly on a half cent round up.
fn format_decimal(value: f64) -> String {
    let fixed = if is_exact_half_cent(value) {
        let cents = (value * 100.0).ceil();
        format!("{:.2}", cents / 100.0)
    } else {
        format!("{value:.2}")
    };
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// A half cent is representable only as an odd number of eighths.
fn is_exact_half_cent(value: f64) -> bool {
    let eighths = value * 8.0;
    let quarters = value * 4.0;
    eighths.fract() == 0.0 && quarters.fract() != 0.0
}
