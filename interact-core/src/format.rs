//! Display formatting for animated counter values.
//!
//! The rules mirror what the page renders: large round figures get
//! thousands grouping, small fractional figures keep one decimal, and
//! million-scale figures collapse back to a compact `"5.2M"` form.

use crate::counter::{CounterSpec, ScaleSuffix};

const MILLION: f64 = 1_000_000.0;

/// Group an integer with commas every three digits (`1234567` ->
/// `"1,234,567"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render one sampled counter value according to its spec.
///
/// Evaluated every animation frame, and once more at completion with
/// the exact target so the final render carries no easing drift.
pub fn display_value(spec: &CounterSpec, value: f64) -> String {
    let value = value.max(0.0);
    match spec.suffix {
        ScaleSuffix::Million => format!("{:.1}M", value / MILLION),
        ScaleSuffix::None if spec.target >= MILLION => group_thousands(value.floor() as u64),
        _ if spec.fractional && spec.target < 10.0 => format!("{value:.1}"),
        _ => group_thousands(value.floor() as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterSpec;

    #[test]
    fn grouping_inserts_commas_from_the_right() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(350), "350");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn plain_integer_renders_grouped_floor() {
        let spec = CounterSpec::from_raw("350");
        assert_eq!(display_value(&spec, 127.9), "127");
        assert_eq!(display_value(&spec, 350.0), "350");
    }

    #[test]
    fn small_fractional_keeps_one_decimal() {
        let spec = CounterSpec::from_raw("5.2");
        assert_eq!(display_value(&spec, 2.64), "2.6");
        assert_eq!(display_value(&spec, 5.2), "5.2");
    }

    #[test]
    fn million_suffix_collapses_to_compact_form() {
        let spec = CounterSpec::from_raw("5.2M");
        assert_eq!(display_value(&spec, 5_200_000.0), "5.2M");
        assert_eq!(display_value(&spec, 1_300_000.0), "1.3M");
    }

    #[test]
    fn bare_millions_stay_grouped() {
        let spec = CounterSpec::from_raw("2500000");
        assert_eq!(display_value(&spec, 2_500_000.0), "2,500,000");
    }
}
