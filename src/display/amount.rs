//! Amount formatting
//!
//! Numbers are grouped by thousands and shown with at most three decimals.

/// Format a number with thousands separators and up to three decimals
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format an amount followed by the currency unit
pub fn format_amount(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// Label a category net: positive is spending, otherwise net income
pub fn format_category_net(net: f64, unit: &str) -> String {
    if net > 0.0 {
        format!("{} 지출", format_amount(net, unit))
    } else {
        format!("{} (순수입)", format_amount(net.abs(), unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-45000.0), "-45,000");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(1234.56789), "1,234.568");
        assert_eq!(format_number(0.0001), "0");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12500.0, "원"), "12,500원");
    }

    #[test]
    fn test_format_category_net() {
        assert_eq!(format_category_net(300.0, "원"), "300원 지출");
        assert_eq!(format_category_net(-1000.0, "원"), "1,000원 (순수입)");
        assert_eq!(format_category_net(0.0, "원"), "0원 (순수입)");
    }
}
