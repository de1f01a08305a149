/// Formats an integer with comma thousands separators, e.g. `-1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(value: i64) -> String {
    if value < 0 {
        format!("-${}", group_thousands(value.saturating_abs()))
    } else {
        format!("${}", group_thousands(value))
    }
}

/// Currency with an explicit `+` for increases; zero carries no sign.
pub fn format_signed_currency(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_800), "1,800");
        assert_eq!(group_thousands(370_012), "370,012");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn currency_puts_sign_before_dollar() {
        assert_eq!(format_currency(350_000), "$350,000");
        assert_eq!(format_currency(-24_000), "-$24,000");
        assert_eq!(format_signed_currency(15_000), "+$15,000");
        assert_eq!(format_signed_currency(-24_000), "-$24,000");
        assert_eq!(format_signed_currency(0), "$0");
    }
}
