//! Display formatting for the Indonesian (id-ID) locale.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const CURRENCY_PREFIX: &str = "Rp\u{a0}";

/// Format an amount as Rupiah, e.g. `Rp 1.500.000` or `Rp 1.234,5`.
///
/// At most two fraction digits are shown and trailing zeros are dropped.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut formatted = String::new();
    if amount < 0.0 && cents > 0 {
        formatted.push('-');
    }
    formatted.push_str(CURRENCY_PREFIX);
    formatted.push_str(&group_thousands(whole));

    if fraction != 0 {
        formatted.push(',');
        if fraction % 10 == 0 {
            formatted.push_str(&(fraction / 10).to_string());
        } else {
            formatted.push_str(&format!("{:02}", fraction));
        }
    }

    formatted
}

/// Insert `.` between every group of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Parse the date-time shapes the backend and the date inputs produce.
///
/// RFC 3339 values keep the wall-clock time of their own offset.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(naive);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy, HH.MM`; unparseable input is returned unchanged
pub fn format_date(value: &str) -> String {
    match parse_datetime(value) {
        Some(datetime) => datetime.format("%d/%m/%Y, %H.%M").to_string(),
        None => value.to_string(),
    }
}

/// `dd/mm/yyyy`; unparseable input is returned unchanged
pub fn format_short_date(value: &str) -> String {
    match parse_datetime(value) {
        Some(datetime) => datetime.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// ISO date-time accepted by the `date-range` query parameters
pub fn to_query_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_whole_amounts() {
        assert_eq!(format_currency(0.0), "Rp\u{a0}0");
        assert_eq!(format_currency(500.0), "Rp\u{a0}500");
        assert_eq!(format_currency(1500.0), "Rp\u{a0}1.500");
        assert_eq!(format_currency(1_500_000.0), "Rp\u{a0}1.500.000");
        assert_eq!(format_currency(999_999_999.0), "Rp\u{a0}999.999.999");
    }

    #[test]
    fn test_format_currency_fractions_and_sign() {
        assert_eq!(format_currency(1234.5), "Rp\u{a0}1.234,5");
        assert_eq!(format_currency(1234.56), "Rp\u{a0}1.234,56");
        assert_eq!(format_currency(10.004), "Rp\u{a0}10");
        assert_eq!(format_currency(-25000.0), "-Rp\u{a0}25.000");
        assert_eq!(format_currency(-0.001), "Rp\u{a0}0");
        assert_eq!(format_currency(f64::NAN), "Rp\u{a0}0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(12_345_678), "12.345.678");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-01T09:05:00"), "01/03/2024, 09.05");
        assert_eq!(format_date("2024-12-31T23:59:59.123456"), "31/12/2024, 23.59");
        assert_eq!(format_date("2024-03-01T09:05"), "01/03/2024, 09.05");
        assert_eq!(format_date("2024-03-01T09:05:00+07:00"), "01/03/2024, 09.05");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-03-01T09:05:00"), "01/03/2024");
        assert_eq!(format_short_date("2024-07-04"), "04/07/2024");
        assert_eq!(format_short_date(""), "");
    }

    #[test]
    fn test_to_query_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(to_query_datetime(datetime), "2024-03-01T00:00:00");
    }
}
