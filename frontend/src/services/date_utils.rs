use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Parse the `YYYY-MM-DD` value of an `<input type="date">`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a date for an `<input type="date">` value
pub fn to_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2024-13-01"), None);
    }

    #[wasm_bindgen_test]
    fn test_today_round_trips_through_input() {
        let date = today();
        assert_eq!(parse_date_input(&to_date_input(date)), Some(date));
    }
}
