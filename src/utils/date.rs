use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve an optional `--date` argument, defaulting to today.
pub fn resolve_date(arg: Option<&String>) -> Result<NaiveDate, String> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| s.clone()),
        None => Ok(today()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_dates_only() {
        assert_eq!(
            parse_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_date("05/01/2024"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }
}
