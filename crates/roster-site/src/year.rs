//! Footer copyright year.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Year written into the footer for the instant `now`.
pub fn footer_year<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}

/// Footer year for the local clock.
pub fn current_footer_year() -> String {
    footer_year(&Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_footer_year_uses_the_given_instant() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(footer_year(&now), "2026");
    }

    #[test]
    fn test_footer_year_follows_local_offset() {
        let abidjan = FixedOffset::east_opt(0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 12, 31, 20, 0, 0).unwrap();
        assert_eq!(footer_year(&instant.with_timezone(&abidjan)), "2025");
        assert_eq!(footer_year(&instant.with_timezone(&tokyo)), "2026");
    }
}
