use chrono::NaiveDate;

/// General VHF incubation window in days.
pub const VHF_WINDOW_DAYS: i64 = 21;

/// MERS-CoV incubation window in days (secondary, independent check).
pub const MERS_WINDOW_DAYS: i64 = 14;

/// Parse a boundary date string (ISO calendar date). Unparseable input is
/// `None`, never an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Whole calendar days between leaving a country and symptom onset.
/// `None` when either date is missing. May be negative when onset
/// predates departure; callers treat that as within-window.
pub fn days_elapsed(departure: Option<NaiveDate>, onset: Option<NaiveDate>) -> Option<i64> {
    match (departure, onset) {
        (Some(departure), Some(onset)) => Some(onset.signed_duration_since(departure).num_days()),
        _ => None,
    }
}

/// General rule: strictly more than 21 days since departure resolves the
/// country outside the window, regardless of its table entries. Unknown
/// elapsed time stays within-window so classification still runs.
pub fn outside_vhf_window(days: Option<i64>) -> bool {
    matches!(days, Some(d) if d > VHF_WINDOW_DAYS)
}

/// Secondary rule input: departure within the MERS window. Orthogonal to
/// the general rule; both can hold for the same segment.
pub fn within_mers_window(days: Option<i64>) -> bool {
    matches!(days, Some(d) if d <= MERS_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_iso_only() {
        assert_eq!(parse_date("2025-03-14"), Some(date(2025, 3, 14)));
        assert_eq!(parse_date(" 2025-03-14 "), Some(date(2025, 3, 14)));
        assert_eq!(parse_date("14/03/2025"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn days_elapsed_counts_calendar_days() {
        assert_eq!(
            days_elapsed(Some(date(2025, 3, 1)), Some(date(2025, 3, 11))),
            Some(10)
        );
        assert_eq!(
            days_elapsed(Some(date(2025, 3, 1)), Some(date(2025, 3, 1))),
            Some(0)
        );
    }

    #[test]
    fn days_elapsed_missing_dates() {
        assert_eq!(days_elapsed(None, Some(date(2025, 3, 1))), None);
        assert_eq!(days_elapsed(Some(date(2025, 3, 1)), None), None);
        assert_eq!(days_elapsed(None, None), None);
    }

    #[test]
    fn window_boundary_at_21_days() {
        assert!(!outside_vhf_window(Some(21)));
        assert!(outside_vhf_window(Some(22)));
        assert!(!outside_vhf_window(None));
    }

    #[test]
    fn negative_elapsed_stays_within_window() {
        // Onset before departure (data entry error) is deliberately permissive.
        assert!(!outside_vhf_window(Some(-3)));
        assert!(within_mers_window(Some(-3)));
    }

    #[test]
    fn mers_boundary_at_14_days() {
        assert!(within_mers_window(Some(14)));
        assert!(!within_mers_window(Some(15)));
        assert!(!within_mers_window(None));
    }
}
