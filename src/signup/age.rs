//! Birth date to age derivation for the signup form.
//!
//! The result is a tri-state value: nothing entered yet, something entered but
//! rejected, or a whole number of years. Keeping "not entered" and "rejected"
//! apart lets the form show a placeholder in one case and an error in the other.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Accepted input format for birth dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DerivedAge {
    /// No date has been entered.
    Unknown,
    /// A date was entered but it is not a real calendar date or lies in the future.
    Invalid,
    Years(u32),
}

impl DerivedAge {
    #[must_use]
    pub const fn years(self) -> Option<u32> {
        match self {
            Self::Years(years) => Some(years),
            Self::Unknown | Self::Invalid => None,
        }
    }

    /// True only when the user entered a date that was rejected.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Text shown next to the date field.
    #[must_use]
    pub fn display(self) -> String {
        match self {
            Self::Unknown => "Age".to_string(),
            Self::Invalid => "N/A".to_string(),
            Self::Years(years) => format!("{years} years"),
        }
    }
}

impl fmt::Display for DerivedAge {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display())
    }
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the input has the exact `YYYY-MM-DD` shape: four, two and two
/// ASCII digits separated by `-`, with no sign or padding.
fn is_iso_date_shape(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Derives an age in whole years from a `YYYY-MM-DD` string relative to `today`.
///
/// Only the empty string means "not entered"; anything else that is not a
/// strict `YYYY-MM-DD` calendar date, including blank or padded text, is
/// `Invalid`.
#[must_use]
pub fn derive_age(date_of_birth: &str, today: NaiveDate) -> DerivedAge {
    if date_of_birth.is_empty() {
        return DerivedAge::Unknown;
    }

    if !is_iso_date_shape(date_of_birth) {
        return DerivedAge::Invalid;
    }

    let Ok(birth) = NaiveDate::parse_from_str(date_of_birth, DATE_FORMAT) else {
        return DerivedAge::Invalid;
    };

    if birth > today {
        return DerivedAge::Invalid;
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    u32::try_from(years).map_or(DerivedAge::Invalid, DerivedAge::Years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(derive_age("", date(2024, 7, 28)), DerivedAge::Unknown);
    }

    #[test]
    fn blank_or_loosely_formatted_input_is_invalid() {
        let today = date(2024, 7, 28);
        for input in [
            "   ",
            " 2000-01-01 ",
            "2000-01-01\n",
            "2000-1-5",
            "2000-01-5",
            "+2000-01-05",
            "02000-01-05",
            "2000/01/05",
        ] {
            assert_eq!(derive_age(input, today), DerivedAge::Invalid, "{input:?}");
        }
    }

    #[test]
    fn day_before_birthday_decrements() {
        assert_eq!(
            derive_age("2000-07-29", date(2024, 7, 28)),
            DerivedAge::Years(23)
        );
    }

    #[test]
    fn birthday_today_counts_full_year() {
        assert_eq!(
            derive_age("2000-07-28", date(2024, 7, 28)),
            DerivedAge::Years(24)
        );
    }

    #[test]
    fn earlier_month_decrements() {
        assert_eq!(
            derive_age("2000-12-01", date(2024, 7, 28)),
            DerivedAge::Years(23)
        );
        assert_eq!(
            derive_age("2000-01-31", date(2024, 7, 28)),
            DerivedAge::Years(24)
        );
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(
            derive_age("2024-07-28", date(2024, 7, 28)),
            DerivedAge::Years(0)
        );
    }

    #[test]
    fn future_dates_are_invalid() {
        let today = date(2024, 7, 28);
        for input in ["2024-07-29", "2024-08-01", "2025-01-01", "2999-12-31"] {
            assert_eq!(derive_age(input, today), DerivedAge::Invalid, "{input}");
        }
    }

    #[test]
    fn impossible_dates_are_invalid() {
        let today = date(2024, 7, 28);
        for input in ["2023-02-30", "2000-13-01", "2000-00-10", "not a date", "28/07/2000"] {
            assert_eq!(derive_age(input, today), DerivedAge::Invalid, "{input}");
        }
    }

    #[test]
    fn leap_day_birthday() {
        // Not yet Feb 29 on Feb 28 of a non-leap year.
        assert_eq!(
            derive_age("2000-02-29", date(2023, 2, 28)),
            DerivedAge::Years(22)
        );
        assert_eq!(
            derive_age("2000-02-29", date(2023, 3, 1)),
            DerivedAge::Years(23)
        );
    }

    #[test]
    fn display_states() {
        assert_eq!(DerivedAge::Unknown.display(), "Age");
        assert_eq!(DerivedAge::Invalid.display(), "N/A");
        assert_eq!(DerivedAge::Years(31).to_string(), "31 years");
        assert!(DerivedAge::Invalid.is_error());
        assert!(!DerivedAge::Unknown.is_error());
        assert_eq!(DerivedAge::Years(5).years(), Some(5));
        assert_eq!(DerivedAge::Unknown.years(), None);
    }
}
