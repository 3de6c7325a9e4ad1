//! Health-age deviation and calendar age.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which side of the actual age the health age falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeDirection {
    Higher,
    Lower,
    Equal,
}

/// How the deviation should read to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Cautionary,
    Positive,
    Neutral,
}

/// Result of comparing health age with actual age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDeviation {
    pub direction: AgeDirection,
    /// `health_age - actual_age`.
    pub delta: i32,
    pub tone: Tone,
}

impl AgeDeviation {
    /// Absolute number of years, for display.
    pub fn magnitude(&self) -> u32 {
        self.delta.unsigned_abs()
    }
}

/// Compare a checkup's health age with the user's actual age.
pub fn evaluate_age_deviation(health_age: i32, actual_age: i32) -> AgeDeviation {
    let delta = health_age - actual_age;
    let (direction, tone) = match delta {
        d if d > 0 => (AgeDirection::Higher, Tone::Cautionary),
        d if d < 0 => (AgeDirection::Lower, Tone::Positive),
        _ => (AgeDirection::Equal, Tone::Neutral),
    };
    AgeDeviation { direction, delta, tone }
}

/// Completed years between `birth_date` and `today`.
///
/// One year less when today's month/day precedes the birthday.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn older_health_age_is_cautionary() {
        let dev = evaluate_age_deviation(43, 39);
        assert_eq!(dev.direction, AgeDirection::Higher);
        assert_eq!(dev.delta, 4);
        assert_eq!(dev.tone, Tone::Cautionary);
        assert_eq!(dev.magnitude(), 4);
    }

    #[test]
    fn younger_health_age_is_positive() {
        let dev = evaluate_age_deviation(35, 39);
        assert_eq!(dev.direction, AgeDirection::Lower);
        assert_eq!(dev.delta, -4);
        assert_eq!(dev.tone, Tone::Positive);
        assert_eq!(dev.magnitude(), 4);
    }

    #[test]
    fn equal_ages_are_neutral() {
        let dev = evaluate_age_deviation(39, 39);
        assert_eq!(dev.direction, AgeDirection::Equal);
        assert_eq!(dev.delta, 0);
        assert_eq!(dev.tone, Tone::Neutral);
    }

    #[test]
    fn age_counts_completed_years() {
        let birth = ymd(1985, 3, 15);
        assert_eq!(age_on(birth, ymd(2024, 11, 16)), 39);
        assert_eq!(age_on(birth, ymd(2025, 3, 14)), 39);
        assert_eq!(age_on(birth, ymd(2025, 3, 15)), 40);
    }

    #[test]
    fn leap_day_birthday() {
        let birth = ymd(2000, 2, 29);
        assert_eq!(age_on(birth, ymd(2023, 2, 28)), 22);
        assert_eq!(age_on(birth, ymd(2023, 3, 1)), 23);
    }
}
