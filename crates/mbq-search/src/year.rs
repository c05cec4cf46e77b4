//! The year part of a date.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use mbq_lucene::Term;

/// The year part of a date, for searching date fields at year
/// granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year {
    /// The calendar year.
    value: i32,
}

impl Year {
    /// Wraps a calendar year.
    pub const fn new(year: i32) -> Self {
        Self { value: year }
    }

    /// The year as a number.
    pub const fn get(self) -> i32 {
        self.value
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self::new(year)
    }
}

impl From<NaiveDate> for Year {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year())
    }
}

impl From<Year> for Term {
    fn from(year: Year) -> Self {
        Self::from(year.value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mbq_lucene::Expression;

    #[test]
    fn year_from_date() {
        let date = NaiveDate::from_ymd_opt(1969, 1, 12).unwrap();
        assert_eq!(Year::from(date), Year::new(1969));
    }

    #[test]
    fn year_renders_unquoted() {
        assert_eq!(Term::from(Year::new(1957)).build(), "1957");
    }

    #[test]
    fn bce_year_renders_quoted() {
        assert_eq!(Term::from(Year::new(-44)).build(), "\"-44\"");
    }

    #[test]
    fn year_displays_as_number() {
        assert_eq!(Year::new(2020).to_string(), "2020");
    }
}
