use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar quarter, ordered by year and then quarter number.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct QuarterKey {
    pub year: i32,
    /// Always within `1..=4`.
    pub quarter: u8
}

impl QuarterKey {
    /// The calendar quarter containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month0() / 3 + 1) as u8
        }
    }

    /// The quarter immediately before this one, wrapping Q1 into Q4 of the prior year.
    pub fn previous(self) -> Self {
        if self.quarter == 1 {
            Self { year: self.year - 1, quarter: 4 }
        } else {
            Self { year: self.year, quarter: self.quarter - 1 }
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Display for QuarterKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} Q{}", self.year, self.quarter)
    }
}
