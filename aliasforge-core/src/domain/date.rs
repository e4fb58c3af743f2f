//! Date-of-birth parsing and date suffix derivation
//!
//! A birth date contributes short numeric suffixes to candidates. A bare
//! two-digit month is never a usable suffix on its own; it is only exposed
//! so the filter can recognise and reject it.

use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::OnceLock;

/// `YYYY/MM/DD` or `YYYY-MM-DD`, one or two digit month and day
static DOB_PATTERN: OnceLock<Regex> = OnceLock::new();
static YEAR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn dob_pattern() -> &'static Regex {
    DOB_PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("date pattern is valid")
    })
}

fn year_pattern() -> &'static Regex {
    YEAR_PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").expect("year pattern is valid"))
}

/// Shape of a date suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    /// `2001`
    Year4,
    /// `01`
    Year2,
    /// `1015`
    MonthDay,
    /// `15`
    Day,
    /// `1501`, day followed by two-digit year
    DayYear,
    /// `20011015`
    FullDate,
    /// `10`, never emitted
    Month,
}

/// A rendered date suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    /// Suffix shape
    pub kind: DateKind,
    /// Digits appended to a stem
    pub text: String,
}

impl DateToken {
    fn new(kind: DateKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Date information known about the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInfo {
    /// Neither year nor date of birth supplied
    #[default]
    Empty,
    /// Only the year is known
    YearOnly {
        /// Four-digit year
        year: u16,
    },
    /// Full date of birth
    Full {
        /// Four-digit year
        year: u16,
        /// Month, 1-12
        month: u8,
        /// Day, 1-31
        day: u8,
    },
}

enum DobParts {
    YearOnly(u16),
    Full { year: u16, month: u8, day: u8 },
}

impl DateInfo {
    /// Derive date information from the optional year and date-of-birth fields
    ///
    /// An explicit `year` takes precedence over the year inside `dob`. When the
    /// date of birth cannot be parsed but a valid year is present, the result
    /// degrades to [`DateInfo::YearOnly`].
    pub fn parse(year: Option<&str>, dob: Option<&str>) -> Result<Self, ValidationError> {
        let year = match year.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(parse_year(raw)?),
            None => None,
        };

        let Some(raw_dob) = dob.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(year.map_or(DateInfo::Empty, |year| DateInfo::YearOnly { year }));
        };

        match parse_dob(raw_dob) {
            Ok(DobParts::Full {
                year: dob_year,
                month,
                day,
            }) => Ok(DateInfo::Full {
                year: year.unwrap_or(dob_year),
                month,
                day,
            }),
            Ok(DobParts::YearOnly(dob_year)) => Ok(DateInfo::YearOnly {
                year: year.unwrap_or(dob_year),
            }),
            Err(err) => match year {
                Some(year) => {
                    log::warn!(
                        "Ignoring unparseable date of birth '{raw_dob}', using year {year} only"
                    );
                    Ok(DateInfo::YearOnly { year })
                }
                None => Err(err),
            },
        }
    }

    /// No date information at all
    pub fn is_empty(&self) -> bool {
        matches!(self, DateInfo::Empty)
    }

    /// Month and day are known
    pub fn has_full_date(&self) -> bool {
        matches!(self, DateInfo::Full { .. })
    }

    fn year(&self) -> Option<u16> {
        match *self {
            DateInfo::Empty => None,
            DateInfo::YearOnly { year } | DateInfo::Full { year, .. } => Some(year),
        }
    }

    fn month_and_day(&self) -> Option<(u8, u8)> {
        match *self {
            DateInfo::Full { month, day, .. } => Some((month, day)),
            _ => None,
        }
    }

    /// `2001`
    pub fn year4(&self) -> Option<DateToken> {
        self.year()
            .map(|year| DateToken::new(DateKind::Year4, format!("{year:04}")))
    }

    /// `01`
    pub fn year2(&self) -> Option<DateToken> {
        self.year()
            .map(|year| DateToken::new(DateKind::Year2, format!("{:02}", year % 100)))
    }

    /// `1015`
    pub fn month_day(&self) -> Option<DateToken> {
        self.month_and_day()
            .map(|(month, day)| DateToken::new(DateKind::MonthDay, format!("{month:02}{day:02}")))
    }

    /// `15`
    pub fn day(&self) -> Option<DateToken> {
        self.month_and_day()
            .map(|(_, day)| DateToken::new(DateKind::Day, format!("{day:02}")))
    }

    /// `1501`
    pub fn day_year(&self) -> Option<DateToken> {
        let (_, day) = self.month_and_day()?;
        let year = self.year()?;
        Some(DateToken::new(
            DateKind::DayYear,
            format!("{day:02}{:02}", year % 100),
        ))
    }

    /// `20011015`
    pub fn full_date(&self) -> Option<DateToken> {
        let (month, day) = self.month_and_day()?;
        let year = self.year()?;
        Some(DateToken::new(
            DateKind::FullDate,
            format!("{year:04}{month:02}{day:02}"),
        ))
    }

    /// `10`, the bare month; rejected by the candidate filter
    pub fn month(&self) -> Option<DateToken> {
        self.month_and_day()
            .map(|(month, _)| DateToken::new(DateKind::Month, format!("{month:02}")))
    }

    /// Primary suffixes in emission order: year, short year, month-day, day
    pub fn suffixes(&self) -> SmallVec<[DateToken; 4]> {
        [self.year4(), self.year2(), self.month_day(), self.day()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Secondary suffixes: day-year flip and the eight-digit date
    pub fn extended_suffixes(&self) -> SmallVec<[DateToken; 2]> {
        [self.day_year(), self.full_date()]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn parse_year(raw: &str) -> Result<u16, ValidationError> {
    if !year_pattern().is_match(raw) {
        return Err(ValidationError::InvalidYear(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| ValidationError::InvalidYear(raw.to_string()))
}

fn parse_dob(raw: &str) -> Result<DobParts, ValidationError> {
    let invalid = || ValidationError::InvalidDate(raw.to_string());

    if year_pattern().is_match(raw) {
        return raw.parse().map(DobParts::YearOnly).map_err(|_| invalid());
    }

    let caps = dob_pattern().captures(raw).ok_or_else(invalid)?;
    let year: u16 = caps[1].parse().map_err(|_| invalid())?;
    let month: u8 = caps[2].parse().map_err(|_| invalid())?;
    let day: u8 = caps[3].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return Err(invalid());
    }

    Ok(DobParts::Full { year, month, day })
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
