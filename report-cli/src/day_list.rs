//! Worked-day lists such as `1-3,6,7`.
//!
//! Entries are separated by commas and/or whitespace. Each entry is either a
//! day number or an inclusive `start-end` range. Whether a day actually
//! exists in the report month is checked later, when the days are toggled.

use thiserror::Error;

/// No month has more days than this.
const MAX_DAY: u32 = 31;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DayListError {
    #[error("'{0}' is not a day number or range")]
    InvalidEntry(String),

    #[error("day numbers run from 1 to 31, got '{0}'")]
    OutOfRange(String),

    #[error("range '{0}' ends before it starts")]
    ReversedRange(String),
}

/// Parses a day list into sorted, de-duplicated day numbers.
///
/// An empty or blank list means no worked days.
///
/// # Example
///
/// ```
/// use report_cli::day_list::parse_day_list;
///
/// assert_eq!(parse_day_list("1-3,6,7").unwrap(), vec![1, 2, 3, 6, 7]);
/// assert_eq!(parse_day_list("7 6, 6").unwrap(), vec![6, 7]);
/// assert!(parse_day_list("").unwrap().is_empty());
/// ```
pub fn parse_day_list(input: &str) -> Result<Vec<u32>, DayListError> {
    let mut days = Vec::new();

    for entry in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|e| !e.is_empty())
    {
        match entry.split_once('-') {
            Some((start, end)) => {
                let start = parse_day(start, entry)?;
                let end = parse_day(end, entry)?;
                if end < start {
                    return Err(DayListError::ReversedRange(entry.to_string()));
                }
                days.extend(start..=end);
            }
            None => days.push(parse_day(entry, entry)?),
        }
    }

    days.sort_unstable();
    days.dedup();
    Ok(days)
}

fn parse_day(
    raw: &str,
    entry: &str,
) -> Result<u32, DayListError> {
    let day: u32 = raw
        .trim()
        .parse()
        .map_err(|_| DayListError::InvalidEntry(entry.to_string()))?;
    if !(1..=MAX_DAY).contains(&day) {
        return Err(DayListError::OutOfRange(entry.to_string()));
    }
    Ok(day)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_days_and_ranges() {
        assert_eq!(parse_day_list("1-3,6,7").unwrap(), vec![1, 2, 3, 6, 7]);
    }

    #[test]
    fn whitespace_separators_are_accepted() {
        assert_eq!(parse_day_list(" 10  12\t14 ").unwrap(), vec![10, 12, 14]);
        assert_eq!(parse_day_list("1, 2 ,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn overlapping_entries_collapse() {
        assert_eq!(parse_day_list("1-5,3-7,5").unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn single_day_range() {
        assert_eq!(parse_day_list("9-9").unwrap(), vec![9]);
    }

    #[test]
    fn blank_list_is_empty() {
        assert!(parse_day_list("").unwrap().is_empty());
        assert!(parse_day_list(" , ,").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_day_list("1,x"),
            Err(DayListError::InvalidEntry("x".to_string()))
        );
        assert_eq!(
            parse_day_list("1-"),
            Err(DayListError::InvalidEntry("1-".to_string()))
        );
        assert_eq!(
            parse_day_list("-3"),
            Err(DayListError::InvalidEntry("-3".to_string()))
        );
    }

    #[test]
    fn rejects_days_outside_any_month() {
        assert_eq!(
            parse_day_list("0-2"),
            Err(DayListError::OutOfRange("0-2".to_string()))
        );
        assert_eq!(
            parse_day_list("30-32"),
            Err(DayListError::OutOfRange("30-32".to_string()))
        );
    }

    #[test]
    fn rejects_reversed_range() {
        assert_eq!(
            parse_day_list("7-3"),
            Err(DayListError::ReversedRange("7-3".to_string()))
        );
    }
}
