use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single day in the report month.
///
/// `Worked` takes precedence over `Weekend`: a Saturday that was worked is
/// reported as worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    #[serde(rename = "Worked")]
    Worked,
    #[serde(rename = "Not Worked")]
    NotWorked,
    #[serde(rename = "Weekend")]
    Weekend,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worked => "Worked",
            Self::NotWorked => "Not Worked",
            Self::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived, read-only view of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    /// Day of month, starting at 1.
    pub day: u32,
    /// Short English weekday name ("Mon", "Tue", ...).
    pub weekday: &'static str,
    pub status: DayStatus,
}

impl DayInfo {
    /// Day number zero-padded to two digits, as printed in exports.
    pub fn padded_day(&self) -> String {
        format!("{:02}", self.day)
    }

    pub fn is_worked(&self) -> bool {
        self.status == DayStatus::Worked
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_labels_match_report_wording() {
        assert_eq!(DayStatus::Worked.to_string(), "Worked");
        assert_eq!(DayStatus::NotWorked.to_string(), "Not Worked");
        assert_eq!(DayStatus::Weekend.to_string(), "Weekend");
    }

    #[test]
    fn padded_day_pads_single_digits() {
        let info = DayInfo {
            day: 7,
            weekday: "Tue",
            status: DayStatus::Worked,
        };

        assert_eq!(info.padded_day(), "07");
    }

    #[test]
    fn padded_day_keeps_two_digit_days() {
        let info = DayInfo {
            day: 31,
            weekday: "Fri",
            status: DayStatus::NotWorked,
        };

        assert_eq!(info.padded_day(), "31");
    }
}
