//! Report form state and its validation.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Period, PeriodError, ReportCriteria};

/// Text fields that must be filled before a report can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredField {
    ClientName,
    ProjectName,
    Subject,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientName => "Client name",
            Self::ProjectName => "Project name",
            Self::Subject => "Subject",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Required fields whose value is empty or whitespace, in form order.
pub(crate) fn missing_fields(
    client_name: &str,
    project_name: &str,
    subject: &str,
) -> Vec<RequiredField> {
    [
        (RequiredField::ClientName, client_name),
        (RequiredField::ProjectName, project_name),
        (RequiredField::Subject, subject),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect()
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Every blank required field, in form order.
    #[error("required fields are blank: {}", join_labels(.0))]
    MissingField(Vec<RequiredField>),

    #[error("invalid report period: {0}")]
    InvalidPeriod(#[from] PeriodError),
}

impl ValidationError {
    /// One user-facing line per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::MissingField(fields) => fields
                .iter()
                .map(|field| format!("{field} is required."))
                .collect(),
            Self::InvalidPeriod(err) => vec![format!("Period is invalid: {err}.")],
        }
    }
}

/// Raw values as typed into the report form.
///
/// Month and year default to the current local month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub client_name: String,
    pub project_name: String,
    pub subject: String,
    pub month: u32,
    pub year: i32,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl ReportForm {
    /// Blank form whose period is the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            client_name: String::new(),
            project_name: String::new(),
            subject: String::new(),
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn period(&self) -> Result<Period, PeriodError> {
        Period::new(self.month, self.year)
    }

    /// Checks required fields and the period and returns an immutable
    /// criteria snapshot.
    ///
    /// Blank text fields are reported before period problems, and all blank
    /// fields are reported together.
    ///
    /// # Example
    ///
    /// ```
    /// use report_core::{ReportForm, RequiredField, ValidationError};
    ///
    /// let form = ReportForm {
    ///     client_name: String::new(),
    ///     project_name: "Apollo".into(),
    ///     subject: "Backend work".into(),
    ///     month: 1,
    ///     year: 2025,
    /// };
    ///
    /// assert_eq!(
    ///     form.validate(),
    ///     Err(ValidationError::MissingField(vec![RequiredField::ClientName]))
    /// );
    /// ```
    pub fn validate(&self) -> Result<ReportCriteria, ValidationError> {
        let missing = missing_fields(&self.client_name, &self.project_name, &self.subject);
        if !missing.is_empty() {
            return Err(ValidationError::MissingField(missing));
        }

        let period = self.period()?;
        ReportCriteria::new(&self.client_name, &self.project_name, &self.subject, period)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_form() -> ReportForm {
        ReportForm {
            client_name: "Acme Corp".to_string(),
            project_name: "Apollo".to_string(),
            subject: "Backend work".to_string(),
            month: 1,
            year: 2025,
        }
    }

    #[test]
    fn validate_accepts_filled_form() {
        let criteria = filled_form().validate().unwrap();

        assert_eq!(criteria.client_name(), "Acme Corp");
        assert_eq!(criteria.project_name(), "Apollo");
        assert_eq!(criteria.subject(), "Backend work");
        assert_eq!(criteria.period(), Period::new(1, 2025).unwrap());
    }

    #[test]
    fn validate_reports_blank_client_name() {
        let form = ReportForm {
            client_name: String::new(),
            ..filled_form()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(vec![RequiredField::ClientName]))
        );
    }

    #[test]
    fn validate_treats_whitespace_as_blank() {
        let form = ReportForm {
            subject: " \t ".to_string(),
            ..filled_form()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(vec![RequiredField::Subject]))
        );
    }

    #[test]
    fn validate_lists_every_blank_field_in_form_order() {
        let form = ReportForm::for_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(vec![
                RequiredField::ClientName,
                RequiredField::ProjectName,
                RequiredField::Subject,
            ]))
        );
    }

    #[test]
    fn validate_rejects_out_of_range_month() {
        let form = ReportForm {
            month: 13,
            ..filled_form()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidPeriod(PeriodError::InvalidMonth(13)))
        );
    }

    #[test]
    fn validate_reports_blank_fields_before_bad_period() {
        let form = ReportForm {
            project_name: String::new(),
            month: 0,
            ..filled_form()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(vec![RequiredField::ProjectName]))
        );
    }

    #[test]
    fn validate_trims_surrounding_whitespace() {
        let form = ReportForm {
            client_name: "  Acme Corp  ".to_string(),
            ..filled_form()
        };

        let criteria = form.validate().unwrap();

        assert_eq!(criteria.client_name(), "Acme Corp");
    }

    #[test]
    fn default_form_uses_current_month() {
        let today = Local::now().date_naive();

        let form = ReportForm::default();

        assert_eq!((form.month, form.year), (today.month(), today.year()));
        assert!(form.client_name.is_empty());
    }

    #[test]
    fn missing_field_messages_are_per_field() {
        let err = ValidationError::MissingField(vec![
            RequiredField::ClientName,
            RequiredField::Subject,
        ]);

        assert_eq!(
            err.messages(),
            vec![
                "Client name is required.".to_string(),
                "Subject is required.".to_string(),
            ]
        );
    }

    #[test]
    fn missing_field_display_joins_labels() {
        let err = ValidationError::MissingField(vec![
            RequiredField::ClientName,
            RequiredField::ProjectName,
        ]);

        assert_eq!(
            err.to_string(),
            "required fields are blank: Client name, Project name"
        );
    }
}
