use crate::form::{ValidationError, missing_fields};
use crate::models::Period;

/// Validated client/project/subject/period bundle handed to the exporters.
///
/// Only obtainable through [`ReportCriteria::new`] (or
/// [`ReportForm::validate`](crate::ReportForm::validate)), so every instance
/// carries non-blank text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCriteria {
    client_name: String,
    project_name: String,
    subject: String,
    period: Period,
}

impl ReportCriteria {
    /// Builds a criteria snapshot, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] listing every blank field,
    /// in form order.
    ///
    /// # Example
    ///
    /// ```
    /// use report_core::{Period, ReportCriteria, RequiredField, ValidationError};
    ///
    /// let period = Period::new(1, 2025).unwrap();
    /// let err = ReportCriteria::new("", "Apollo", "  ", period).unwrap_err();
    ///
    /// assert_eq!(
    ///     err,
    ///     ValidationError::MissingField(vec![RequiredField::ClientName, RequiredField::Subject])
    /// );
    /// ```
    pub fn new(
        client_name: &str,
        project_name: &str,
        subject: &str,
        period: Period,
    ) -> Result<Self, ValidationError> {
        let missing = missing_fields(client_name, project_name, subject);

        if !missing.is_empty() {
            return Err(ValidationError::MissingField(missing));
        }

        Ok(Self {
            client_name: client_name.trim().to_string(),
            project_name: project_name.trim().to_string(),
            subject: subject.trim().to_string(),
            period,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn period(&self) -> Period {
        self.period
    }
}
