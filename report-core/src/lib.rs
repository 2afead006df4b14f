pub mod access;
pub mod calendar;
pub mod form;
pub mod models;
pub mod report;
pub mod session;
pub mod worked_days;

pub use access::{AccessPolicy, UserRole};
pub use form::{ReportForm, RequiredField, ValidationError};
pub use models::*;
pub use report::ReportData;
pub use session::ReportSession;
pub use worked_days::{WorkedDayError, WorkedDaySet};
