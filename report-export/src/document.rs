use report_core::ReportData;

pub const REPORT_TITLE: &str = "Activity Report";
pub const DEFAULT_CREATOR: &str = "Activity Report Generator";

/// Document properties shared by both output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub subject: String,
    /// The client the report is addressed to.
    pub author: String,
    pub creator: String,
    pub keywords: Vec<String>,
}

impl DocumentInfo {
    pub fn for_report(
        data: &ReportData,
        creator: &str,
    ) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            subject: data.criteria.subject().to_string(),
            author: data.criteria.client_name().to_string(),
            creator: creator.to_string(),
            keywords: vec!["activity report".to_string(), "timesheet".to_string()],
        }
    }

    pub fn with_keyword(
        mut self,
        keyword: &str,
    ) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }

    /// Keywords as a single comma-separated string.
    pub fn keyword_list(&self) -> String {
        self.keywords.join(", ")
    }
}
