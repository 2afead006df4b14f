use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output document type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    #[default]
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export format '{other}' (expected xlsx or pdf)")),
        }
    }
}

/// Page layout used by the PDF exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfLayout {
    /// Day/weekday/status table of worked days.
    Table,
    /// Month grid with colored day cells.
    #[default]
    Calendar,
}

impl PdfLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Calendar => "calendar",
        }
    }

    /// Tag embedded in PDF file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Self::Table => "plain",
            Self::Calendar => "calendar",
        }
    }
}

impl fmt::Display for PdfLayout {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PdfLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "plain" => Ok(Self::Table),
            "calendar" => Ok(Self::Calendar),
            other => Err(format!("unknown PDF layout '{other}' (expected table or calendar)")),
        }
    }
}
