//! File export payloads for the custom phrase subset.

use chrono::{NaiveDate, Utc};

/// Export file formats for the custom subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Newline-joined plain text.
    Txt,
    /// One quoted value per line, embedded quotes doubled.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain;charset=utf-8",
            ExportFormat::Csv => "text/csv;charset=utf-8",
        }
    }

    /// Build the export payload for a phrase list.
    pub fn payload(&self, phrases: &[String]) -> String {
        match self {
            ExportFormat::Txt => phrases.join("\n"),
            ExportFormat::Csv => phrases
                .iter()
                .map(|p| format!("\"{}\"", p.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// `custom-items-<YYYY-MM-DD>.<ext>` for a given date.
    pub fn filename_for(&self, date: NaiveDate) -> String {
        format!("custom-items-{}.{}", date.format("%Y-%m-%d"), self.extension())
    }

    /// Filename stamped with the current UTC date.
    pub fn filename_today(&self) -> String {
        self.filename_for(Utc::now().date_naive())
    }
}
