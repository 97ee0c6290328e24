//! Error types for loading, converting and writing documents

use std::io;
use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::config::ConfigError;

/// The input could not be parsed as XML
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Syntax(#[from] roxmltree::Error),
}

impl XmlError {
    /// 1-based (row, column) of the error in the source text
    pub fn position(&self) -> (u32, u32) {
        match self {
            XmlError::Syntax(err) => {
                let pos = err.pos();
                (pos.row, pos.col)
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (row, col) = self.position();
        let total = source.chars().count();
        let start = char_offset(source, row, col).min(total.saturating_sub(1));

        let report = Report::build(ReportKind::Error, filename, start);
        // An empty source has no character to point at
        let report = if total == 0 {
            report.with_message(self.to_string())
        } else {
            report.with_message("malformed XML").with_label(
                Label::new((filename, start..start + 1))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
        };

        let mut buf = Vec::new();
        let written = report
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Character offset of a 1-based row/column position
fn char_offset(source: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        let len = line.chars().count();
        if index + 1 == row as usize {
            return offset + (col as usize).saturating_sub(1).min(len);
        }
        offset += len;
    }
    offset
}

/// Errors that abort a conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Xml(#[from] XmlError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
