// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Lookup panels:
//! ```text
//! Certificate Verified
//!   Number:        146882
//!   Name:          Mary Kevin
//!   Qualification: Level 3 TESOL
//!   Date:          23/08/2022
//!   Status:        Authentic & Valid
//! ```
//! ```text
//! Certificate not found.
//!   Please check the number and try again.
//! ```

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::plural;
use crate::color::scheme;
use crate::matcher::LookupOutcome;
use crate::record::CertificateRecord;

/// Width of the label column in the found panel.
const LABEL_WIDTH: usize = 15;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the success or failure panel for a lookup.
    pub fn write_outcome(&mut self, outcome: &LookupOutcome) -> std::io::Result<()> {
        match outcome {
            LookupOutcome::Found { record, .. } => self.write_found(record),
            LookupOutcome::NotFound => self.write_not_found(),
        }
    }

    fn write_found(&mut self, record: &CertificateRecord) -> std::io::Result<()> {
        self.styled(&scheme::verified(), "Certificate Verified")?;
        writeln!(self.out)?;

        self.field("Number:", &record.number, Some(scheme::number()))?;
        self.field("Name:", &record.recipient, None)?;
        self.field("Qualification:", &record.qualification, None)?;
        self.field("Date:", &record.award_date, None)?;
        if !record.status.is_empty() {
            self.field("Status:", &record.status, Some(scheme::status()))?;
        }
        Ok(())
    }

    fn write_not_found(&mut self) -> std::io::Result<()> {
        self.styled(&scheme::not_found(), "Certificate not found.")?;
        writeln!(self.out)?;
        self.out.set_color(&scheme::hint())?;
        writeln!(self.out, "  Please check the number and try again.")?;
        self.out.reset()
    }

    /// Write one line per record followed by a count summary.
    pub fn write_list(&mut self, records: &[CertificateRecord]) -> std::io::Result<()> {
        let number_width = column_width(records, |r| &r.number);
        let recipient_width = column_width(records, |r| &r.recipient);
        let qualification_width = column_width(records, |r| &r.qualification);

        for record in records {
            self.out.set_color(&scheme::number())?;
            write!(self.out, "{:<number_width$}", record.number)?;
            self.out.reset()?;
            let line = format!(
                "  {:<recipient_width$}  {:<qualification_width$}  {}",
                record.recipient, record.qualification, record.award_date
            );
            writeln!(self.out, "{}", line.trim_end())?;
        }

        let count = records.len();
        writeln!(self.out, "{} certificate{}", count, plural(count))
    }

    fn field(&mut self, label: &str, value: &str, color: Option<ColorSpec>) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.styled(&scheme::label(), &format!("{label:<LABEL_WIDTH$}"))?;
        match color {
            Some(spec) => self.styled(&spec, value)?,
            None => write!(self.out, "{}", value)?,
        }
        writeln!(self.out)
    }

    fn styled(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

fn column_width(records: &[CertificateRecord], field: impl Fn(&CertificateRecord) -> &str) -> usize {
    records
        .iter()
        .map(|r| field(r).chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
