//! Care schedule writers.
//!
//! Both implement [`ExportSink`] over any [`io::Write`]: a file, stdout, or
//! a `Vec<u8>` in tests.

use std::io::{self, Write};

use crate::app::ports::ExportSink;
use crate::error::ExportError;
use crate::export::CareSchedule;

// ───────────────────────────────────────────────────────────────
// Plain text
// ───────────────────────────────────────────────────────────────

/// Printable document layout: title, summary, overview, then one block per
/// category.
pub struct TextScheduleWriter<W: Write> {
    out: W,
}

impl<W: Write> TextScheduleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, s: &CareSchedule<'_>) -> io::Result<()> {
        let title = s.title();
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{}", "=".repeat(title.len()))?;
        writeln!(self.out, "{}", s.summary())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", s.profile.overview)?;

        for category in &s.profile.categories {
            writeln!(self.out)?;
            writeln!(self.out, "{}", category.name)?;
            writeln!(self.out, "{}", "-".repeat(category.name.len()))?;
            for rec in &category.recommendations {
                writeln!(self.out, "{} ({})", rec.title, rec.importance.key())?;
                writeln!(self.out, "  {}", rec.description)?;
                if let Some(freq) = &rec.frequency {
                    writeln!(self.out, "  Frequency: {freq}")?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> ExportSink for TextScheduleWriter<W> {
    fn write_schedule(&mut self, schedule: &CareSchedule<'_>) -> Result<(), ExportError> {
        self.render(schedule)?;
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// JSON
// ───────────────────────────────────────────────────────────────

pub struct JsonScheduleWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonScheduleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ExportSink for JsonScheduleWriter<W> {
    fn write_schedule(&mut self, schedule: &CareSchedule<'_>) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.out, schedule)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
