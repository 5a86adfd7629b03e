//! Streaming report writer for discovered solutions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::render::{ENTRY_BLOCKED, EXIT_BLOCKED, NO_SOLUTIONS, render_solution};
use crate::core::search::SolutionSink;
use crate::core::solution::Solution;

/// Writes one rendered block per accepted solution to `W`.
pub struct ReportWriter<W: Write> {
    out: W,
    written: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("create report {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Solutions written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Record that the exit and/or entry cell is a wall. Exit is reported first.
    pub fn write_blocked(&mut self, entry: bool, exit: bool) -> io::Result<()> {
        if exit {
            writeln!(self.out, "{EXIT_BLOCKED}")?;
        }
        if entry {
            writeln!(self.out, "{ENTRY_BLOCKED}")?;
        }
        Ok(())
    }

    /// Write the "no solutions" notice if nothing was written, then flush.
    pub fn finish(mut self) -> io::Result<W> {
        if self.written == 0 {
            writeln!(self.out, "{NO_SOLUTIONS}")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    /// Flush without any trailing notice.
    pub fn close(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SolutionSink for ReportWriter<W> {
    type Error = io::Error;

    fn accept(&mut self, solution: &Solution) -> io::Result<ControlFlow<()>> {
        let block = render_solution(solution)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.out.write_all(block.as_bytes())?;
        self.written += 1;
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::parse_report;
    use crate::core::search::PathSearch;
    use crate::test_support::open_grid;

    fn into_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("utf8 report")
    }

    #[test]
    fn report_lists_solutions_in_discovery_order() {
        let mut grid = open_grid(2, 2);
        let mut writer = ReportWriter::new(Vec::new());
        let summary = PathSearch::new(&mut grid).run(&mut writer).expect("search");
        assert_eq!(summary.solutions, 2);
        assert_eq!(writer.written(), 2);

        let text = into_string(writer.finish().expect("finish"));
        assert_eq!(
            text,
            "PATH NUMBER: 1\nSTART. ENTER FROM NORTH.\nSOUTH\nEAST\nEXIT SOUTH. END PATH.\n\n\
             PATH NUMBER: 2\nSTART. ENTER FROM NORTH.\nEAST\nSOUTH\nEXIT SOUTH. END PATH.\n\n"
        );
        assert_eq!(parse_report(&text).expect("parse").len(), 2);
    }

    #[test]
    fn finish_without_solutions_writes_notice() {
        let writer = ReportWriter::new(Vec::new());
        let text = into_string(writer.finish().expect("finish"));
        assert_eq!(text, "No solutions\n");
    }

    #[test]
    fn blocked_notices_put_exit_first() {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_blocked(true, true).expect("write");
        let text = into_string(writer.close().expect("close"));
        assert_eq!(
            text,
            "Exit is blocked. No solutions.\nEntry point blocked. No solutions.\n"
        );
    }

    #[test]
    fn create_writes_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("solution.out");
        let writer = ReportWriter::create(&path).expect("create");
        writer.finish().expect("finish");
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text, "No solutions\n");
    }
}
