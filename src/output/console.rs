// Mon Oct 19 2026 - Alex

use crate::output::{ImageOutcome, ImageReport, OutputFormatter};
use colored::{Color, Colorize};
use std::io::{self, Write};

pub struct ConsoleRenderer {
    use_color: bool,
}

impl ConsoleRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn render<W: Write>(&self, out: &mut W, outcome: &ImageOutcome) -> io::Result<()> {
        match outcome {
            ImageOutcome::Analyzed(report) => self.render_report(out, report),
            ImageOutcome::Failed { source, .. } => {
                writeln!(out, "{}", self.paint(&OutputFormatter::failure_line(source), Color::Red))?;
                writeln!(out)
            }
        }
    }

    pub fn render_report<W: Write>(&self, out: &mut W, report: &ImageReport) -> io::Result<()> {
        writeln!(out, "{}", OutputFormatter::scanning_line(report))?;

        if report.report.smu_modules.is_empty() {
            writeln!(out, "{}", self.paint(OutputFormatter::no_modules_line(), Color::Red))?;
        } else {
            for module in &report.report.smu_modules {
                writeln!(out, "{}", self.paint(&OutputFormatter::module_line(module), Color::Green))?;
            }
        }

        writeln!(out)
    }

    pub fn render_done<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Done.")?;
        out.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
