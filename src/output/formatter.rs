// Mon Oct 19 2026 - Alex

use crate::firmware::SmuModule;
use crate::output::ImageReport;

/// Plain-text line layout shared by the console renderer.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Kilobytes rounded to the nearest whole number, with `,` between thousands.
    pub fn format_kb(bytes: u64) -> String {
        let kb = (bytes as f64 / 1024.0).round() as u64;
        Self::group_thousands(kb)
    }

    pub fn group_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        grouped
    }

    pub fn scanning_line(report: &ImageReport) -> String {
        let mut line = format!("Scanning: {} ({} KB)", report.name, Self::format_kb(report.size as u64));
        if let Some(agesa) = &report.report.agesa {
            line.push(' ');
            line.push_str(agesa.as_str());
        }
        line
    }

    pub fn module_line(module: &SmuModule) -> String {
        format!(
            "   {} ({:>3} KB) [{:08X} - {:08X}]",
            module.version,
            Self::format_kb(module.length as u64),
            module.start,
            module.end
        )
    }

    pub fn no_modules_line() -> &'static str {
        "Could not find any smu modules"
    }

    pub fn failure_line(source: &str) -> String {
        format!("Could not retrieve bios from {}", source)
    }
}
