//! Reporting and plotting helpers.
//!
//! This module wraps plotting helpers (Plotly) and a small HTML report
//! builder used to present comparison results. Plots are small helper
//! functions converting numerical data into `plotly::Plot`; the report embeds
//! them inline together with the comparison table.
pub mod plots;

use std::io;
use std::path::Path;

use chrono::Local;
use maud::{html, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::comparison::ComparisonResult;

const STYLE: &str = "body { font-family: sans-serif; margin: 2em; } \
table { border-collapse: collapse; } \
th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: right; } \
th:first-child, td:first-child { text-align: left; }";

/// One titled block of report content: paragraphs, tables, and inline plots.
pub struct ReportSection {
    heading: String,
    blocks: Vec<String>,
}

impl ReportSection {
    pub fn new(heading: &str) -> Self {
        ReportSection {
            heading: heading.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_paragraph(&mut self, text: &str) {
        self.blocks.push(html! { p { (text) } }.into_string());
    }

    pub fn add_table(&mut self, table: &ComparisonResult) {
        let markup = html! {
            table {
                thead {
                    tr { th { "Model" } th { "RMSE" } th { "R-Squared" } }
                }
                tbody {
                    @for row in table.rows() {
                        tr {
                            td { (row.label) }
                            td { (format!("{:.4}", row.rmse)) }
                            td { (format!("{:.4}", row.r_squared)) }
                        }
                    }
                }
            }
        };
        self.blocks.push(markup.into_string());
    }

    pub fn add_plot(&mut self, plot: &Plot) {
        self.blocks.push(plot.to_inline_html(None));
    }
}

/// A standalone HTML report assembled from sections.
pub struct Report {
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Report {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> String {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    h1 { (self.title) }
                    @for section in &self.sections {
                        section {
                            h2 { (section.heading) }
                            @for block in &section.blocks {
                                (PreEscaped(block.as_str()))
                            }
                        }
                    }
                    footer {
                        small { (format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M:%S"))) }
                    }
                }
            }
        }
        .into_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ComparisonResult;

    #[test]
    fn report_renders_sections_and_title() {
        let mut section = ReportSection::new("Results");
        section.add_paragraph("Five models compared.");
        section.add_table(&ComparisonResult::default());

        let mut report = Report::new("Regression benchmark");
        report.add_section(section);

        let htmlout = report.render();
        assert!(htmlout.contains("Regression benchmark"));
        assert!(htmlout.contains("Results"));
        assert!(htmlout.contains("R-Squared"));
    }
}
