//! HTML export of graded quiz results.

use std::fs;
use std::io;
use std::path::Path;

use maud::{html, Markup, DOCTYPE};
use quiz_core::scoring::QuizReport;
use quiz_core::text::strip_html;

/// Render a graded quiz as a standalone HTML page.
pub fn render_report(report: &QuizReport) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Quiz Results" }
            }
            body {
                h2 { "Quiz Results" }
                p { "Score: " (report.correct) "/" (report.total) " (" (report.percent()) "%)" }
                table border="1" cellpadding="4" {
                    tr {
                        th { "#" }
                        th { "Prompt" }
                        th { "Your Answer" }
                        th { "Correct Answer" }
                    }
                    @for (i, result) in report.results.iter().enumerate() {
                        @let tint = if result.is_correct { "#cfc" } else { "#fcc" };
                        tr style=(format!("background:{tint}")) {
                            td { (i + 1) }
                            td { (strip_html(&result.prompt)) }
                            td { (result.chosen.as_deref().map(strip_html).unwrap_or_default()) }
                            td { (strip_html(&result.correct_answer)) }
                        }
                    }
                }
            }
        }
    }
}

/// Render a report and write it to `path`.
pub fn write_report<P: AsRef<Path>>(path: P, report: &QuizReport) -> io::Result<()> {
    fs::write(path, render_report(report).into_string())
}
