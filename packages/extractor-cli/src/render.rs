//! Terminal rendering of result views.

use clap::ValueEnum;
use colored::Colorize;
use extractor::presenter::{FieldRow, JsonView, SummaryView};
use extractor::ResultView;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Summary,
    Fields,
    Text,
    Json,
}

pub fn render(view: &ResultView, which: View) -> String {
    match which {
        View::Summary => render_summary(&view.summary),
        View::Fields => render_fields(&view.rows),
        View::Text => format!("{}\n", view.full_text),
        View::Json => render_json(&view.json),
    }
}

fn render_summary(summary: &SummaryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {}", "File".dimmed(), summary.file_name);
    let _ = writeln!(out, "{:<14} {} chars", "Text length".dimmed(), summary.text_length);
    let _ = writeln!(out, "{:<14} {}", "Fields filled".dimmed(), summary.fields_label());
    let _ = writeln!(
        out,
        "{:<14} {}",
        "Success rate".dimmed(),
        summary.rate_label().bright_green().bold()
    );
    if let Some(at) = summary.extracted_at_label() {
        let _ = writeln!(out, "{:<14} {}", "Extracted at".dimmed(), at);
    }
    out
}

fn render_fields(rows: &[FieldRow]) -> String {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let value = if row.filled {
            row.display_value().normal()
        } else {
            "(not found)".dimmed()
        };
        let _ = writeln!(out, "{:<width$}  {}", row.label, value, width = width);
    }
    out
}

fn render_json(json: &JsonView) -> String {
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}\n",
        "# Filled fields".bold(),
        json.filled,
        "# Empty fields".bold(),
        json.empty,
        "# Complete".bold(),
        json.complete
    )
}
