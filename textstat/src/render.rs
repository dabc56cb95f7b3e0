//! Text and JSON rendering for CLI output

use std::fmt::{self, Write as _};
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};
use textstatlib::{StatsLabels, StatsTable, TextReport, TextStats};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON of the library types
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON shape for a single counted input
#[derive(Debug, Serialize)]
struct SingleJson<'a> {
    source: &'a str,
    stats: &'a TextStats,
    labels: &'a StatsLabels,
}

/// Style for report labels; plain when stdout is not a terminal
fn label_style() -> Style {
    Style::new().bold()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Render the three counter labels for one input.
///
/// `source` is printed above the labels in text mode when given.
pub fn render_single(
    stats: &TextStats,
    source: &str,
    show_source: bool,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let labels = StatsLabels::from(stats);
    match format {
        OutputFormat::Json => to_json(&SingleJson {
            source,
            stats,
            labels: &labels,
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            if show_source {
                push_line(&mut out, source);
            }
            for line in labels.lines() {
                push_line(&mut out, line);
            }
            Ok(out)
        }
    }
}

/// Render a multi-file table.
pub fn render_table(table: &StatsTable, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(table);
    }

    let widths = table.column_widths();
    let format_line = |label: &str, values: &[String]| -> String {
        let mut line = format!("{:<width$}", label, width = widths[0]);
        for (value, width) in values.iter().zip(&widths[1..]) {
            line.push_str(&format!("  {:>width$}", value, width = *width));
        }
        line
    };

    let total_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let separator = "-".repeat(total_width);

    let mut out = String::new();
    push_line(&mut out, &format_line(&table.headers[0], &table.headers[1..]));
    push_line(&mut out, &separator);
    for row in &table.rows {
        push_line(&mut out, &format_line(&row.label, &row.values));
    }
    if !table.rows.is_empty() {
        push_line(&mut out, &separator);
    }
    push_line(&mut out, &format_line(&table.footer.label, &table.footer.values));
    Ok(out)
}

/// Render the extended report.
pub fn render_report(report: &TextReport, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let r = &report.readability;
    let entries = [
        ("Sentences:", report.sentence_count.to_string()),
        ("Paragraphs:", report.paragraph_count.to_string()),
        (
            "Avg word length:",
            format!("{:.2}", report.average_word_length),
        ),
        (
            "Avg sentence length:",
            format!("{:.2}", report.average_sentence_length),
        ),
        ("Longest word:", report.longest_word.clone()),
        ("Most common word:", report.most_common_word.clone()),
        ("Unique words:", report.unique_word_count.to_string()),
        ("Readability level:", r.english_level.to_string()),
        ("Flesch-Kincaid:", format!("{:.2}", r.flesch_kincaid_grade)),
        (
            "Gunning Fog:",
            format!("{:.2} - {}", r.gunning_fog_index, r.fog_interpretation),
        ),
        (
            "SMOG grade:",
            format!("{:.2} - {}", r.smog_grade, r.smog_interpretation),
        ),
    ];

    let label_width = entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let style = label_style();

    let mut out = String::new();
    for line in StatsLabels::from(&report.stats).lines() {
        push_line(&mut out, line);
    }
    out.push('\n');
    for (label, value) in entries {
        let padded = format!("{:<width$}", label, width = label_width);
        writeln!(out, "{} {}", style.apply_to(padded), value)?;
    }
    Ok(out)
}
