//! Plain tables rendered as fixed-width ASCII or Markdown.

use crate::report::ReportFormat;
use polars::prelude::*;
use tally_analysis::{ClientSummary, ColumnStats, ScaledClientSummary, ValueCount};

/// A table of preformatted cells.
///
/// The first column is left-aligned, every other column right-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of body rows.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no body rows.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_ascii(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Format as a fixed-width table for terminal display.
    pub fn to_ascii(&self) -> String {
        let widths = self.widths();
        let mut output = String::new();

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, &w))| {
                    if i == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        output.push_str(&line(&self.headers));
        output.push('\n');
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&line(row));
            output.push('\n');
        }

        output
    }

    /// Format as a Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("| {} |\n", self.headers.join(" | ")));
        let align: Vec<&str> = (0..self.headers.len())
            .map(|i| if i == 0 { "---" } else { "---:" })
            .collect();
        output.push_str(&format!("|{}|\n", align.join("|")));
        for row in &self.rows {
            output.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        output
    }
}

fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Value frequencies, most frequent first.
pub fn value_count_table(label: &str, counts: &[ValueCount]) -> Table {
    let mut table = Table::new([label, "Count"]);
    for vc in counts {
        table.push_row([vc.value.to_string(), vc.count.to_string()]);
    }
    table
}

/// Summary statistics, one row per numeric column.
pub fn column_stats_table(stats: &[ColumnStats]) -> Table {
    let mut table = Table::new([
        "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ]);
    for s in stats {
        table.push_row([
            s.column.clone(),
            s.count.to_string(),
            stat(s.mean),
            stat(s.std),
            stat(s.min),
            stat(s.q25),
            stat(s.median),
            stat(s.q75),
            stat(s.max),
        ]);
    }
    table
}

/// Revenue per client, unscaled.
pub fn client_revenue_table(summaries: &[ClientSummary]) -> Table {
    let mut table = Table::new(["Client ID", "Total Revenue"]);
    for s in summaries {
        table.push_row([s.key.to_string(), format!("{:.2}", s.total_revenue)]);
    }
    table
}

/// Client summary in millions.
pub fn scaled_summary_table(summaries: &[ScaledClientSummary]) -> Table {
    let mut table = Table::new([
        "Client ID",
        "Total Units (M)",
        "Total Shipping Price (M$)",
        "Total Revenue (M$)",
        "Total Profit (M$)",
    ]);
    for s in summaries {
        table.push_row([
            s.key.to_string(),
            format!("{:.2}", s.total_units),
            format!("{:.2}", s.total_shipping_price),
            format!("{:.2}", s.total_revenue),
            format!("{:.2}", s.total_profit),
        ]);
    }
    table
}

/// First `n` rows of a frame, every column.
pub fn frame_preview(df: &DataFrame, n: usize) -> Table {
    let head = df.head(Some(n));
    let mut table = Table::new(head.get_column_names().iter().map(|c| c.to_string()));

    for i in 0..head.height() {
        let cells = head.get_columns().iter().map(|column| {
            column
                .get(i)
                .map(|value| cell(&value))
                .unwrap_or_default()
        });
        table.push_row(cells);
    }

    table
}

fn cell(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{v:.2}"),
        AnyValue::Float32(v) => format!("{v:.2}"),
        other => other.to_string(),
    }
}
