//! Rendering of record sequences as JSON, CSV or an aligned text table.
//!
//! # Column schema
//!
//! CSV and table output take their columns from the **first** record's keys.
//! A later record missing one of those keys yields an empty cell; a key that
//! only appears in later records is dropped. Providers return uniform records
//! per endpoint so this holds in practice, but nothing enforces it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{CoreError, Record, ValidationError, Value};

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Pretty,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::Json, Self::Csv, Self::Pretty];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Pretty => "pretty",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ValidationError::UnsupportedFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// Render `records` in `format`. The result carries no trailing newline.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String, CoreError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(records)?),
        OutputFormat::Csv => Ok(render_csv(records)),
        OutputFormat::Pretty => Ok(render_pretty(records)),
    }
}

/// Header columns shared by the CSV and table renderers.
fn header(records: &[Record]) -> Vec<&str> {
    records
        .first()
        .map(|first| first.keys().collect())
        .unwrap_or_default()
}

pub fn render_csv(records: &[Record]) -> String {
    let columns = header(records);
    if columns.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|column| csv_field(column))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = columns
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .map(|value| csv_field(&value.to_string()))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// Aligned table. A single record is transposed into `key | value` rows.
pub fn render_pretty(records: &[Record]) -> String {
    match records {
        [single] => {
            let rows = single
                .iter()
                .map(|(key, value)| vec![Cell::text(key), Cell::from_value(value)])
                .collect::<Vec<_>>();
            Table::new(vec!["key", "value"], rows).render()
        }
        _ => {
            let columns = header(records);
            if columns.is_empty() {
                return String::new();
            }
            let rows = records
                .iter()
                .map(|record| {
                    columns
                        .iter()
                        .map(|column| record.get(column).map_or_else(Cell::empty, Cell::from_value))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            Table::new(columns, rows).render()
        }
    }
}

struct Cell {
    text: String,
    numeric: bool,
}

impl Cell {
    fn text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            numeric: false,
        }
    }

    fn empty() -> Self {
        Self::text("")
    }

    fn from_value(value: &Value) -> Self {
        Self {
            text: value.to_string().replace(['\n', '\r'], " "),
            numeric: value.is_number(),
        }
    }
}

struct Table<'a> {
    columns: Vec<&'a str>,
    rows: Vec<Vec<Cell>>,
}

impl<'a> Table<'a> {
    fn new(columns: Vec<&'a str>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| width(&cell.text))
                    .fold(width(column), usize::max)
            })
            .collect()
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let rule = format!(
            "+{}+",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(rule.clone());
        lines.push(line(
            self.columns.iter().zip(&widths).map(|(column, w)| pad_left(column, *w)),
        ));
        lines.push(rule.clone());
        for row in &self.rows {
            lines.push(line(row.iter().zip(&widths).map(|(cell, w)| {
                if cell.numeric {
                    pad_right(&cell.text, *w)
                } else {
                    pad_left(&cell.text, *w)
                }
            })));
        }
        lines.push(rule);

        lines.join("\n")
    }
}

fn line(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Text flush left, padded on the right.
fn pad_left(text: &str, w: usize) -> String {
    format!("{text}{}", " ".repeat(w.saturating_sub(width(text))))
}

/// Text flush right, padded on the left.
fn pad_right(text: &str, w: usize) -> String {
    format!("{}{text}", " ".repeat(w.saturating_sub(width(text))))
}
