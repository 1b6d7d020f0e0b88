//! Result formatting
//!
//! Column names are turned into labels (`Hire_Date` -> `Hire Date`) and rows
//! are rendered in one of three shapes:
//! - text: `Label: value, Label: value` per line
//! - table: a rounded terminal table
//! - json: an array of objects keyed by label

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::storage::ResultSet;
use crate::Error;

/// How answers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Table, OutputFormat::Json]
    }

    /// Render a non-empty result set
    pub fn render(&self, result: &ResultSet) -> String {
        match self {
            OutputFormat::Text => render_text(result),
            OutputFormat::Table => render_table(result),
            OutputFormat::Json => render_json(result),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Turn a column name into a display label.
///
/// Underscores become spaces, and every letter that follows a non-letter is
/// upper-cased while the rest are lower-cased.
pub fn column_label(column: &str) -> String {
    let mut label = String::with_capacity(column.len());
    let mut at_word_start = true;

    for ch in column.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if at_word_start {
                label.extend(ch.to_uppercase());
            } else {
                label.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            label.push(ch);
            at_word_start = true;
        }
    }

    label
}

fn labels(result: &ResultSet) -> Vec<String> {
    result.columns.iter().map(|c| column_label(c)).collect()
}

pub fn render_text(result: &ResultSet) -> String {
    let labels = labels(result);

    result
        .rows
        .iter()
        .map(|row| {
            labels
                .iter()
                .zip(row)
                .map(|(label, cell)| format!("{}: {}", label, cell))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_table(result: &ResultSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(labels(result));
    for row in &result.rows {
        builder.push_record(row.iter().map(|cell| cell.to_string()));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_json(result: &ResultSet) -> String {
    let labels = labels(result);

    let rows: Vec<Value> = result
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = labels
                .iter()
                .zip(row)
                .map(|(label, cell)| (label.clone(), serde_json::to_value(cell).unwrap_or(Value::Null)))
                .collect();
            Value::Object(object)
        })
        .collect();

    format!("{:#}", Value::Array(rows))
}
