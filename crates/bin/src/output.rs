//! Output formatting helpers for JSON and tabular output.

use clap::ValueEnum;
use pathwise::{FlattenOptions, Value, flatten};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
    /// One `path  value` row per leaf
    Table,
}

/// Print `value` to stdout in the selected format.
pub fn emit(value: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value.to_json())?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&value.to_json())?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = flatten(value, &FlattenOptions::default().with_normalize_key_casing(false))
                .into_iter()
                .map(|(path, leaf)| vec![path, leaf.to_string()])
                .collect();
            print_table(&["PATH", "VALUE"], &rows);
        }
    }
    Ok(())
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
