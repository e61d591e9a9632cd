//! Renders command results as text or JSON.

use serde::Serialize;
use tabled::{Table, Tabled};

use recordhook_core::result::AppResult;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print one row per processed item, or a JSON array.
pub fn print_rows<T: Serialize + Tabled>(
    rows: &[T],
    format: OutputFormat,
    empty: &str,
) -> AppResult<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("{empty}"),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(rows)?,
    }
    Ok(())
}

/// Print a titled block of `key: value` lines, or `value` as JSON.
pub fn print_summary<T: Serialize>(
    title: &str,
    pairs: &[(&str, String)],
    value: &T,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Table => print!("{}", render_summary(title, pairs)),
        OutputFormat::Json => print_json(value)?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_summary(title: &str, pairs: &[(&str, String)]) -> String {
    let mut out = format!("{title}\n");
    for (key, value) in pairs {
        out.push_str(&kv_line(key, value));
        out.push('\n');
    }
    out
}

fn kv_line(key: &str, value: &str) -> String {
    format!("  {:<18} {}", format!("{key}:"), value)
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("{}", kv_line(key, value));
}
