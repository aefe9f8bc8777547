//! Terminal output: styled messages, the cart table, and JSON mode.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
///
/// In JSON mode only machine-readable documents reach stdout; human messages
/// are suppressed and errors go to stderr as `{"error": "..."}`.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.stdout(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.stdout(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    /// Section title, preceded by a blank line.
    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Print a JSON document to stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print an indented `key: value` pair.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Print a table sized to its content. The last column is right-aligned
    /// so amounts line up.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }

        let widths = column_widths(headers, rows);
        println!("  {}", style(format_row(headers, &widths)).dim());
        for row in rows {
            let cols: Vec<&str> = row.iter().map(String::as_str).collect();
            println!("  {}", format_row(&cols, &widths));
        }
    }

    /// Spinner shown while waiting on the network. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn stdout(&self, symbol: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", symbol, msg);
        }
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, col) in widths.iter_mut().zip(row) {
            *width = (*width).max(col.chars().count());
        }
    }
    widths
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let last = widths.len().saturating_sub(1);
    cols.iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (col, width))| {
            if i == last {
                format!("{:>width$}", col, width = width)
            } else {
                format!("{:<width$}", col, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
