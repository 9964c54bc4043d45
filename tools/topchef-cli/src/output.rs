//! Output formatting for the CLI.

use console::style;
use topchef_commerce::cart::{CartView, EMPTY_CART_MESSAGE};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Draw the cart panel.
    pub fn cart(&self, view: &CartView) {
        if self.json {
            self.json(view);
            return;
        }

        self.header(&match view.badge() {
            Some(count) => format!("Panier ({})", count),
            None => "Panier".to_string(),
        });

        if view.is_empty() {
            println!("  {}", style(EMPTY_CART_MESSAGE).dim());
        } else {
            self.table_row(&["ID", "ARTICLE", "QTÉ", "SOUS-TOTAL"], &CART_COLUMNS);
            for item in &view.items {
                let quantity = item.quantity.to_string();
                let id = item.id.to_string();
                self.table_row(
                    &[&id, &item.name, &quantity, &item.subtotal_display],
                    &CART_COLUMNS,
                );
            }
        }

        println!();
        println!("  {} {}", style("Total :").bold(), style(&view.total_display).bold());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

const CART_COLUMNS: [usize; 4] = [14, 28, 5, 16];
