//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rocket_commerce::cart::{Cart, Notice};
use rocket_commerce::format_price;
use serde::Serialize;

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
    pub fn json<T: Serialize>(&self, value: &T) {
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

    /// Print a notice raised by a cart operation.
    pub fn notice(&self, notice: Notice) {
        self.warn(notice.message());
    }

    /// Print the cart, as a table or as JSON.
    pub fn cart(&self, cart: &Cart, notices: &[Notice]) {
        if self.json {
            self.json(&CartView::new(cart, notices));
            return;
        }

        self.header(&format!("Cart ({} item(s))", cart.len()));
        if cart.is_empty() {
            self.info("Your cart is empty.");
            return;
        }

        const WIDTHS: [usize; 5] = [6, 32, 12, 6, 12];
        self.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &WIDTHS);
        for item in cart {
            let id = item.id.to_string();
            let title = truncate(&item.title, WIDTHS[1]);
            let price = format_price(item.price);
            let amount = item.amount.to_string();
            let subtotal = item.subtotal().to_string();
            self.table_row(
                &[id.as_str(), title.as_str(), price.as_str(), amount.as_str(), subtotal.as_str()],
                &WIDTHS,
            );
        }
        println!();
        self.kv("Total", &style(cart.total()).bold().to_string());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// JSON shape of the `cart` output.
#[derive(Serialize)]
struct CartView<'a> {
    items: &'a Cart,
    lines: usize,
    total: String,
    notices: Vec<&'static str>,
}

impl<'a> CartView<'a> {
    fn new(cart: &'a Cart, notices: &[Notice]) -> Self {
        Self {
            items: cart,
            lines: cart.len(),
            total: cart.total().to_string(),
            notices: notices.iter().map(Notice::message).collect(),
        }
    }
}

/// Shorten text to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket_commerce::catalog::CatalogEntry;
    use rocket_commerce::ProductId;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tênis", 10), "Tênis");
        assert_eq!(truncate("Tênis de Caminhada", 6), "Tênis…");
    }

    #[test]
    fn test_cart_view_json() {
        let entry = CatalogEntry {
            id: ProductId::new(1),
            title: "Tênis de Caminhada Leve Confortável".into(),
            price: 179.9,
            image: "https://example.com/1.jpg".into(),
        };
        let cart = Cart::restore(vec![entry.into_line(2)]);

        let value = serde_json::to_value(CartView::new(&cart, &[Notice::OutOfStock])).unwrap();
        assert_eq!(value["lines"], 1);
        assert_eq!(value["total"], "R$ 359,80");
        assert_eq!(value["items"][0]["amount"], 2);
        assert_eq!(value["notices"][0], "requested quantity unavailable");
    }
}
