//! Plain-text rendering of products and invoices.
//!
//! Rendering is where rounding happens: money is formatted to two decimal
//! places here, while the pricing engine keeps full precision. These
//! functions return strings and never print; the CLI decides where output
//! goes.

use crate::model::Product;
use crate::pricing::Invoice;
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 15;
const NAME_WIDTH: usize = 20;
const RULE: &str = "---------------------------------------------";

/// A label/value block for one product.
pub fn product(product: &Product) -> String {
    let mut out = String::new();
    push_field(&mut out, "Product No.", &product.id.to_string());
    push_field(&mut out, "Name", &product.name);
    push_field(&mut out, "Price", &money(product.price));
    push_field(&mut out, "Discount", &format!("{}%", product.discount_percent));
    out
}

/// A sequence of product blocks separated by rules, in the given order.
pub fn products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products in the catalog.\n".to_string();
    }
    let mut out = String::new();
    for p in products {
        out.push_str(&product(p));
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Tabular invoice: one row per priced line and a TOTAL line. Skipped
/// lines are not part of the table; callers report [`Invoice::missing`]
/// through their own messaging.
pub fn invoice(invoice: &Invoice) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<name$} {:>6} {:>10} {:>12} {:>12}\n",
        "No.",
        "Name",
        "Qty",
        "Price",
        "Amount",
        "Discounted",
        name = NAME_WIDTH
    ));
    out.push_str(RULE);
    out.push('\n');

    for row in &invoice.rows {
        out.push_str(&format!(
            "{:<6} {} {:>6} {:>10} {:>12} {:>12}\n",
            row.product_id,
            pad_name(&row.name),
            row.quantity,
            money(row.unit_price),
            money(row.amount),
            money(row.discounted),
        ));
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{:>width$} {}\n",
        "TOTAL =",
        money(invoice.total),
        width = 6 + 1 + NAME_WIDTH + 1 + 6 + 1 + 10 + 1 + 12
    ));

    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{:<width$}: {}\n", label, value, width = LABEL_WIDTH));
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

// format! width specifiers count chars, not columns; pad by display width so
// names with wide glyphs keep the table aligned.
fn pad_name(name: &str) -> String {
    let width = name.width();
    if width >= NAME_WIDTH {
        return name.to_string();
    }
    format!("{}{}", name, " ".repeat(NAME_WIDTH - width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Order;
    use crate::pricing::price_order;

    fn rice() -> Product {
        Product::new(
            1,
            "Rice".to_string(),
            "50.00".parse().unwrap(),
            "10".parse().unwrap(),
        )
    }

    fn sample_catalog() -> Catalog {
        let mut c = Catalog::new();
        c.create(rice()).unwrap();
        c
    }

    #[test]
    fn product_block_has_labelled_fields() {
        let text = product(&rice());
        assert!(text.contains("Product No.    : 1"));
        assert!(text.contains("Name           : Rice"));
        assert!(text.contains("Price          : 50.00"));
        assert!(text.contains("Discount       : 10%"));
    }

    #[test]
    fn empty_catalog_renders_placeholder() {
        assert_eq!(products(&[]), "No products in the catalog.\n");
    }

    #[test]
    fn invoice_has_rows_and_total() {
        let mut order = Order::new();
        order.add_line(1, 2);
        order.add_line(42, 1);

        let text = invoice(&price_order(&order, &sample_catalog()));
        assert!(text.contains("Rice"));
        assert!(text.contains("90.00"));
        assert!(text.contains("TOTAL ="));
        // The skipped line gets no row; reporting it is the caller's job.
        assert!(!text.contains("42"));
    }

    #[test]
    fn money_is_rounded_at_display_time_only() {
        // A third of a cent exists in the engine but not on paper.
        assert_eq!(money("0.333333".parse().unwrap()), "0.33");
        assert_eq!(money("10".parse().unwrap()), "10.00");
    }
}
