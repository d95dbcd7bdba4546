use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Ids are caller-supplied, not generated; the catalog enforces that at most
/// one live product carries a given id. Price and discount use exact decimal
/// arithmetic. Ranges (`price >= 0`, `0 <= discount_percent <= 100`) are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit price before discount.
    pub price: Decimal,
    /// Percentage reduction applied at order time.
    pub discount_percent: Decimal,
}

impl Product {
    pub fn new(id: u32, name: String, price: Decimal, discount_percent: Decimal) -> Self {
        Self {
            id,
            name,
            price,
            discount_percent,
        }
    }
}

/// One (product id, quantity) entry within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// An ordered sequence of order lines.
///
/// Orders live for one checkout session and are never persisted. They carry
/// no running total; the pricing engine recomputes the invoice in full every
/// time so lines and totals cannot diverge.
#[derive(Debug, Clone, Default)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, product_id: u32, quantity: u32) {
        self.lines.push(OrderLine::new(product_id, quantity));
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
