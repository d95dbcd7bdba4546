//! Order pricing.
//!
//! [`price_order`] turns an [`Order`] and the current [`Catalog`] into an
//! [`Invoice`]. All arithmetic is exact `Decimal` math; no rounding happens
//! here. Callers that need currency-correct rounding round at display time
//! (see [`crate::render`]), which keeps precision drift out of the engine.

use crate::catalog::Catalog;
use crate::model::Order;
use rust_decimal::Decimal;

/// One priced invoice row, in the order the lines were entered.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// `unit_price * quantity`, before discount.
    pub amount: Decimal,
    /// `amount * (1 - discount_percent / 100)`.
    pub discounted: Decimal,
}

/// The computed result of pricing an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    pub rows: Vec<InvoiceRow>,
    /// Exact sum of `discounted` across all rows.
    pub total: Decimal,
    /// Order-line product ids that matched nothing in the catalog. They
    /// contribute no row and no amount, but are surfaced so the caller can
    /// report them instead of silently undercounting.
    pub missing: Vec<u32>,
}

/// Price every order line against the catalog.
///
/// Rows preserve input line order. A line whose product id is unknown
/// produces no row; its id is recorded in [`Invoice::missing`].
pub fn price_order(order: &Order, catalog: &Catalog) -> Invoice {
    let mut invoice = Invoice::default();

    for line in order.lines() {
        match catalog.find(line.product_id) {
            Ok(product) => {
                let amount = product.price * Decimal::from(line.quantity);
                let discounted =
                    amount * (Decimal::ONE - product.discount_percent / Decimal::ONE_HUNDRED);
                invoice.total += discounted;
                invoice.rows.push(InvoiceRow {
                    product_id: product.id,
                    name: product.name.clone(),
                    quantity: line.quantity,
                    unit_price: product.price,
                    amount,
                    discounted,
                });
            }
            Err(_) => invoice.missing.push(line.product_id),
        }
    }

    invoice
}
