//! Building domain values from raw field input.
//!
//! The interaction shell collects product and order fields one prompt at a
//! time. Everything here takes raw strings (or any `BufRead` supplying one
//! field per line) and validates **types only** — numeric fields must parse,
//! but ranges like `price >= 0` are deliberately not enforced.

use crate::error::{Result, TallyError};
use crate::model::{OrderLine, Product};
use rust_decimal::Decimal;
use std::io::BufRead;

pub fn parse_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| TallyError::Input(format!("Invalid product id: {}", raw.trim())))
}

pub fn parse_quantity(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| TallyError::Input(format!("Invalid quantity: {}", raw.trim())))
}

pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    raw.trim()
        .parse()
        .map_err(|_| TallyError::Input(format!("Invalid number: {}", raw.trim())))
}

fn read_field<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).map_err(TallyError::Io)?;
    if n == 0 {
        return Err(TallyError::Input("Unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Read a full product from the reader, one field per line:
/// id, name, price, discount percent.
pub fn read_product<R: BufRead>(reader: &mut R) -> Result<Product> {
    let id = parse_id(&read_field(reader)?)?;
    let name = read_field(reader)?;
    let price = parse_decimal(&read_field(reader)?)?;
    let discount_percent = parse_decimal(&read_field(reader)?)?;
    Ok(Product::new(id, name, price, discount_percent))
}

/// Read one order line from the reader: product id, then quantity.
pub fn read_order_line<R: BufRead>(reader: &mut R) -> Result<OrderLine> {
    let product_id = parse_id(&read_field(reader)?)?;
    let quantity = parse_quantity(&read_field(reader)?)?;
    Ok(OrderLine::new(product_id, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_a_product_field_by_field() {
        let mut input = Cursor::new("1\nRice\n50.00\n10\n");
        let product = read_product(&mut input).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Rice");
        assert_eq!(product.price, "50.00".parse().unwrap());
        assert_eq!(product.discount_percent, "10".parse().unwrap());
    }

    #[test]
    fn rejects_non_numeric_price() {
        let mut input = Cursor::new("1\nRice\ncheap\n10\n");
        assert!(matches!(
            read_product(&mut input),
            Err(TallyError::Input(_))
        ));
    }

    #[test]
    fn ranges_are_not_enforced() {
        // Negative price and a discount over 100 are caller responsibility.
        let mut input = Cursor::new("1\nRice\n-5\n250\n");
        let product = read_product(&mut input).unwrap();
        assert_eq!(product.price, "-5".parse().unwrap());
        assert_eq!(product.discount_percent, "250".parse().unwrap());
    }

    #[test]
    fn truncated_input_is_an_input_error() {
        let mut input = Cursor::new("1\nRice\n");
        assert!(matches!(
            read_product(&mut input),
            Err(TallyError::Input(_))
        ));
    }

    #[test]
    fn reads_an_order_line() {
        let mut input = Cursor::new("3\n2\n");
        let line = read_order_line(&mut input).unwrap();
        assert_eq!(line.product_id, 3);
        assert_eq!(line.quantity, 2);
    }
}
