//! Receipt line items

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::amount::parse_amount;

/// One line of a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub price: f64,
}

impl ReceiptItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Parse `"<name> <price>"`, where the price is the last word
    ///
    /// A bare price is accepted too and gets the name "Item".
    pub fn parse(input: &str) -> LedgerResult<Self> {
        let input = input.trim();
        let (name, price_text) = match input.rsplit_once(char::is_whitespace) {
            Some((name, price)) => (name.trim(), price),
            None => ("", input),
        };

        let price = parse_amount(price_text).ok_or_else(|| {
            LedgerError::validation("Line item needs a price, e.g. \"Milk 2.50\"")
        })?;

        if price < 0.0 {
            return Err(LedgerError::validation("Line item price cannot be negative"));
        }

        let name = if name.is_empty() { "Item" } else { name };
        Ok(Self::new(name, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_price() {
        let item = ReceiptItem::parse("Flat white 5.20").unwrap();
        assert_eq!(item.name, "Flat white");
        assert_eq!(item.price, 5.2);
    }

    #[test]
    fn test_parse_bare_price() {
        let item = ReceiptItem::parse("3").unwrap();
        assert_eq!(item.name, "Item");
        assert_eq!(item.price, 3.0);
    }

    #[test]
    fn test_parse_missing_price() {
        assert!(ReceiptItem::parse("Bread").unwrap_err().is_validation());
        assert!(ReceiptItem::parse("").is_err());
        assert!(ReceiptItem::parse("Refund -2").is_err());
    }
}
