use crate::domain::category::{CategoryCounts, TicketCategory};
use crate::domain::money::Money;
use crate::error::{Result, TicketingError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an order batch: headcounts per category plus the down payment.
///
/// Category columns left out of the file default to zero.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub order: String,
    #[serde(default)]
    pub pelajar: u32,
    #[serde(default)]
    pub umum: u32,
    #[serde(default)]
    pub asing: u32,
    #[serde(default)]
    pub khusus: u32,
    pub down_payment: Decimal,
}

impl OrderRecord {
    pub fn count(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Pelajar => self.pelajar,
            TicketCategory::Umum => self.umum,
            TicketCategory::Asing => self.asing,
            TicketCategory::Khusus => self.khusus,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::new();
        for category in TicketCategory::ALL {
            counts.set(category, self.count(category));
        }
        counts
    }

    pub fn down_payment(&self) -> Result<Money> {
        Money::new(self.down_payment)
    }
}

/// Reads order rows from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<OrderRecord>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes order rows, so
    /// large batches stream without loading the whole file.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TicketingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "order, pelajar, umum, asing, khusus, down_payment\n\
                    WI-0001, 2, 1, 0, 0, 12000\n\
                    GR-0002, 0, 0, 3, 0, 50000";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<OrderRecord>> = reader.orders().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.order, "WI-0001");
        assert_eq!(first.count(TicketCategory::Pelajar), 2);
        assert_eq!(first.down_payment().unwrap(), Money::new(dec!(12000)).unwrap());
    }

    #[test]
    fn test_missing_category_column_defaults_to_zero() {
        let data = "order, umum, down_payment\nWI-0003, 4, 20000";
        let reader = OrderReader::new(data.as_bytes());
        let record = reader.orders().next().unwrap().unwrap();

        assert_eq!(record.count(TicketCategory::Umum), 4);
        assert_eq!(record.count(TicketCategory::Asing), 0);
        assert_eq!(record.counts().total_visitors(), 4);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "order, pelajar, umum, asing, khusus, down_payment\n\
                    WI-0001, not_a_number, 0, 0, 0, 1000";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<OrderRecord>> = reader.orders().collect();

        assert!(results[0].is_err());
    }

    #[test]
    fn test_negative_down_payment_is_rejected() {
        let data = "order, umum, down_payment\nWI-0004, 1, -500";
        let reader = OrderReader::new(data.as_bytes());
        let record = reader.orders().next().unwrap().unwrap();
        assert!(record.down_payment().is_err());
    }
}
