use crate::domain::category::{PriceList, TicketCategory};
use crate::domain::money::UnitPrice;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PriceRecord {
    category: TicketCategory,
    unit_price: Decimal,
}

/// Reads a ticket price list from a CSV source with `category,unit_price` columns.
///
/// Later rows for the same category overwrite earlier ones; a negative price is a
/// validation error.
pub struct PriceListReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PriceListReader<R> {
    /// Creates a new `PriceListReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn read(mut self) -> Result<PriceList> {
        let mut prices = PriceList::new();
        for record in self.reader.deserialize() {
            let record: PriceRecord = record?;
            prices.set(record.category, UnitPrice::new(record.unit_price)?);
        }
        Ok(prices)
    }
}
