use crate::domain::category::TicketCategory;
use crate::domain::payment::PaymentState;
use crate::domain::recap::DailyRecap;
use crate::error::Result;
use std::io::Write;

/// Writes derived order rows or the daily recap as CSV.
///
/// Per-order rows carry the subtotal per category; the recap row carries the
/// visitor headcount per category. Both use the fixed category order of
/// `TicketCategory::ALL` so the columns are stable.
pub struct RecapWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecapWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_order_header(&mut self) -> Result<()> {
        let mut header = vec!["order".to_string()];
        header.extend(TicketCategory::ALL.iter().map(|c| c.label().to_string()));
        header.extend(["total", "change", "status"].map(String::from));
        self.writer.write_record(&header)?;
        Ok(())
    }

    pub fn write_order(&mut self, order: &str, payment: &PaymentState) -> Result<()> {
        let mut row = vec![order.to_string()];
        row.extend(
            TicketCategory::ALL
                .iter()
                .map(|category| payment.subtotal(*category).to_string()),
        );
        row.push(payment.total.to_string());
        row.push(payment.change.to_string());
        row.push(payment.status.to_string());
        self.writer.write_record(&row)?;
        Ok(())
    }

    pub fn write_recap(&mut self, recap: &DailyRecap) -> Result<()> {
        let mut header = vec!["orders".to_string()];
        header.extend(TicketCategory::ALL.iter().map(|c| c.label().to_string()));
        header.extend(["revenue", "collected"].map(String::from));
        self.writer.write_record(&header)?;

        let mut row = vec![recap.orders.to_string()];
        row.extend(
            TicketCategory::ALL
                .iter()
                .map(|category| recap.visitors.get(*category).to_string()),
        );
        row.push(recap.revenue.to_string());
        row.push(recap.collected.to_string());
        self.writer.write_record(&row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
