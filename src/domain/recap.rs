use crate::domain::category::CategoryCounts;
use crate::domain::money::Money;
use crate::domain::payment::PaymentState;
use serde::{Deserialize, Serialize};

/// Running daily cash recap over the orders processed so far.
///
/// `revenue` sums the order totals; `collected` sums what actually stayed in the
/// drawer after change, so it trails `revenue` whenever orders are only partially
/// paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecap {
    pub orders: u32,
    pub visitors: CategoryCounts,
    pub revenue: Money,
    pub collected: Money,
}

impl DailyRecap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one processed order into the recap.
    pub fn record(&mut self, counts: &CategoryCounts, payment: &PaymentState) {
        self.orders += 1;
        for (category, heads) in counts.iter() {
            self.visitors.add(category, heads);
        }
        self.revenue += payment.total;
        self.collected += payment.collected();
    }

    /// Cash still owed across all recorded orders.
    pub fn outstanding(&self) -> Money {
        self.revenue.saturating_sub(self.collected)
    }
}
