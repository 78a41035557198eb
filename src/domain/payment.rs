use crate::domain::category::{CategoryCounts, PriceList, TicketCategory};
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Settlement state of one order.
///
/// Tri-state, applied uniformly across every form flow: a down payment covering the
/// whole total settles the order, a smaller positive one leaves it partially paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Dp,
    Paid,
}

impl PaymentStatus {
    pub fn derive(down_payment: Money, total: Money) -> Self {
        if !total.is_zero() && down_payment >= total {
            PaymentStatus::Paid
        } else if !down_payment.is_zero() && down_payment < total {
            PaymentStatus::Dp
        } else {
            PaymentStatus::Unpaid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Dp => "dp",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The derived payment fields of one form: subtotals per category, grand total,
/// change due, and the settlement status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentState {
    pub subtotals: BTreeMap<TicketCategory, Money>,
    pub total: Money,
    pub down_payment: Money,
    pub change: Money,
    pub status: PaymentStatus,
}

impl Default for PaymentState {
    fn default() -> Self {
        Self {
            subtotals: BTreeMap::new(),
            total: Money::ZERO,
            down_payment: Money::ZERO,
            change: Money::ZERO,
            status: PaymentStatus::Unpaid,
        }
    }
}

impl PaymentState {
    pub fn subtotal(&self, category: TicketCategory) -> Money {
        self.subtotals.get(&category).copied().unwrap_or(Money::ZERO)
    }

    /// Cash that actually stays in the drawer: the down payment minus change
    /// returned, capped by the order total.
    pub fn collected(&self) -> Money {
        self.down_payment.min(self.total)
    }
}

/// Derives the full payment state from the current form inputs.
///
/// Pure arithmetic over already-fetched values; re-run on every change to a
/// headcount or the down payment. Categories counted but missing from the price
/// list are priced at zero rather than erroring.
pub fn derive_payment(
    counts: &CategoryCounts,
    prices: &PriceList,
    down_payment: Money,
) -> PaymentState {
    let mut subtotals = BTreeMap::new();
    let mut total = Money::ZERO;

    for (category, price) in prices.iter() {
        let subtotal = price.for_heads(counts.get(category));
        total += subtotal;
        subtotals.insert(category, subtotal);
    }
    // Counted but unpriced categories show up as zero subtotals.
    for (category, _) in counts.iter() {
        subtotals.entry(category).or_insert(Money::ZERO);
    }

    let change = down_payment.saturating_sub(total);
    let status = PaymentStatus::derive(down_payment, total);

    PaymentState {
        subtotals,
        total,
        down_payment,
        change,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::UnitPrice;
    use rust_decimal_macros::dec;

    fn museum_prices() -> PriceList {
        [
            (TicketCategory::Pelajar, UnitPrice::new(dec!(3000)).unwrap()),
            (TicketCategory::Umum, UnitPrice::new(dec!(5000)).unwrap()),
            (TicketCategory::Asing, UnitPrice::new(dec!(25000)).unwrap()),
        ]
        .into_iter()
        .collect()
    }

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::new(value).unwrap()
    }

    #[test]
    fn test_paid_order_with_change() {
        let mut counts = CategoryCounts::new();
        counts.set(TicketCategory::Pelajar, 2);
        counts.set(TicketCategory::Umum, 1);
        counts.set(TicketCategory::Asing, 0);

        let state = derive_payment(&counts, &museum_prices(), money(dec!(12000)));

        assert_eq!(state.subtotal(TicketCategory::Pelajar), money(dec!(6000)));
        assert_eq!(state.subtotal(TicketCategory::Umum), money(dec!(5000)));
        assert_eq!(state.subtotal(TicketCategory::Asing), Money::ZERO);
        assert_eq!(state.total, money(dec!(11000)));
        assert_eq!(state.change, money(dec!(1000)));
        assert_eq!(state.status, PaymentStatus::Paid);
        assert_eq!(state.collected(), money(dec!(11000)));
    }

    #[test]
    fn test_partial_down_payment() {
        let mut counts = CategoryCounts::new();
        counts.set(TicketCategory::Pelajar, 1);

        let state = derive_payment(&counts, &museum_prices(), money(dec!(1000)));

        assert_eq!(state.total, money(dec!(3000)));
        assert_eq!(state.change, Money::ZERO);
        assert_eq!(state.status, PaymentStatus::Dp);
        assert_eq!(state.collected(), money(dec!(1000)));
    }

    #[test]
    fn test_empty_form_is_unpaid() {
        let counts = CategoryCounts::new();
        let state = derive_payment(&counts, &museum_prices(), Money::ZERO);

        assert_eq!(state.total, Money::ZERO);
        assert_eq!(state.change, Money::ZERO);
        assert_eq!(state.status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_payment_against_empty_order_is_unpaid() {
        // Money handed over with nothing on the order: all of it comes back as
        // change and the order stays unpaid.
        let counts = CategoryCounts::new();
        let state = derive_payment(&counts, &museum_prices(), money(dec!(5000)));

        assert_eq!(state.total, Money::ZERO);
        assert_eq!(state.change, money(dec!(5000)));
        assert_eq!(state.status, PaymentStatus::Unpaid);
        assert_eq!(state.collected(), Money::ZERO);
    }

    #[test]
    fn test_unpriced_category_counts_as_free() {
        let mut counts = CategoryCounts::new();
        counts.set(TicketCategory::Khusus, 10);
        counts.set(TicketCategory::Umum, 1);

        let state = derive_payment(&counts, &museum_prices(), Money::ZERO);

        assert_eq!(state.subtotal(TicketCategory::Khusus), Money::ZERO);
        assert_eq!(state.total, money(dec!(5000)));
    }

    #[test]
    fn test_exact_payment_has_no_change() {
        let mut counts = CategoryCounts::new();
        counts.set(TicketCategory::Asing, 2);

        let state = derive_payment(&counts, &museum_prices(), money(dec!(50000)));

        assert_eq!(state.total, money(dec!(50000)));
        assert_eq!(state.change, Money::ZERO);
        assert_eq!(state.status, PaymentStatus::Paid);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Dp).unwrap(), "\"dp\"");
        let parsed: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Paid);
    }
}
