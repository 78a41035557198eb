use crate::domain::category::{CategoryCounts, PriceList, TicketCategory};
use crate::domain::money::Money;
use crate::domain::payment::{PaymentState, derive_payment};
use crate::domain::ports::PriceStore;
use crate::domain::serial::{SerialNumber, SerialRange};
use crate::error::{Result, TicketingError};
use std::collections::BTreeMap;

/// The transient state of one create/edit form session.
///
/// `FormSession` fetches the price list once when it opens and from then on owns
/// the form's inputs (headcounts, down payment, initial serials) and the derived
/// fields (payment state, serial ranges). Every mutator re-runs the relevant
/// derivation synchronously, so the derived fields are always consistent with the
/// inputs — the form layer just reads them back. The state lives only as long as
/// the session; the persisted record belongs to the backend.
pub struct FormSession {
    prices: PriceList,
    active: Vec<TicketCategory>,
    counts: CategoryCounts,
    down_payment: Money,
    serial_initials: BTreeMap<TicketCategory, SerialNumber>,
    serial_ranges: BTreeMap<TicketCategory, SerialRange>,
    payment: PaymentState,
}

impl FormSession {
    /// Opens a session for a form using the given categories, fetching the price
    /// list once from the store.
    pub async fn open(
        price_store: &dyn PriceStore,
        active: Vec<TicketCategory>,
    ) -> Result<Self> {
        let prices = price_store.price_list().await?;
        let mut session = Self {
            prices,
            active,
            counts: CategoryCounts::new(),
            down_payment: Money::ZERO,
            serial_initials: BTreeMap::new(),
            serial_ranges: BTreeMap::new(),
            payment: PaymentState::default(),
        };
        session.recompute_payment();
        Ok(session)
    }

    /// Sets the headcount for a category and re-derives the payment state and
    /// that category's serial range.
    pub fn set_count(&mut self, category: TicketCategory, heads: u32) -> Result<()> {
        self.ensure_active(category)?;
        self.counts.set(category, heads);
        self.recompute_payment();
        self.recompute_serial(category);
        Ok(())
    }

    /// Sets the down payment and re-derives the payment state.
    pub fn set_down_payment(&mut self, amount: Money) {
        self.down_payment = amount;
        self.recompute_payment();
    }

    /// Sets the first stub number for a category and derives its ending number.
    pub fn set_initial_serial(
        &mut self,
        category: TicketCategory,
        initial: SerialNumber,
    ) -> Result<()> {
        self.ensure_active(category)?;
        self.serial_initials.insert(category, initial);
        self.recompute_serial(category);
        Ok(())
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn payment(&self) -> &PaymentState {
        &self.payment
    }

    pub fn serial_range(&self, category: TicketCategory) -> Option<SerialRange> {
        self.serial_ranges.get(&category).copied()
    }

    /// True when every counted category has a non-empty serial range recorded.
    /// The walk-in and recap forms gate submission on this.
    pub fn serials_valid(&self) -> bool {
        self.counts.iter().all(|(category, heads)| {
            heads == 0
                || self
                    .serial_ranges
                    .get(&category)
                    .is_some_and(|range| !range.is_empty())
        })
    }

    fn ensure_active(&self, category: TicketCategory) -> Result<()> {
        if self.active.contains(&category) {
            Ok(())
        } else {
            Err(TicketingError::ValidationError(format!(
                "Category {} is not active on this form",
                category
            )))
        }
    }

    fn recompute_payment(&mut self) {
        self.payment = derive_payment(&self.counts, &self.prices, self.down_payment);
    }

    fn recompute_serial(&mut self, category: TicketCategory) {
        if let Some(&initial) = self.serial_initials.get(&category) {
            self.serial_ranges
                .insert(category, SerialRange::derive(initial, self.counts.get(category)));
        }
    }
}
