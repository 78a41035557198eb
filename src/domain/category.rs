use crate::domain::money::UnitPrice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The ticket-price tiers sold at the counter.
///
/// This is a closed set: `Khusus` covers the custom/group tier some forms call
/// "custom". Lowercase on every wire surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Pelajar,
    Umum,
    Asing,
    Khusus,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 4] = [
        TicketCategory::Pelajar,
        TicketCategory::Umum,
        TicketCategory::Asing,
        TicketCategory::Khusus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketCategory::Pelajar => "pelajar",
            TicketCategory::Umum => "umum",
            TicketCategory::Asing => "asing",
            TicketCategory::Khusus => "khusus",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The price list for one form session: at most one unit price per category.
///
/// Fetched once per session through the `PriceStore` port and read-only afterwards.
/// A category missing from the list is priced at zero rather than being an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceList(BTreeMap<TicketCategory, UnitPrice>);

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: TicketCategory, price: UnitPrice) {
        self.0.insert(category, price);
    }

    /// Unit price for a category; unlisted categories cost nothing.
    pub fn get(&self, category: TicketCategory) -> UnitPrice {
        self.0.get(&category).copied().unwrap_or(UnitPrice::ZERO)
    }

    pub fn contains(&self, category: TicketCategory) -> bool {
        self.0.contains_key(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, UnitPrice)> + '_ {
        self.0.iter().map(|(category, price)| (*category, *price))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(TicketCategory, UnitPrice)> for PriceList {
    fn from_iter<T: IntoIterator<Item = (TicketCategory, UnitPrice)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Headcounts entered per category on one form. Absent means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts(BTreeMap<TicketCategory, u32>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: TicketCategory, heads: u32) {
        self.0.insert(category, heads);
    }

    pub fn add(&mut self, category: TicketCategory, heads: u32) {
        *self.0.entry(category).or_insert(0) += heads;
    }

    pub fn get(&self, category: TicketCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, u32)> + '_ {
        self.0.iter().map(|(category, heads)| (*category, *heads))
    }

    pub fn total_visitors(&self) -> u32 {
        self.0.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&TicketCategory::Pelajar).unwrap();
        assert_eq!(json, "\"pelajar\"");
        let parsed: TicketCategory = serde_json::from_str("\"asing\"").unwrap();
        assert_eq!(parsed, TicketCategory::Asing);
    }

    #[test]
    fn test_price_list_unlisted_category_is_free() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Umum, UnitPrice::new(dec!(5000)).unwrap());

        assert_eq!(prices.get(TicketCategory::Umum).value(), dec!(5000));
        assert_eq!(prices.get(TicketCategory::Asing), UnitPrice::ZERO);
        assert!(!prices.contains(TicketCategory::Asing));
    }

    #[test]
    fn test_counts_default_zero() {
        let mut counts = CategoryCounts::new();
        counts.set(TicketCategory::Pelajar, 2);

        assert_eq!(counts.get(TicketCategory::Pelajar), 2);
        assert_eq!(counts.get(TicketCategory::Khusus), 0);
        assert_eq!(counts.total_visitors(), 2);
    }

    #[test]
    fn test_counts_add_accumulates() {
        let mut counts = CategoryCounts::new();
        counts.add(TicketCategory::Umum, 1);
        counts.add(TicketCategory::Umum, 3);
        assert_eq!(counts.get(TicketCategory::Umum), 4);
    }
}
