use crate::domain::category::{PriceList, TicketCategory};
use crate::domain::money::UnitPrice;
use crate::domain::ports::{PriceStore, RegionDirectory};
use crate::domain::region::{Region, RegionCode};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory price store.
///
/// Uses `Arc<RwLock<PriceList>>` to allow shared concurrent access. Stands in for
/// the backend's `/ticket-price` endpoint in the CLI and in tests.
#[derive(Default, Clone)]
pub struct InMemoryPriceStore {
    prices: Arc<RwLock<PriceList>>,
}

impl InMemoryPriceStore {
    /// Creates a new, empty in-memory price store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(prices: PriceList) -> Self {
        Self {
            prices: Arc::new(RwLock::new(prices)),
        }
    }

    pub async fn set_price(&self, category: TicketCategory, price: UnitPrice) {
        let mut prices = self.prices.write().await;
        prices.set(category, price);
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn price_list(&self) -> Result<PriceList> {
        let prices = self.prices.read().await;
        Ok(prices.clone())
    }
}

/// A thread-safe in-memory region directory.
///
/// Maps each parent code (or `None` for the top level) to its registered
/// children. Unregistered parents simply have no children.
#[derive(Default, Clone)]
pub struct InMemoryRegionDirectory {
    children: Arc<RwLock<HashMap<Option<RegionCode>, Vec<Region>>>>,
}

impl InMemoryRegionDirectory {
    /// Creates a new, empty in-memory region directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, parent: Option<RegionCode>, regions: Vec<Region>) {
        let mut children = self.children.write().await;
        children.insert(parent, regions);
    }
}

#[async_trait]
impl RegionDirectory for InMemoryRegionDirectory {
    async fn children(&self, parent: Option<RegionCode>) -> Result<Vec<Region>> {
        let children = self.children.read().await;
        Ok(children.get(&parent).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_price_store() {
        let store = InMemoryPriceStore::new();
        store
            .set_price(TicketCategory::Umum, UnitPrice::new(dec!(5000)).unwrap())
            .await;

        let prices = store.price_list().await.unwrap();
        assert_eq!(prices.get(TicketCategory::Umum).value(), dec!(5000));
        assert!(!prices.contains(TicketCategory::Asing));
    }

    #[tokio::test]
    async fn test_in_memory_region_directory() {
        let directory = InMemoryRegionDirectory::new();
        let aceh = Region {
            code: "11".parse().unwrap(),
            name: "Aceh".to_string(),
        };
        directory.register(None, vec![aceh.clone()]).await;

        let provinces = directory.children(None).await.unwrap();
        assert_eq!(provinces, vec![aceh]);

        let unknown = directory
            .children(Some("34".parse().unwrap()))
            .await
            .unwrap();
        assert!(unknown.is_empty());
    }
}
