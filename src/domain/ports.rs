use crate::domain::category::PriceList;
use crate::domain::region::{Region, RegionCode};
use crate::error::Result;
use async_trait::async_trait;

/// Source of the current ticket price list. Backed by the REST backend in
/// production; fetched once per form session.
#[async_trait]
pub trait PriceStore: Send + Sync {
    async fn price_list(&self) -> Result<PriceList>;
}

/// Lookup of administrative-region options. `None` lists the provinces; a code
/// lists that region's direct children.
#[async_trait]
pub trait RegionDirectory: Send + Sync {
    async fn children(&self, parent: Option<RegionCode>) -> Result<Vec<Region>>;
}

pub type PriceStoreBox = Box<dyn PriceStore>;
pub type RegionDirectoryBox = Box<dyn RegionDirectory>;
