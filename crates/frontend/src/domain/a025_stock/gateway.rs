//! Remote collaborators of the stock view.
//!
//! `StockGateway` covers the four stock operations, `CatalogGateway` the two
//! read-only reference lists. `api.rs` implements both over HTTP; tests use
//! an in-memory fake.

use super::error::{DeleteError, FetchError, SubmitError};
use async_trait::async_trait;
use contracts::domain::a025_stock::{CreateStockPayload, StockRecord, StockScope, UpdateStockPayload};
use contracts::domain::common::{ProductRef, VendorRef};
use std::sync::Arc;

#[async_trait(?Send)]
pub trait StockGateway: Send + Sync {
    async fn list(&self, scope: &StockScope, company_id: &str) -> Result<Vec<StockRecord>, FetchError>;

    async fn create(&self, payload: CreateStockPayload) -> Result<StockRecord, SubmitError>;

    async fn update(&self, id: &str, payload: UpdateStockPayload) -> Result<StockRecord, SubmitError>;

    /// Returns the service's confirmation message
    async fn bulk_delete(&self, ids: Vec<String>) -> Result<String, DeleteError>;
}

#[async_trait(?Send)]
pub trait CatalogGateway: Send + Sync {
    async fn list_vendors(&self) -> Result<Vec<VendorRef>, FetchError>;

    async fn list_products(&self, company_id: &str) -> Result<Vec<ProductRef>, FetchError>;
}

pub type SharedStockGateway = Arc<dyn StockGateway>;
pub type SharedCatalogGateway = Arc<dyn CatalogGateway>;
