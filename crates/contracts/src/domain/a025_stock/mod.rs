//! Stock records (vendor + product + quantity + price) scoped by stock type.

pub mod aggregate;
pub mod request;
pub mod scope;

pub use aggregate::StockRecord;
pub use request::{BulkDeleteRequest, CreateStockPayload, StockEnvelope, UpdateStockPayload};
pub use scope::{StockScope, VENDOR_TRACKED_SCOPE};
