//! In-memory gateways for tests.

use super::error::{DeleteError, FetchError, SubmitError};
use super::gateway::{CatalogGateway, StockGateway};
use async_trait::async_trait;
use contracts::domain::a025_stock::{CreateStockPayload, StockRecord, StockScope, UpdateStockPayload};
use contracts::domain::common::{ProductRef, VendorRef};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(String, String),
    Create(CreateStockPayload),
    Update(String, UpdateStockPayload),
    BulkDelete(Vec<String>),
}

/// Fake inventory service holding its own copy of the records.
#[derive(Default)]
pub struct FakeStockGateway {
    pub records: Mutex<Vec<StockRecord>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_list: Mutex<bool>,
    pub fail_submit: Mutex<bool>,
    pub fail_delete: Mutex<bool>,
    next_id: AtomicUsize,
}

impl FakeStockGateway {
    pub fn with_records(records: Vec<StockRecord>) -> Self {
        let gateway = Self::default();
        *gateway.records.lock().unwrap() = records;
        gateway.next_id.store(100, Ordering::SeqCst);
        gateway
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub fn set_fail_submit(&self, fail: bool) {
        *self.fail_submit.lock().unwrap() = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        *self.fail_delete.lock().unwrap() = fail;
    }
}

#[async_trait(?Send)]
impl StockGateway for FakeStockGateway {
    async fn list(&self, scope: &StockScope, company_id: &str) -> Result<Vec<StockRecord>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::List(scope.list_key(), company_id.to_string()));
        if *self.fail_list.lock().unwrap() {
            return Err(FetchError::Status {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, payload: CreateStockPayload) -> Result<StockRecord, SubmitError> {
        self.calls.lock().unwrap().push(Call::Create(payload.clone()));
        if *self.fail_submit.lock().unwrap() {
            return Err(SubmitError::Rejected {
                status: 422,
                body: "invalid".into(),
            });
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = StockRecord {
            id: id.to_string(),
            vendor: payload.vendor_id.map(|v| VendorRef::new(v.clone(), format!("vendor {}", v))),
            product: ProductRef::new(payload.product_id.clone(), format!("product {}", payload.product_id)),
            quantity: payload.quantity,
            price: payload.price,
            kind: payload.kind,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, payload: UpdateStockPayload) -> Result<StockRecord, SubmitError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(id.to_string(), payload.clone()));
        if *self.fail_submit.lock().unwrap() {
            return Err(SubmitError::Rejected {
                status: 422,
                body: "invalid".into(),
            });
        }
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SubmitError::Rejected {
                status: 404,
                body: "not found".into(),
            })?;
        existing.vendor = payload.vendor_id.map(|v| VendorRef::new(v.clone(), format!("vendor {}", v)));
        existing.product = ProductRef::new(payload.product_id.clone(), format!("product {}", payload.product_id));
        existing.quantity = payload.quantity;
        existing.price = payload.price;
        Ok(existing.clone())
    }

    async fn bulk_delete(&self, ids: Vec<String>) -> Result<String, DeleteError> {
        self.calls.lock().unwrap().push(Call::BulkDelete(ids.clone()));
        if *self.fail_delete.lock().unwrap() {
            return Err(DeleteError::Rejected {
                status: 500,
                body: "cannot delete".into(),
            });
        }
        self.records.lock().unwrap().retain(|r| !ids.contains(&r.id));
        Ok(format!("{} stocks deleted successfully", ids.len()))
    }
}

/// Fake reference catalog counting how often it is hit.
#[derive(Default)]
pub struct FakeCatalogGateway {
    pub vendors: Vec<VendorRef>,
    pub products: Vec<ProductRef>,
    pub vendor_calls: AtomicUsize,
    pub product_calls: AtomicUsize,
}

#[async_trait(?Send)]
impl CatalogGateway for FakeCatalogGateway {
    async fn list_vendors(&self) -> Result<Vec<VendorRef>, FetchError> {
        self.vendor_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vendors.clone())
    }

    async fn list_products(&self, _company_id: &str) -> Result<Vec<ProductRef>, FetchError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

pub fn record(id: &str, kind: &str, price: f64, quantity: f64) -> StockRecord {
    StockRecord {
        id: id.to_string(),
        vendor: None,
        product: ProductRef::new(format!("p-{}", id), format!("product {}", id)),
        quantity,
        price,
        kind: kind.to_string(),
    }
}
