//! Справочники поставщиков и продуктов для формы.
//!
//! Загружаются один раз за сеанс формы и дальше только читаются.

use crate::domain::a025_stock::error::FetchError;
use crate::domain::a025_stock::gateway::CatalogGateway;
use contracts::domain::common::{ProductRef, VendorRef};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct CatalogCache {
    pub vendors: Vec<VendorRef>,
    pub products: Vec<ProductRef>,
    vendors_loaded: bool,
    products_loaded: bool,
    vendors_pending: bool,
    products_pending: bool,
}

impl CatalogCache {
    /// Отметить справочники, которые нужно запросить этому вызывающему.
    ///
    /// Уже загруженные и уже запрошенные кем-то другим не возвращаются.
    fn claim(&mut self) -> (bool, bool) {
        let vendors = !self.vendors_loaded && !self.vendors_pending;
        let products = !self.products_loaded && !self.products_pending;
        self.vendors_pending |= vendors;
        self.products_pending |= products;
        (vendors, products)
    }

    pub fn set_vendors(&mut self, vendors: Vec<VendorRef>) {
        self.vendors = vendors;
        self.vendors_loaded = true;
        self.vendors_pending = false;
    }

    pub fn set_products(&mut self, products: Vec<ProductRef>) {
        self.products = products;
        self.products_loaded = true;
        self.products_pending = false;
    }

    pub fn vendor_name(&self, id: &str) -> Option<&str> {
        self.vendors
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }

    pub fn product_name(&self, id: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}

/// Догрузить недостающие справочники.
///
/// Справочник, который уже грузится другим вызовом, повторно не
/// запрашивается. Ошибка одного справочника не мешает загрузке другого;
/// возвращается первая ошибка, а неудачный справочник можно запросить снова.
pub async fn ensure_loaded(
    cache: RwSignal<CatalogCache>,
    gateway: &dyn CatalogGateway,
    company_id: &str,
) -> Result<(), FetchError> {
    let (need_vendors, need_products) = cache.try_update(|c| c.claim()).unwrap_or((false, false));
    let mut first_error = None;

    if need_vendors {
        match gateway.list_vendors().await {
            Ok(vendors) => cache.update(|c| c.set_vendors(vendors)),
            Err(e) => {
                log::error!("catalog: vendors failed: {}", e);
                cache.update(|c| c.vendors_pending = false);
                first_error.get_or_insert(e);
            }
        }
    }

    if need_products {
        match gateway.list_products(company_id).await {
            Ok(products) => cache.update(|c| c.set_products(products)),
            Err(e) => {
                log::error!("catalog: products failed: {}", e);
                cache.update(|c| c.products_pending = false);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
