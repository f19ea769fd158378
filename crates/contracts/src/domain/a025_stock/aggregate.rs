use crate::domain::common::{amount, id, ProductRef, VendorRef};
use serde::{Deserialize, Serialize};

/// Складской остаток: поставщик + продукт + количество + цена
///
/// `id` присваивается сервисом при создании и больше не меняется,
/// `kind` (поле `type` на сервере) тоже фиксируется при создании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,

    /// Поставщик (обязателен только для разреза Factory)
    #[serde(default)]
    pub vendor: Option<VendorRef>,

    pub product: ProductRef,

    /// Количество, кг
    #[serde(deserialize_with = "amount::deserialize")]
    pub quantity: f64,

    /// Цена за кг
    #[serde(deserialize_with = "amount::deserialize")]
    pub price: f64,

    #[serde(rename = "type")]
    pub kind: String,
}

impl StockRecord {
    /// Стоимость строки: цена * количество
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor.as_ref().map(|v| v.id.as_str())
    }
}
