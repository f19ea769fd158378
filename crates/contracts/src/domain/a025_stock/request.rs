use serde::{Deserialize, Serialize};

/// Обёртка `{ "stock": { ... } }`, которую ожидает сервис
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEnvelope<T> {
    pub stock: T,
}

impl<T> StockEnvelope<T> {
    pub fn new(stock: T) -> Self {
        Self { stock }
    }
}

/// DTO для создания записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStockPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
    /// Серверная метка разреза, например `rawmaterialStock`
    #[serde(rename = "type")]
    pub kind: String,
}

/// DTO для обновления записи; `id` и `type` не меняются
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStockPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub product_id: String,
    pub quantity: f64,
    pub price: f64,
}

/// Тело запроса массового удаления
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_is_wrapped_and_renames_type() {
        let body = StockEnvelope::new(CreateStockPayload {
            vendor_id: None,
            product_id: "p1".into(),
            quantity: 2.0,
            price: 10.0,
            kind: "rawmaterialStock".into(),
        });
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["stock"]["type"], "rawmaterialStock");
        assert_eq!(value["stock"]["product_id"], "p1");
        assert!(value["stock"].get("vendor_id").is_none());
    }

    #[test]
    fn update_payload_has_no_type() {
        let value = serde_json::to_value(StockEnvelope::new(UpdateStockPayload {
            vendor_id: Some("v1".into()),
            product_id: "p1".into(),
            quantity: 3.0,
            price: 4.0,
        }))
        .unwrap();
        assert_eq!(value["stock"]["vendor_id"], "v1");
        assert!(value["stock"].get("type").is_none());
    }
}
