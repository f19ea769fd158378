use super::error::{DeleteError, FetchError, SubmitError};
use super::gateway::{CatalogGateway, StockGateway};
use crate::shared::api_utils::api_base;
use crate::system::auth::storage;
use async_trait::async_trait;
use contracts::domain::a025_stock::{
    BulkDeleteRequest, CreateStockPayload, StockEnvelope, StockRecord, StockScope, UpdateStockPayload,
};
use contracts::domain::common::{ProductRef, VendorRef};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ListStocksQuery<'a> {
    #[serde(rename = "type")]
    kind: String,
    company_id: &'a str,
    #[serde(rename = "_ts")]
    cache_buster: i64,
}

/// Stock and catalog endpoints of the inventory service
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    base: String,
}

impl HttpInventoryApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Service on the current host, see `api_base`
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

async fn fetch_json<T: for<'de> Deserialize<'de>>(builder: RequestBuilder) -> Result<T, FetchError> {
    let response = builder
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: response.status(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

async fn read_record(response: Response) -> Result<StockRecord, SubmitError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(SubmitError::Rejected {
            status: response.status(),
            body,
        });
    }
    response
        .json::<StockRecord>()
        .await
        .map_err(|e| SubmitError::Parse(e.to_string()))
}

/// Подтверждение удаления приходит строкой JSON, объектом `{message}`
/// или просто текстом
fn confirmation_text(body: &str) -> String {
    #[derive(Deserialize)]
    struct MessageBody {
        message: String,
    }

    if let Ok(text) = serde_json::from_str::<String>(body) {
        return text;
    }
    if let Ok(parsed) = serde_json::from_str::<MessageBody>(body) {
        return parsed.message;
    }
    body.trim().to_string()
}

#[async_trait(?Send)]
impl StockGateway for HttpInventoryApi {
    async fn list(&self, scope: &StockScope, company_id: &str) -> Result<Vec<StockRecord>, FetchError> {
        let query = serde_qs::to_string(&ListStocksQuery {
            kind: scope.list_key(),
            company_id,
            cache_buster: js_sys::Date::now() as i64,
        })
        .map_err(|e| FetchError::Network(format!("Failed to build query: {}", e)))?;
        let url = format!("{}?{}", self.url("/api/v1/stocks"), query);
        log::debug!("Loading stocks: {}", url);

        let builder = Self::authorized(Request::get(&url))
            .header("Cache-Control", "no-cache, no-store, must-revalidate");
        fetch_json(builder).await
    }

    async fn create(&self, payload: CreateStockPayload) -> Result<StockRecord, SubmitError> {
        let response = Self::authorized(Request::post(&self.url("/api/v1/stocks")))
            .json(&StockEnvelope::new(payload))
            .map_err(|e| SubmitError::Parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        read_record(response).await
    }

    async fn update(&self, id: &str, payload: UpdateStockPayload) -> Result<StockRecord, SubmitError> {
        let url = self.url(&format!("/api/v1/stocks/{}", urlencoding::encode(id)));
        let response = Self::authorized(Request::put(&url))
            .json(&StockEnvelope::new(payload))
            .map_err(|e| SubmitError::Parse(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        read_record(response).await
    }

    async fn bulk_delete(&self, ids: Vec<String>) -> Result<String, DeleteError> {
        let response = Self::authorized(Request::post(&self.url("/api/v1/stocks/bulk_delete")))
            .json(&BulkDeleteRequest { ids })
            .map_err(|e| DeleteError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| DeleteError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.unwrap_or_default();
        if !ok {
            return Err(DeleteError::Rejected { status, body });
        }
        Ok(confirmation_text(&body))
    }
}

#[async_trait(?Send)]
impl CatalogGateway for HttpInventoryApi {
    async fn list_vendors(&self) -> Result<Vec<VendorRef>, FetchError> {
        fetch_json(Self::authorized(Request::get(&self.url("/api/v1/vendors")))).await
    }

    async fn list_products(&self, company_id: &str) -> Result<Vec<ProductRef>, FetchError> {
        let url = format!(
            "{}?company_id={}",
            self.url("/api/v1/products"),
            urlencoding::encode(company_id)
        );
        fetch_json(Self::authorized(Request::get(&url))).await
    }
}

#[cfg(test)]
mod tests {
    use super::confirmation_text;

    #[test]
    fn confirmation_accepts_all_body_shapes() {
        assert_eq!(confirmation_text(r#""Stocks deleted""#), "Stocks deleted");
        assert_eq!(confirmation_text(r#"{"message":"2 removed"}"#), "2 removed");
        assert_eq!(confirmation_text("done\n"), "done");
    }
}
