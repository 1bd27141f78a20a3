use shared::{
    format::to_query_datetime, DateRange, Transaction, TransactionRequest, TransactionType,
};

use crate::services::api::{ApiClient, ApiError};

const TRANSACTIONS: &str = "/transactions";

fn transaction_path(id: i64) -> String {
    format!("{}/{}", TRANSACTIONS, id)
}

fn by_product_path(product_id: i64) -> String {
    format!("{}/product/{}", TRANSACTIONS, product_id)
}

fn by_type_path(transaction_type: TransactionType) -> String {
    format!("{}/type/{}", TRANSACTIONS, transaction_type.as_str())
}

fn count_path(transaction_type: TransactionType) -> String {
    format!("{}/stats/count/{}", TRANSACTIONS, transaction_type.as_str())
}

fn quick_path(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Sale => "/transactions/sale",
        TransactionType::Purchase => "/transactions/purchase",
    }
}

fn quick_params(product_id: i64, quantity: i32, description: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("productId", product_id.to_string()),
        ("quantity", quantity.to_string()),
    ];
    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        params.push(("description", description.to_string()));
    }
    params
}

/// Transaction endpoints of the inventory API
#[derive(Clone, PartialEq)]
pub struct TransactionService {
    api: ApiClient,
}

impl TransactionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Transaction>, ApiError> {
        self.api.get(TRANSACTIONS).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Transaction, ApiError> {
        self.api.get(&transaction_path(id)).await
    }

    pub async fn create(&self, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        self.api.post(TRANSACTIONS, request).await
    }

    /// Sell through the server-priced endpoint; the backend checks stock.
    pub async fn create_sale(
        &self,
        product_id: i64,
        quantity: i32,
        description: Option<&str>,
    ) -> Result<Transaction, ApiError> {
        self.create_quick(TransactionType::Sale, product_id, quantity, description)
            .await
    }

    pub async fn create_purchase(
        &self,
        product_id: i64,
        quantity: i32,
        description: Option<&str>,
    ) -> Result<Transaction, ApiError> {
        self.create_quick(TransactionType::Purchase, product_id, quantity, description)
            .await
    }

    async fn create_quick(
        &self,
        transaction_type: TransactionType,
        product_id: i64,
        quantity: i32,
        description: Option<&str>,
    ) -> Result<Transaction, ApiError> {
        let params = quick_params(product_id, quantity, description);
        self.api
            .post_with_params(quick_path(transaction_type), &params)
            .await
    }

    pub async fn update(&self, id: i64, request: &TransactionRequest) -> Result<Transaction, ApiError> {
        self.api.put(&transaction_path(id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&transaction_path(id)).await
    }

    pub async fn get_by_product(&self, product_id: i64) -> Result<Vec<Transaction>, ApiError> {
        self.api.get(&by_product_path(product_id)).await
    }

    pub async fn get_by_type(&self, transaction_type: TransactionType) -> Result<Vec<Transaction>, ApiError> {
        self.api.get(&by_type_path(transaction_type)).await
    }

    pub async fn get_by_date_range(&self, range: DateRange) -> Result<Vec<Transaction>, ApiError> {
        self.api
            .get_with_params(
                "/transactions/date-range",
                &[
                    ("startDate", to_query_datetime(range.start)),
                    ("endDate", to_query_datetime(range.end)),
                ],
            )
            .await
    }

    /// The ten most recent transactions, newest first
    pub async fn get_recent(&self) -> Result<Vec<Transaction>, ApiError> {
        self.api.get("/transactions/recent").await
    }

    pub async fn count_by_type(&self, transaction_type: TransactionType) -> Result<u64, ApiError> {
        self.api.get(&count_path(transaction_type)).await
    }

    /// Sums over no rows come back as an empty body
    pub async fn get_total_sales(&self) -> Result<Option<f64>, ApiError> {
        self.api.get_optional("/transactions/stats/total-sales").await
    }

    pub async fn get_total_purchases(&self) -> Result<Option<f64>, ApiError> {
        self.api.get_optional("/transactions/stats/total-purchases").await
    }

    pub async fn get_net_revenue(&self) -> Result<Option<f64>, ApiError> {
        self.api.get_optional("/transactions/stats/net-revenue").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_transaction_paths() {
        assert_eq!(transaction_path(5), "/transactions/5");
        assert_eq!(by_product_path(7), "/transactions/product/7");
        assert_eq!(by_type_path(TransactionType::Sale), "/transactions/type/SALE");
        assert_eq!(count_path(TransactionType::Purchase), "/transactions/stats/count/PURCHASE");
        assert_eq!(quick_path(TransactionType::Purchase), "/transactions/purchase");
    }

    #[wasm_bindgen_test]
    fn test_quick_params_skip_blank_description() {
        let params = quick_params(7, 2, Some("  "));
        assert_eq!(
            params,
            vec![("productId", "7".to_string()), ("quantity", "2".to_string())]
        );

        let params = quick_params(7, 2, Some("walk-in customer"));
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], ("description", "walk-in customer".to_string()));
    }
}
