use shared::{PriceRange, Product, LOW_STOCK_THRESHOLD};

use crate::services::api::{ApiClient, ApiError};

const PRODUCTS: &str = "/products";

fn product_path(id: i64) -> String {
    format!("{}/{}", PRODUCTS, id)
}

fn low_stock_path(threshold: i32) -> String {
    format!("{}/low-stock/{}", PRODUCTS, threshold)
}

fn availability_path(id: i64) -> String {
    format!("{}/check-availability/{}", PRODUCTS, id)
}

/// Product endpoints of the inventory API
#[derive(Clone, PartialEq)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        self.api.get(PRODUCTS).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, ApiError> {
        self.api.get(&product_path(id)).await
    }

    pub async fn create(&self, product: &Product) -> Result<Product, ApiError> {
        self.api.post(PRODUCTS, product).await
    }

    pub async fn update(&self, id: i64, product: &Product) -> Result<Product, ApiError> {
        self.api.put(&product_path(id), product).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&product_path(id)).await
    }

    /// Case-insensitive name search
    pub async fn search(&self, name: &str) -> Result<Vec<Product>, ApiError> {
        self.api
            .get_with_params("/products/search", &[("name", name.to_string())])
            .await
    }

    pub async fn get_by_price_range(&self, range: PriceRange) -> Result<Vec<Product>, ApiError> {
        self.api
            .get_with_params(
                "/products/price-range",
                &[
                    ("minPrice", range.min.to_string()),
                    ("maxPrice", range.max.to_string()),
                ],
            )
            .await
    }

    pub async fn get_in_stock(&self) -> Result<Vec<Product>, ApiError> {
        self.api.get("/products/in-stock").await
    }

    /// Products below `threshold`; `None` uses the dashboard threshold
    pub async fn get_low_stock(&self, threshold: Option<i32>) -> Result<Vec<Product>, ApiError> {
        let threshold = threshold.unwrap_or(LOW_STOCK_THRESHOLD);
        self.api.get(&low_stock_path(threshold)).await
    }

    pub async fn get_out_of_stock(&self) -> Result<Vec<Product>, ApiError> {
        self.api.get("/products/out-of-stock").await
    }

    pub async fn in_stock_count(&self) -> Result<u64, ApiError> {
        self.api.get("/products/stats/in-stock-count").await
    }

    /// Whether `quantity` units of the product can be sold
    pub async fn check_availability(&self, id: i64, quantity: i32) -> Result<bool, ApiError> {
        self.api
            .get_with_params(&availability_path(id), &[("quantity", quantity.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_product_paths() {
        assert_eq!(product_path(42), "/products/42");
        assert_eq!(low_stock_path(10), "/products/low-stock/10");
        assert_eq!(availability_path(7), "/products/check-availability/7");
    }
}
