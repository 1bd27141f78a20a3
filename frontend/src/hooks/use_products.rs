use shared::{PriceRange, Product};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_reload::{use_latest_request, use_reload};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::products::ProductService;

/// Which slice of the catalogue the product table shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    All,
    Search(String),
    PriceRange(PriceRange),
    InStock,
    LowStock(i32),
    OutOfStock,
}

impl ProductFilter {
    pub fn describe(&self) -> String {
        match self {
            ProductFilter::All => "Semua produk".to_string(),
            ProductFilter::Search(name) => format!("Pencarian \"{}\"", name),
            ProductFilter::PriceRange(range) => format!(
                "Harga {} - {}",
                shared::format::format_currency(range.min as f64),
                shared::format::format_currency(range.max as f64)
            ),
            ProductFilter::InStock => "Tersedia".to_string(),
            // The server filter is strict: stock below the threshold
            ProductFilter::LowStock(threshold) => format!("Stok rendah (< {})", threshold),
            ProductFilter::OutOfStock => "Stok habis".to_string(),
        }
    }
}

pub struct UseProductsResult {
    pub products: Vec<Product>,
    pub loading: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_products(api_client: &ApiClient, filter: ProductFilter) -> UseProductsResult {
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| true);
    let (generation, refresh) = use_reload();
    let latest = use_latest_request();

    {
        let api_client = api_client.clone();
        let products = products.clone();
        let loading = loading.clone();

        use_effect_with((filter, generation), move |(filter, _)| {
            let filter = filter.clone();
            let request_id = latest.begin();
            spawn_local(async move {
                loading.set(true);
                let service = ProductService::new(api_client);

                let result = match &filter {
                    ProductFilter::All => service.get_all().await,
                    ProductFilter::Search(name) if name.trim().is_empty() => service.get_all().await,
                    ProductFilter::Search(name) => service.search(name.trim()).await,
                    ProductFilter::PriceRange(range) => service.get_by_price_range(*range).await,
                    ProductFilter::InStock => service.get_in_stock().await,
                    ProductFilter::LowStock(threshold) => service.get_low_stock(Some(*threshold)).await,
                    ProductFilter::OutOfStock => service.get_out_of_stock().await,
                };

                if !latest.is_current(request_id) {
                    Logger::debug_with_component(
                        "use-products",
                        &format!("Dropping stale response for {:?}", filter),
                    );
                    return;
                }

                match result {
                    Ok(list) => {
                        Logger::debug_with_component(
                            "use-products",
                            &format!("Loaded {} products ({:?})", list.len(), filter),
                        );
                        products.set(list);
                    }
                    Err(e) => {
                        // The previous rows stay on screen; the API client already raised an alert.
                        Logger::warn_with_component("use-products", &format!("Failed to load products: {}", e));
                    }
                }

                loading.set(false);
            });
            || ()
        });
    }

    UseProductsResult {
        products: (*products).clone(),
        loading: *loading,
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_low_stock_label_is_strict() {
        assert_eq!(ProductFilter::LowStock(10).describe(), "Stok rendah (< 10)");
        assert_eq!(ProductFilter::OutOfStock.describe(), "Stok habis");
    }
}
