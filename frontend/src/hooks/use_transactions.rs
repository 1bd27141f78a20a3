use shared::{DateRange, Transaction, TransactionType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_reload::{use_latest_request, use_reload};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::transactions::TransactionService;

/// Which transactions the table shows
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionFilter {
    All,
    ByType(TransactionType),
    ByProduct(i64),
    DateRange(DateRange),
    Recent,
}

pub struct UseTransactionsResult {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_transactions(api_client: &ApiClient, filter: TransactionFilter) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let (generation, refresh) = use_reload();
    let latest = use_latest_request();

    {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();

        use_effect_with((filter, generation), move |(filter, _)| {
            let filter = filter.clone();
            let request_id = latest.begin();
            spawn_local(async move {
                loading.set(true);
                let service = TransactionService::new(api_client);

                let result = match filter {
                    TransactionFilter::All => service.get_all().await,
                    TransactionFilter::ByType(transaction_type) => {
                        service.get_by_type(transaction_type).await
                    }
                    TransactionFilter::ByProduct(product_id) => {
                        service.get_by_product(product_id).await
                    }
                    TransactionFilter::DateRange(range) => service.get_by_date_range(range).await,
                    TransactionFilter::Recent => service.get_recent().await,
                };

                if !latest.is_current(request_id) {
                    Logger::debug_with_component(
                        "use-transactions",
                        &format!("Dropping stale response for {:?}", filter),
                    );
                    return;
                }

                match result {
                    Ok(list) => transactions.set(list),
                    Err(e) => {
                        Logger::warn_with_component(
                            "use-transactions",
                            &format!("Failed to fetch transactions: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
            || ()
        });
    }

    UseTransactionsResult {
        transactions: (*transactions).clone(),
        loading: *loading,
        refresh,
    }
}
