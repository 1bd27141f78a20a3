use shared::{DashboardStats, ServerTotals, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_reload::use_reload;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::statistics::StatisticsService;
use crate::services::transactions::TransactionService;

pub struct UseDashboardResult {
    pub stats: Option<DashboardStats>,
    pub server_totals: Option<ServerTotals>,
    pub recent: Vec<Transaction>,
    pub loading: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient, recent_limit: usize) -> UseDashboardResult {
    let stats = use_state(|| Option::<DashboardStats>::None);
    let server_totals = use_state(|| Option::<ServerTotals>::None);
    let recent = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let (generation, refresh) = use_reload();

    {
        let api_client = api_client.clone();
        let stats = stats.clone();
        let server_totals = server_totals.clone();
        let recent = recent.clone();
        let loading = loading.clone();

        use_effect_with(generation, move |_| {
            spawn_local(async move {
                loading.set(true);
                let statistics = StatisticsService::new(api_client.clone());
                let transactions = TransactionService::new(api_client);

                // Requests run one after another.
                if let Ok(computed) = statistics.get_dashboard_stats().await {
                    stats.set(Some(computed));
                }

                match statistics.get_server_totals().await {
                    Ok(totals) => server_totals.set(Some(totals)),
                    Err(e) => Logger::warn_with_component(
                        "use-dashboard",
                        &format!("Server totals unavailable: {}", e),
                    ),
                }

                if let Ok(mut list) = transactions.get_recent().await {
                    list.truncate(recent_limit);
                    recent.set(list);
                }

                loading.set(false);
            });
            || ()
        });
    }

    UseDashboardResult {
        stats: (*stats).clone(),
        server_totals: (*server_totals).clone(),
        recent: (*recent).clone(),
        loading: *loading,
        refresh,
    }
}
