use shared::format::format_currency;
use shared::{ClientConfig, LOW_STOCK_THRESHOLD};
use yew::prelude::*;

use super::transactions::TransactionTable;
use crate::hooks::use_dashboard::use_dashboard;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
    pub config: ClientConfig,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    value: String,
    icon: AttrValue,
    #[prop_or_default]
    tone: AttrValue,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="col-md-3 mb-3">
            <div class={classes!("card", "stat-card", props.tone.to_string())}>
                <div class="card-body">
                    <div class="stat-icon"><i class={classes!("bi", props.icon.to_string())}></i></div>
                    <div class="stat-title">{props.title.to_string()}</div>
                    <div class="stat-value">{&props.value}</div>
                </div>
            </div>
        </div>
    }
}

/// The dashboard counts stock at or below the threshold
fn low_stock_title(threshold: i32) -> String {
    format!("Stok Rendah (\u{2264} {})", threshold)
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let dashboard = use_dashboard(&props.api_client, props.config.recent_transactions_limit);

    let on_refresh = {
        let refresh = dashboard.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let stats = dashboard.stats.clone().unwrap_or_default();

    html! {
        <section class="dashboard">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>{"Dashboard"}</h2>
                <button class="btn btn-outline-primary btn-sm" onclick={on_refresh} disabled={dashboard.loading}>
                    <i class="bi bi-arrow-clockwise me-1"></i>{"Muat ulang"}
                </button>
            </div>

            <div class="row">
                <StatCard title="Total Produk" value={stats.total_products.to_string()} icon="bi-box-seam" />
                <StatCard title="Stok Tersedia" value={stats.in_stock_products.to_string()} icon="bi-check2-circle" tone="text-success" />
                <StatCard title={low_stock_title(LOW_STOCK_THRESHOLD)} value={stats.low_stock_products.to_string()} icon="bi-exclamation-circle" tone="text-warning" />
                <StatCard title="Stok Habis" value={stats.out_of_stock_products.to_string()} icon="bi-x-circle" tone="text-danger" />
            </div>

            <div class="row">
                <StatCard title="Total Transaksi" value={stats.total_transactions.to_string()} icon="bi-receipt" />
                <StatCard
                    title="Total Penjualan"
                    value={format!("{} ({}x)", format_currency(stats.total_sales), stats.sales)}
                    icon="bi-graph-up-arrow"
                    tone="text-success"
                />
                <StatCard
                    title="Total Pembelian"
                    value={format!("{} ({}x)", format_currency(stats.total_purchases), stats.purchases)}
                    icon="bi-cart"
                />
                <StatCard
                    title="Pendapatan Bersih"
                    value={format_currency(stats.net_revenue)}
                    icon="bi-cash-stack"
                    tone={if stats.net_revenue < 0.0 { "text-danger" } else { "text-success" }}
                />
            </div>

            {if let Some(totals) = &dashboard.server_totals {
                html! {
                    <div class="server-totals text-muted small mb-3">
                        {format!(
                            "Menurut server: {} penjualan ({}), {} pembelian ({}), pendapatan bersih {}, {} produk tersedia",
                            totals.sale_count,
                            format_currency(totals.total_sales),
                            totals.purchase_count,
                            format_currency(totals.total_purchases),
                            format_currency(totals.net_revenue),
                            totals.in_stock_count
                        )}
                    </div>
                }
            } else {
                html! {}
            }}

            <TransactionTable
                title="Transaksi Terbaru"
                transactions={dashboard.recent.clone()}
                loading={dashboard.loading}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_low_stock_title_is_inclusive() {
        assert_eq!(low_stock_title(10), "Stok Rendah (\u{2264} 10)");
    }
}
