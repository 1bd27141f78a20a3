use shared::{DashboardStats, ServerTotals, TransactionType};

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::products::ProductService;
use crate::services::transactions::TransactionService;

/// Dashboard figures built on top of the product and transaction services
#[derive(Clone, PartialEq)]
pub struct StatisticsService {
    products: ProductService,
    transactions: TransactionService,
}

impl StatisticsService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            products: ProductService::new(api.clone()),
            transactions: TransactionService::new(api),
        }
    }

    /// Fetch every product and transaction, then summarize them locally
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let fetched = futures::try_join!(self.products.get_all(), self.transactions.get_all());

        match fetched {
            Ok((products, transactions)) => {
                let stats = DashboardStats::compute(&products, &transactions);
                Logger::debug_with_component(
                    "statistics",
                    &format!(
                        "Computed dashboard stats from {} products and {} transactions",
                        products.len(),
                        transactions.len()
                    ),
                );
                Ok(stats)
            }
            Err(e) => {
                Logger::error_with_component(
                    "statistics",
                    &format!("Error getting dashboard stats: {}", e),
                );
                Err(e)
            }
        }
    }

    /// Totals and counts aggregated by the backend
    pub async fn get_server_totals(&self) -> Result<ServerTotals, ApiError> {
        let fetched = futures::try_join!(
            self.transactions.get_total_sales(),
            self.transactions.get_total_purchases(),
            self.transactions.get_net_revenue(),
            self.transactions.count_by_type(TransactionType::Sale),
            self.transactions.count_by_type(TransactionType::Purchase),
            self.products.in_stock_count(),
        );

        let (total_sales, total_purchases, net_revenue, sale_count, purchase_count, in_stock_count) =
            fetched.map_err(|e| {
                Logger::error_with_component(
                    "statistics",
                    &format!("Error getting server totals: {}", e),
                );
                e
            })?;

        Ok(ServerTotals::from_parts(
            [total_sales, total_purchases, net_revenue],
            [sale_count, purchase_count, in_stock_count],
        ))
    }
}
