use crate::{Product, Transaction, TransactionType};
use serde::{Deserialize, Serialize};

/// Products at or below this stock count are reported as low stock
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Dashboard summary recomputed from the full product and transaction lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub in_stock_products: usize,
    pub low_stock_products: usize,
    pub out_of_stock_products: usize,
    pub total_transactions: usize,
    pub total_sales: f64,
    pub total_purchases: f64,
    pub net_revenue: f64,
    pub sales: usize,
    pub purchases: usize,
}

impl DashboardStats {
    pub fn compute(products: &[Product], transactions: &[Transaction]) -> Self {
        let in_stock = products.iter().filter(|p| p.is_in_stock()).count();
        let low_stock = products
            .iter()
            .filter(|p| p.is_low_stock(LOW_STOCK_THRESHOLD))
            .count();

        let (sales, total_sales) = sum_by_type(transactions, TransactionType::Sale);
        let (purchases, total_purchases) = sum_by_type(transactions, TransactionType::Purchase);

        Self {
            total_products: products.len(),
            in_stock_products: in_stock,
            low_stock_products: low_stock,
            out_of_stock_products: products.len() - in_stock,
            total_transactions: transactions.len(),
            total_sales,
            total_purchases,
            net_revenue: total_sales - total_purchases,
            sales,
            purchases,
        }
    }
}

fn sum_by_type(transactions: &[Transaction], transaction_type: TransactionType) -> (usize, f64) {
    transactions
        .iter()
        .filter(|t| t.transaction_type == transaction_type)
        .fold((0, 0.0), |(count, sum), t| (count + 1, sum + t.total_price))
}

/// Figures computed by the backend from its `stats` endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTotals {
    pub total_sales: f64,
    pub total_purchases: f64,
    pub net_revenue: f64,
    pub sale_count: u64,
    pub purchase_count: u64,
    pub in_stock_count: u64,
}

impl ServerTotals {
    /// Sums are `[sales, purchases, net revenue]`, missing sums read as 0.
    /// Counts are `[sales, purchases, products in stock]`.
    pub fn from_parts(sums: [Option<f64>; 3], counts: [u64; 3]) -> Self {
        let [total_sales, total_purchases, net_revenue] = sums.map(Option::unwrap_or_default);
        let [sale_count, purchase_count, in_stock_count] = counts;
        Self {
            total_sales,
            total_purchases,
            net_revenue,
            sale_count,
            purchase_count,
            in_stock_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, stock: i32) -> Product {
        Product {
            id: Some(id),
            name: format!("Produk {}", id),
            price: 1000,
            stock,
        }
    }

    fn transaction(transaction_type: TransactionType, total_price: f64) -> Transaction {
        Transaction {
            id: None,
            product: None,
            quantity: 1,
            transaction_type,
            total_price,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_compute_empty() {
        assert_eq!(DashboardStats::compute(&[], &[]), DashboardStats::default());
    }

    #[test]
    fn test_compute_stock_counts() {
        let products = vec![product(1, 0), product(2, 5), product(3, 10), product(4, 50)];
        let stats = DashboardStats::compute(&products, &[]);

        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.in_stock_products, 3);
        // Out of stock products count as low stock too
        assert_eq!(stats.low_stock_products, 3);
        assert_eq!(stats.out_of_stock_products, 1);
    }

    #[test]
    fn test_compute_transaction_totals() {
        let transactions = vec![
            transaction(TransactionType::Sale, 90000.0),
            transaction(TransactionType::Sale, 10000.0),
            transaction(TransactionType::Purchase, 45000.0),
        ];
        let stats = DashboardStats::compute(&[], &transactions);

        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.sales, 2);
        assert_eq!(stats.purchases, 1);
        assert_eq!(stats.total_sales, 100000.0);
        assert_eq!(stats.total_purchases, 45000.0);
        assert_eq!(stats.net_revenue, 55000.0);
    }

    #[test]
    fn test_net_revenue_can_be_negative() {
        let transactions = vec![transaction(TransactionType::Purchase, 2500.0)];
        let stats = DashboardStats::compute(&[], &transactions);
        assert_eq!(stats.net_revenue, -2500.0);
    }

    #[test]
    fn test_server_totals_missing_sums_read_as_zero() {
        let totals = ServerTotals::from_parts([None, Some(45000.0), None], [0, 3, 7]);
        assert_eq!(totals.total_sales, 0.0);
        assert_eq!(totals.total_purchases, 45000.0);
        assert_eq!(totals.net_revenue, 0.0);
        assert_eq!(totals.purchase_count, 3);
        assert_eq!(totals.in_stock_count, 7);
    }
}
