use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod export;
pub mod format;
pub mod stats;
pub mod validation;

pub use config::{BasicCredentials, ClientConfig};
pub use export::{ExportError, ExportFormat};
pub use stats::{DashboardStats, ServerTotals, LOW_STOCK_THRESHOLD};
pub use validation::{
    validate_product, validate_transaction, ProductValidationError, TransactionValidationError,
    ValidationResult,
};

/// Product as stored by the inventory backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the server; absent on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Unit price in whole Rupiah
    pub price: i64,
    pub stock: i32,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Low stock includes products that are already out of stock.
    pub fn is_low_stock(&self, threshold: i32) -> bool {
        self.stock <= threshold
    }
}

/// Reference to an existing product inside a transaction body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: i64,
}

/// Direction of stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Stock leaves the inventory
    Sale,
    /// Stock arrives in the inventory
    Purchase,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Sale, TransactionType::Purchase];

    /// Wire name used in paths such as `/transactions/type/SALE`
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "SALE",
            TransactionType::Purchase => "PURCHASE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Sale => "Penjualan",
            TransactionType::Purchase => "Pembelian",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownTransactionType(pub String);

impl fmt::Display for UnknownTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type: {}", self.0)
    }
}

impl std::error::Error for UnknownTransactionType {}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SALE" => Ok(TransactionType::Sale),
            "PURCHASE" => Ok(TransactionType::Purchase),
            _ => Err(UnknownTransactionType(s.to_string())),
        }
    }
}

/// Transaction as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The backend embeds the full product
    #[serde(default)]
    pub product: Option<Product>,
    pub quantity: i32,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date-time without offset, e.g. `2024-03-01T09:15:00`
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn product_id(&self) -> Option<i64> {
        self.product.as_ref().and_then(|p| p.id)
    }

    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(|p| p.name.as_str()).unwrap_or("-")
    }

    /// Body that records the same transaction again, keeping its total.
    pub fn repeat_request(&self) -> Option<TransactionRequest> {
        Some(TransactionRequest {
            product: ProductRef { id: self.product_id()? },
            quantity: self.quantity,
            transaction_type: self.transaction_type,
            total_price: Some(self.total_price),
            description: self.description.clone(),
        })
    }
}

/// Body for creating or updating a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub product: ProductRef,
    pub quantity: i32,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw product form input before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<i64>,
    pub stock: Option<i32>,
}

impl ProductDraft {
    /// Parse the text of the form inputs; unparseable numbers become `None`.
    pub fn from_inputs(name: &str, price: &str, stock: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.trim().parse().ok(),
            stock: stock.trim().parse().ok(),
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: Some(product.price),
            stock: Some(product.stock),
        }
    }

    /// Converts a validated draft into a product body. Callers validate first.
    pub fn into_product(self, id: Option<i64>) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            price: self.price.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
        }
    }
}

/// Raw transaction form input before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
    pub transaction_type: Option<TransactionType>,
    pub description: String,
}

impl TransactionDraft {
    pub fn from_inputs(product_id: &str, quantity: &str, transaction_type: &str, description: &str) -> Self {
        Self {
            product_id: product_id.trim().parse().ok(),
            quantity: quantity.trim().parse().ok(),
            transaction_type: transaction_type.parse().ok(),
            description: description.to_string(),
        }
    }

    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            product_id: transaction.product_id(),
            quantity: Some(transaction.quantity),
            transaction_type: Some(transaction.transaction_type),
            description: transaction.description.clone().unwrap_or_default(),
        }
    }

    /// Total for the preview line: unit price times quantity
    pub fn total_price(&self, unit_price: i64) -> Option<f64> {
        self.quantity.map(|q| unit_price as f64 * q as f64)
    }

    /// Builds the request body; `None` when a required field is missing.
    pub fn into_request(self, unit_price: Option<i64>) -> Option<TransactionRequest> {
        let total_price = unit_price.and_then(|price| self.total_price(price));
        let description = self.description.trim();
        Some(TransactionRequest {
            product: ProductRef { id: self.product_id? },
            quantity: self.quantity?,
            transaction_type: self.transaction_type?,
            total_price,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }

    /// Body for editing `previous`; keeps its stored total when the unit price is unknown.
    pub fn into_update_request(
        self,
        unit_price: Option<i64>,
        previous: &Transaction,
    ) -> Option<TransactionRequest> {
        let mut request = self.into_request(unit_price)?;
        if request.total_price.is_none() {
            request.total_price = Some(previous.total_price);
        }
        Some(request)
    }
}

/// Query for `/products/price-range`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Query for `/transactions/date-range`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDateTime,
    pub end: chrono::NaiveDateTime,
}

impl DateRange {
    /// Whole days from the start of `from` to the end of `to`.
    pub fn from_dates(from: chrono::NaiveDate, to: chrono::NaiveDate) -> Option<Self> {
        let start = from.and_hms_opt(0, 0, 0)?;
        let end = to.and_hms_opt(23, 59, 59)?;
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{"id":7,"name":"Kopi Arabika","price":45000,"stock":12}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(7));
        assert_eq!(product.price, 45000);

        let new_product = Product {
            id: None,
            name: "Teh".to_string(),
            price: 8000,
            stock: 0,
        };
        let body = serde_json::to_string(&new_product).unwrap();
        assert_eq!(body, r#"{"name":"Teh","price":8000,"stock":0}"#);
    }

    #[test]
    fn test_product_stock_levels() {
        let mut product = Product {
            id: Some(1),
            name: "Gula".to_string(),
            price: 15000,
            stock: 0,
        };
        assert!(!product.is_in_stock());
        assert!(product.is_low_stock(10));

        product.stock = 10;
        assert!(product.is_in_stock());
        assert!(product.is_low_stock(10));

        product.stock = 11;
        assert!(!product.is_low_stock(10));
    }

    #[test]
    fn test_transaction_type_names() {
        assert_eq!(serde_json::to_string(&TransactionType::Sale).unwrap(), "\"SALE\"");
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"PURCHASE\"").unwrap(),
            TransactionType::Purchase
        );
        assert_eq!("sale".parse::<TransactionType>().unwrap(), TransactionType::Sale);
        assert!("refund".parse::<TransactionType>().is_err());
        assert_eq!(TransactionType::Purchase.to_string(), "PURCHASE");
    }

    #[test]
    fn test_transaction_from_backend() {
        let json = r#"{
            "id": 3,
            "product": {"id": 7, "name": "Kopi Arabika", "price": 45000, "stock": 9},
            "quantity": 2,
            "transactionType": "SALE",
            "totalPrice": 90000.00,
            "description": null,
            "createdAt": "2024-03-01T09:15:00"
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.product_id(), Some(7));
        assert_eq!(transaction.product_name(), "Kopi Arabika");
        assert_eq!(transaction.total_price, 90000.0);
        assert_eq!(transaction.created_at.as_deref(), Some("2024-03-01T09:15:00"));
    }

    #[test]
    fn test_transaction_draft_into_request() {
        let draft = TransactionDraft::from_inputs("7", "3", "PURCHASE", "  restock  ");
        let request = draft.into_request(Some(45000)).unwrap();
        assert_eq!(request.product, ProductRef { id: 7 });
        assert_eq!(request.total_price, Some(135000.0));
        assert_eq!(request.description.as_deref(), Some("restock"));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["product"]["id"], 7);
        assert_eq!(body["transactionType"], "PURCHASE");

        let missing = TransactionDraft::from_inputs("", "3", "SALE", "");
        assert!(missing.into_request(None).is_none());
    }

    #[test]
    fn test_product_draft_from_inputs() {
        let draft = ProductDraft::from_inputs(" Beras ", "12000", "abc");
        assert_eq!(draft.price, Some(12000));
        assert_eq!(draft.stock, None);

        let product = ProductDraft::from_inputs(" Beras ", "12000", "5").into_product(Some(4));
        assert_eq!(product.name, "Beras");
        assert_eq!(product.id, Some(4));
    }

    #[test]
    fn test_date_range_from_dates() {
        let from = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let to = chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let range = DateRange::from_dates(from, to).unwrap();
        assert_eq!(range.start.to_string(), "2024-03-01 00:00:00");
        assert_eq!(range.end.to_string(), "2024-03-31 23:59:59");

        assert!(DateRange::from_dates(to, from).is_none());
    }

    #[test]
    fn test_transaction_draft_from_transaction() {
        let transaction = Transaction {
            id: Some(3),
            product: Some(Product {
                id: Some(9),
                name: "Gula".to_string(),
                price: 15000,
                stock: 20,
            }),
            quantity: 2,
            transaction_type: TransactionType::Sale,
            total_price: 30000.0,
            description: None,
            created_at: None,
        };

        let draft = TransactionDraft::from_transaction(&transaction);
        assert_eq!(draft.product_id, Some(9));
        assert_eq!(draft.quantity, Some(2));
        assert_eq!(draft.description, "");

        let repeat = transaction.repeat_request().unwrap();
        assert_eq!(repeat.product.id, 9);
        assert_eq!(repeat.total_price, Some(30000.0));

        let orphan = Transaction {
            product: None,
            ..transaction
        };
        assert!(orphan.repeat_request().is_none());
    }

    #[test]
    fn test_update_request_keeps_previous_total() {
        let previous = Transaction {
            id: Some(3),
            product: None,
            quantity: 2,
            transaction_type: TransactionType::Sale,
            total_price: 30000.0,
            description: None,
            created_at: None,
        };
        let draft = TransactionDraft::from_inputs("9", "4", "SALE", "");

        let request = draft.clone().into_update_request(None, &previous).unwrap();
        assert_eq!(request.total_price, Some(30000.0));

        let request = draft.into_update_request(Some(15000), &previous).unwrap();
        assert_eq!(request.total_price, Some(60000.0));
    }
}
